//! Tauri IPC command handlers.
//!
//! These `#[tauri::command]` functions are invoked by the frontend via
//! `invoke()`. Simulation control is bridged to the loop thread over a
//! channel; routing, SEO, facts and translations are answered inline.

use tauri::{AppHandle, State};

use fizlab_core::commands::ControlCommand;
use fizlab_core::enums::{Language, Theme};
use fizlab_core::schema::DailyFactRecord;
use fizlab_core::state::ModuleFrame;
use fizlab_site::facts;
use fizlab_site::i18n;
use fizlab_site::routes::{self, RouteMatch};
use fizlab_site::seo::{self, HeadTags};

use crate::prefs::Preferences;
use crate::sim_loop;
use crate::state::{AppState, LoopCommand};

/// Start the simulation loop. Spawns the thread if not already running.
///
/// Frontend: `invoke("start_engine")`
#[tauri::command]
pub fn start_engine(app_handle: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Engine already running".into());
    }

    let cmd_tx = sim_loop::spawn_sim_loop(app_handle, state.latest_frames.clone());

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Stop the simulation loop, releasing any held tones.
///
/// Frontend: `invoke("stop_engine")`
#[tauri::command]
pub fn stop_engine(state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.take() {
        Some(tx) => {
            // A send failure means the thread is already gone.
            let _ = tx.send(LoopCommand::Shutdown);
            *running = false;
            Ok(())
        }
        None => Err("Engine not started".into()),
    }
}

/// Forward a control command to the engine.
///
/// Frontend: `invoke("send_control", { command })`
#[tauri::command]
pub fn send_control(command: ControlCommand, state: State<'_, AppState>) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Control(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Engine not started".into()),
    }
}

/// Get the latest frames synchronously (for polling / initial state).
///
/// Frontend: `invoke("get_frames")`
#[tauri::command]
pub fn get_frames(state: State<'_, AppState>) -> Result<Vec<ModuleFrame>, String> {
    let lock = state.latest_frames.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Current persisted preferences.
#[tauri::command]
pub fn get_preferences(state: State<'_, AppState>) -> Result<Preferences, String> {
    let store = state.preferences.lock().map_err(|e| e.to_string())?;
    Ok(store.current())
}

/// Persist the theme. Unknown codes fall back to the default theme.
#[tauri::command]
pub fn set_theme(code: String, state: State<'_, AppState>) -> Result<(), String> {
    let mut store = state.preferences.lock().map_err(|e| e.to_string())?;
    store.set_theme(Theme::from_code(&code)).map_err(|e| e.to_string())
}

/// Persist the interface language.
#[tauri::command]
pub fn set_language(code: String, state: State<'_, AppState>) -> Result<(), String> {
    let mut store = state.preferences.lock().map_err(|e| e.to_string())?;
    store
        .set_language(Language::from_code(&code))
        .map_err(|e| e.to_string())
}

/// Resolve a path to a page, preferring the persisted language.
#[tauri::command]
pub fn resolve_route(path: String, state: State<'_, AppState>) -> Result<RouteMatch, String> {
    let language = preferred_language(&state)?;
    Ok(routes::resolve(&path, language))
}

/// Rewrite the current path into another language, keeping any suffix.
#[tauri::command]
pub fn switch_route_language(
    path: String,
    to: String,
    state: State<'_, AppState>,
) -> Result<String, String> {
    let preferred = preferred_language(&state)?;
    Ok(routes::switch_language(&path, preferred, Language::from_code(&to)))
}

/// Head metadata for a path, rendered in the path's own language.
#[tauri::command]
pub fn page_head(path: String, state: State<'_, AppState>) -> Result<HeadTags, String> {
    let preferred = preferred_language(&state)?;
    let matched = routes::resolve(&path, preferred);
    let meta = seo::page_meta(matched.route);
    Ok(seo::head_tags(&meta, matched.language))
}

/// The bundled fact for a given day in the persisted language.
#[tauri::command]
pub fn daily_fact(
    day: u64,
    category: Option<String>,
    state: State<'_, AppState>,
) -> Result<Option<DailyFactRecord>, String> {
    let language = preferred_language(&state)?;
    let pool = facts::builtin_facts();
    Ok(facts::fact_for_day(&pool, day, language, category.as_deref()).cloned())
}

/// Translate a message key in the persisted language.
#[tauri::command]
pub fn translate(key: String, state: State<'_, AppState>) -> Result<String, String> {
    let language = preferred_language(&state)?;
    Ok(i18n::translate(language, &key).to_string())
}

fn preferred_language(state: &State<'_, AppState>) -> Result<Language, String> {
    let store = state.preferences.lock().map_err(|e| e.to_string())?;
    Ok(store.current().language)
}
