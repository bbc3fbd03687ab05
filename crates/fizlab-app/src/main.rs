// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tauri::Manager;

use fizlab_app::ipc;
use fizlab_app::prefs::PreferenceStore;
use fizlab_app::state::AppState;

fn main() {
    env_logger::init();

    tauri::Builder::default()
        .manage(AppState::new())
        .setup(|app| {
            // Attach the preference store once the config dir is known.
            let dir = app.path().app_config_dir()?;
            let state = app.state::<AppState>();
            if let Ok(mut store) = state.preferences.lock() {
                *store = PreferenceStore::open(dir.join("preferences.json"));
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            ipc::start_engine,
            ipc::stop_engine,
            ipc::send_control,
            ipc::get_frames,
            ipc::get_preferences,
            ipc::set_theme,
            ipc::set_language,
            ipc::resolve_route,
            ipc::switch_route_language,
            ipc::page_head,
            ipc::daily_fact,
            ipc::translate,
        ])
        .run(tauri::generate_context!())
        .expect("error while running FizLab");
}
