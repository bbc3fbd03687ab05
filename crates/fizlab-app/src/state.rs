//! Application state shared across Tauri commands and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use fizlab_core::commands::ControlCommand;
use fizlab_core::state::ModuleFrame;

use crate::prefs::PreferenceStore;

/// Commands sent from the IPC layer to the simulation loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A control command to forward to the engine.
    Control(ControlCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Shared application state, stored as Tauri managed state.
///
/// Tauri requires managed state to be Send + Sync:
/// - `mpsc::Sender` is Send but not Sync, so it lives in a `Mutex`,
///   `None` until `start_engine` spawns the loop
/// - the latest frames are shared with the loop thread via `Arc<Mutex>`
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest frames for synchronous `get_frames` queries. Updated by
    /// the loop thread after each tick.
    pub latest_frames: Arc<Mutex<Vec<ModuleFrame>>>,
    /// Whether the loop thread is currently running.
    pub running: Mutex<bool>,
    pub preferences: Mutex<PreferenceStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_frames: Arc::new(Mutex::new(Vec::new())),
            running: Mutex::new(false),
            preferences: Mutex::new(PreferenceStore::in_memory()),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_frames.lock().unwrap().is_empty());
        assert!(!*state.running.lock().unwrap());
    }
}
