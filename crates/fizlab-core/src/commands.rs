//! Control commands sent from the frontend to the simulation engine.
//!
//! Commands are queued and applied at the next tick boundary. Slider
//! drags fire `SetParam` on every intermediate value, so the engine may
//! see many writes to the same key between two ticks.

use serde::{Deserialize, Serialize};

use crate::enums::ModuleKind;

/// All possible frontend actions on the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    /// Mount a module instance (page navigation / embed).
    Activate {
        instance: u32,
        module: ModuleKind,
        /// RNG seed for determinism. Same seed = same run.
        seed: u64,
    },
    /// Unmount an instance. Guarantees release of any held tone.
    Deactivate { instance: u32 },
    /// Slider change. Clamped to the declared range at the write boundary.
    SetParam {
        instance: u32,
        key: String,
        value: f64,
    },
    /// Set the time-scale factor for one instance.
    SetSpeed { instance: u32, speed: f64 },
    /// Freeze an instance at its last computed state.
    Pause { instance: u32 },
    /// Continue from the frozen state without discontinuity.
    Resume { instance: u32 },
    /// Reinitialize to the declared baseline and leave the instance paused.
    Reset { instance: u32 },
    /// Freeze every instance (tab hidden).
    PauseAll,
    /// Resume every instance (tab visible again).
    ResumeAll,
}
