//! Events emitted by the simulation for the frontend sound system.
//!
//! The Rust side only produces these as data; platform audio lives in
//! the frontend. A module that starts a tone owns it and must emit
//! `ToneStop` when deactivated — the engine enforces this by calling
//! `deactivate` on every teardown path.

use serde::{Deserialize, Serialize};

/// Audio cues for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Two bodies collided; speed drives the click volume.
    CollisionTick { speed: f64 },
    /// Start (or retune) a sustained tone.
    ToneStart { frequency_hz: f64 },
    /// Release the sustained tone.
    ToneStop,
}
