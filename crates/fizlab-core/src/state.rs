//! Frame snapshots — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BodyKind, ModuleKind};
use crate::types::{Position, SimTime};

/// One module instance's renderable state for one tick.
///
/// The render surface consumes this wholesale: a retained-mode consumer
/// diffs it, an immediate-mode consumer clears and redraws. Neither
/// choice leaks back into the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleFrame {
    pub instance: u32,
    pub module: ModuleKind,
    pub time: SimTime,
    pub running: bool,
    pub speed: f64,
    pub bodies: Vec<BodyView>,
    pub links: Vec<LinkView>,
    pub readouts: Vec<Readout>,
}

impl ModuleFrame {
    /// Empty frame for an instance (no bodies renders as a no-op, not an error).
    pub fn empty(instance: u32, module: ModuleKind) -> Self {
        Self {
            instance,
            module,
            time: SimTime::default(),
            running: false,
            speed: 1.0,
            bodies: Vec::new(),
            links: Vec::new(),
            readouts: Vec::new(),
        }
    }
}

/// A single renderable body. Radius and color are fixed at spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyView {
    pub position: Position,
    pub radius: f64,
    /// CSS color string, immutable after creation.
    pub color: String,
    pub kind: BodyKind,
    /// Transient emphasis (e.g. a ball that collided this tick).
    pub highlight: bool,
}

/// A line between two bodies (helix rungs, orbit guides), by body index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinkView {
    pub a: usize,
    pub b: usize,
}

/// An on-screen numeric display (label resolved through i18n).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readout {
    pub label_key: String,
    pub value: f64,
    pub unit: String,
}
