//! The eight teaching simulations.
//!
//! Each module is self-contained: no module reads another's state, and
//! each is individually small. Body-list modules (billiards, electron
//! drift) keep their bodies in a private hecs world; scalar-phase
//! modules (pendulum, AC, helix, orbits, shells, scale) are plain
//! structs.

pub mod alternating_current;
pub mod atomic_structure;
pub mod billiards;
pub mod dna_helix;
pub mod electron_drift;
pub mod pendulum;
pub mod planetary_motion;
pub mod scale_explorer;

use fizlab_core::enums::{BodyKind, ModuleKind};
use fizlab_core::params::ParamSpec;

use crate::module::SimulationModule;

/// Shared body component for the hecs-backed modules.
/// Radius and color are fixed at spawn.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Shape {
    /// Spawn index; gives queries a stable presentation order.
    pub index: usize,
    pub radius: f64,
    pub color: &'static str,
    pub kind: BodyKind,
}

/// Construct a fresh, uninitialized module of the given kind.
pub fn create(kind: ModuleKind) -> Box<dyn SimulationModule> {
    match kind {
        ModuleKind::ElectronDrift => Box::new(electron_drift::ElectronDrift::new()),
        ModuleKind::AlternatingCurrent => {
            Box::new(alternating_current::AlternatingCurrent::new())
        }
        ModuleKind::Billiards => Box::new(billiards::Billiards::new()),
        ModuleKind::PlanetaryMotion => Box::new(planetary_motion::PlanetaryMotion::new()),
        ModuleKind::Pendulum => Box::new(pendulum::Pendulum::new()),
        ModuleKind::ScaleExplorer => Box::new(scale_explorer::ScaleExplorer::new()),
        ModuleKind::AtomicStructure => Box::new(atomic_structure::AtomicStructure::new()),
        ModuleKind::DnaHelix => Box::new(dna_helix::DnaHelix::new()),
    }
}

/// Declared slider ranges for a module kind (for the frontend controls).
pub fn param_specs(kind: ModuleKind) -> &'static [ParamSpec] {
    match kind {
        ModuleKind::ElectronDrift => &electron_drift::PARAMS,
        ModuleKind::AlternatingCurrent => &alternating_current::PARAMS,
        ModuleKind::Billiards => &billiards::PARAMS,
        ModuleKind::PlanetaryMotion => &planetary_motion::PARAMS,
        ModuleKind::Pendulum => &pendulum::PARAMS,
        ModuleKind::ScaleExplorer => &scale_explorer::PARAMS,
        ModuleKind::AtomicStructure => &atomic_structure::PARAMS,
        ModuleKind::DnaHelix => &dna_helix::PARAMS,
    }
}
