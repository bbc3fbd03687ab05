//! The simulation module contract.
//!
//! Each teaching simulation owns a small state vector, advances it when
//! the engine ticks it, and appends its renderable state to a frame.
//! Modules never schedule themselves and never touch another module's
//! state; the engine is the only clock.

use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::ModuleFrame;

/// Lifecycle contract implemented by every teaching simulation.
pub trait SimulationModule: Send {
    /// Declared slider ranges for this module.
    fn param_specs(&self) -> &'static [ParamSpec];

    /// Build the declared baseline state. Called once on activation.
    ///
    /// `seed` drives any randomness (same seed = same run). Modules that
    /// own a sustained tone start it here.
    fn initialize(&mut self, seed: u64, params: &ParamSet, events: &mut Vec<AudioEvent>);

    /// Advance one tick. `dt` arrives already speed-scaled; parameters
    /// are pre-clamped at the write boundary and are not re-validated
    /// here.
    fn update(&mut self, dt: f64, params: &ParamSet, events: &mut Vec<AudioEvent>);

    /// Return exactly to the declared baseline. The engine leaves the
    /// instance paused afterward; current parameter values are kept.
    fn reset(&mut self, params: &ParamSet);

    /// Append bodies, links, and readouts for the current state.
    fn frame(&self, out: &mut ModuleFrame);

    /// Release held resources. A module that started a tone must emit
    /// `ToneStop` here; the engine calls this on every teardown path.
    fn deactivate(&mut self, _events: &mut Vec<AudioEvent>) {}
}
