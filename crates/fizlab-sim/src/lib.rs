//! Simulation engine and the eight teaching modules.
//!
//! `SimEngine` hosts independently clocked module instances, processes
//! frontend commands at tick boundaries, and produces `ModuleFrame`
//! snapshots. Completely headless (no Tauri dependency), enabling
//! deterministic testing.

pub mod engine;
pub mod module;
pub mod modules;
pub mod sink;

#[cfg(test)]
mod tests;
