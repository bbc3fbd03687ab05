//! Core types and definitions for the FizLab simulations.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, parameter descriptors, control commands, frame
//! snapshots, events, constants, and the external database contract.
//! It has no dependency on Tauri or any runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod params;
pub mod schema;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
