//! FizLab Tauri application.
//!
//! This crate wires the simulation engine and the site shell together
//! and exposes them to the frontend via Tauri IPC commands and events.

pub mod ipc;
pub mod prefs;
pub mod sim_loop;
pub mod state;

pub use fizlab_core as core;
