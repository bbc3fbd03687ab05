//! Render sink — the seam between simulation and render surface.
//!
//! The engine hands a complete snapshot of body state to whatever sink
//! is attached. A retained-mode consumer (SVG scene diffing) and an
//! immediate-mode consumer (canvas clear-and-redraw) implement the same
//! trait; the choice never leaks into update logic.

use fizlab_core::state::ModuleFrame;

/// Consumes one batch of frames per engine tick.
pub trait RenderSink {
    fn present(&mut self, frames: &[ModuleFrame]);
}

/// Sink that keeps the last presented batch. Used by tests and by the
/// polling path.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub last: Vec<ModuleFrame>,
    pub presented: u64,
}

impl RenderSink for CollectingSink {
    fn present(&mut self, frames: &[ModuleFrame]) {
        self.last = frames.to_vec();
        self.presented += 1;
    }
}
