//! Simulation loop thread — ticks the engine at 60Hz and emits frames.
//!
//! The engine is created inside the thread so it is owned there.
//! Commands arrive via `mpsc` channel. Frames go out as Tauri events
//! and are stored in shared state for synchronous polling; audio events
//! ride a second event channel so the frontend's sound layer can react
//! without parsing frames.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tauri::{AppHandle, Emitter};

use fizlab_core::constants::TICK_RATE;
use fizlab_core::state::ModuleFrame;
use fizlab_sim::engine::SimEngine;
use fizlab_sim::sink::RenderSink;

use crate::state::LoopCommand;

/// Duration of one tick. Per-instance speed is handled inside the
/// engine; the loop itself always runs at the nominal rate.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// A render sink that forwards frames to the webview.
struct EventSink {
    app_handle: AppHandle,
}

impl RenderSink for EventSink {
    fn present(&mut self, frames: &[ModuleFrame]) {
        let _ = self.app_handle.emit("sim:frames", frames);
    }
}

/// Spawns the simulation loop in a new thread.
///
/// Returns the command sender for the IPC layer to use.
pub fn spawn_sim_loop(
    app_handle: AppHandle,
    latest_frames: Arc<Mutex<Vec<ModuleFrame>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("fizlab-sim-loop".into())
        .spawn(move || {
            run_sim_loop(app_handle, cmd_rx, &latest_frames);
        })
        .expect("Failed to spawn simulation loop thread");

    cmd_tx
}

/// The loop. Runs until Shutdown command or channel disconnect.
fn run_sim_loop(
    app_handle: AppHandle,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_frames: &Mutex<Vec<ModuleFrame>>,
) {
    let mut engine = SimEngine::new();
    let mut sink = EventSink {
        app_handle: app_handle.clone(),
    };
    let mut next_tick_time = Instant::now();
    log::info!("simulation loop started at {TICK_RATE}Hz");

    'running: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Control(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => break 'running,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'running,
            }
        }

        // 2. Advance one tick (paused instances freeze inside the engine)
        let frames = engine.tick();

        // 3. Emit to the frontend
        sink.present(&frames);
        let audio = engine.drain_audio();
        if !audio.is_empty() {
            let _ = app_handle.emit("sim:audio", &audio);
        }

        // 4. Store latest frames for synchronous polling
        if let Ok(mut lock) = latest_frames.lock() {
            *lock = frames;
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }

    // Tear everything down so held tones get their stop events even
    // when the window closes mid-hum.
    engine.deactivate_all();
    let residual = engine.drain_audio();
    if !residual.is_empty() {
        let _ = app_handle.emit("sim:audio", &residual);
    }
    log::info!("simulation loop stopped");
}
