//! Simulation engine — hosts the active module instances.
//!
//! `SimEngine` owns every mounted module, processes frontend commands at
//! tick boundaries, advances running instances, and produces
//! `ModuleFrame` snapshots. A page embeds 1-4 instances; instances never
//! share state, so their update order carries no meaning beyond
//! determinism of the output.

use std::collections::{BTreeMap, VecDeque};

use fizlab_core::commands::ControlCommand;
use fizlab_core::constants::{DT, MAX_INSTANCES};
use fizlab_core::enums::ModuleKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::ParamSet;
use fizlab_core::state::ModuleFrame;
use fizlab_core::types::SimTime;

use crate::module::SimulationModule;
use crate::modules;

/// One mounted module plus its per-instance clock and controls.
struct InstanceHost {
    kind: ModuleKind,
    module: Box<dyn SimulationModule>,
    params: ParamSet,
    time: SimTime,
    running: bool,
    speed: f64,
}

/// The simulation engine. Owns all mounted instances.
pub struct SimEngine {
    // BTreeMap keeps frame output ordered by instance id.
    instances: BTreeMap<u32, InstanceHost>,
    command_queue: VecDeque<ControlCommand>,
    audio_events: Vec<AudioEvent>,
}

impl SimEngine {
    pub fn new() -> Self {
        Self {
            instances: BTreeMap::new(),
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the engine by one tick and return the resulting frames.
    ///
    /// Paused instances are skipped entirely: their state freezes at the
    /// last computed value and their accumulators are untouched, so
    /// resuming continues without discontinuity.
    pub fn tick(&mut self) -> Vec<ModuleFrame> {
        self.process_commands();

        for host in self.instances.values_mut() {
            if !host.running {
                continue;
            }
            let dt = DT * host.speed;
            host.module.update(dt, &host.params, &mut self.audio_events);
            host.time.advance(dt);
        }

        self.build_frames()
    }

    /// Drain the audio events produced since the last drain.
    pub fn drain_audio(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    /// Tear down every instance, releasing held tones.
    pub fn deactivate_all(&mut self) {
        let ids: Vec<u32> = self.instances.keys().copied().collect();
        for id in ids {
            self.remove_instance(id);
        }
    }

    /// Number of mounted instances.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Whether an instance exists and is not paused.
    pub fn is_running(&self, instance: u32) -> bool {
        self.instances.get(&instance).is_some_and(|h| h.running)
    }

    /// Current frames without advancing time (for synchronous polling).
    pub fn current_frames(&self) -> Vec<ModuleFrame> {
        self.build_frames()
    }

    fn build_frames(&self) -> Vec<ModuleFrame> {
        self.instances
            .iter()
            .map(|(id, host)| {
                let mut frame = ModuleFrame::empty(*id, host.kind);
                frame.time = host.time;
                frame.running = host.running;
                frame.speed = host.speed;
                host.module.frame(&mut frame);
                frame
            })
            .collect()
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Activate {
                instance,
                module,
                seed,
            } => {
                // Re-activating an occupied slot tears the old module down first.
                self.remove_instance(instance);
                if self.instances.len() >= MAX_INSTANCES {
                    return;
                }
                let mut boxed = modules::create(module);
                let params = ParamSet::new(boxed.param_specs());
                boxed.initialize(seed, &params, &mut self.audio_events);
                self.instances.insert(
                    instance,
                    InstanceHost {
                        kind: module,
                        module: boxed,
                        params,
                        time: SimTime::default(),
                        running: true,
                        speed: 1.0,
                    },
                );
            }
            ControlCommand::Deactivate { instance } => {
                self.remove_instance(instance);
            }
            ControlCommand::SetParam {
                instance,
                key,
                value,
            } => {
                if let Some(host) = self.instances.get_mut(&instance) {
                    host.params.set(&key, value);
                }
            }
            ControlCommand::SetSpeed { instance, speed } => {
                if let Some(host) = self.instances.get_mut(&instance) {
                    host.speed = speed.clamp(0.0, 4.0);
                }
            }
            ControlCommand::Pause { instance } => {
                if let Some(host) = self.instances.get_mut(&instance) {
                    host.running = false;
                }
            }
            ControlCommand::Resume { instance } => {
                if let Some(host) = self.instances.get_mut(&instance) {
                    host.running = true;
                }
            }
            ControlCommand::Reset { instance } => {
                if let Some(host) = self.instances.get_mut(&instance) {
                    host.module.reset(&host.params);
                    host.time = SimTime::default();
                    host.running = false;
                }
            }
            ControlCommand::PauseAll => {
                for host in self.instances.values_mut() {
                    host.running = false;
                }
            }
            ControlCommand::ResumeAll => {
                for host in self.instances.values_mut() {
                    host.running = true;
                }
            }
        }
    }

    fn remove_instance(&mut self, instance: u32) {
        if let Some(mut host) = self.instances.remove(&instance) {
            host.module.deactivate(&mut self.audio_events);
        }
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SimEngine {
    fn drop(&mut self) {
        self.deactivate_all();
    }
}
