//! Atomic structure.
//!
//! A nucleus drawn as a ring of nucleons, with electrons filling the
//! 2/8/18 occupancy shells and orbiting at per-shell rates. The electron
//! count slider selects the element (neutral atom, protons = electrons).

use fizlab_core::constants::{SHELL_BASE_RATE, SHELL_CAPACITY, SHELL_RADII, WORLD_H, WORLD_W};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, ModuleFrame, Readout};
use fizlab_core::types::{wrap_phase, Position};

const CENTER_X: f64 = WORLD_W / 2.0;
const CENTER_Y: f64 = WORLD_H / 2.0;

/// Radius of the nucleon ring.
const NUCLEUS_RADIUS: f64 = 14.0;

pub static PARAMS: [ParamSpec; 1] = [ParamSpec {
    key: "electron_count",
    label_key: "param.electron_count",
    min: 1.0,
    max: 18.0,
    step: 1.0,
    default: 6.0,
}];

pub struct AtomicStructure {
    shell_angles: [f64; 3],
    electron_count: usize,
}

impl AtomicStructure {
    pub fn new() -> Self {
        Self {
            shell_angles: [0.0; 3],
            electron_count: 6,
        }
    }

    /// Electrons per shell for the current element, innermost first.
    fn occupancy(&self) -> [usize; 3] {
        let mut remaining = self.electron_count;
        let mut shells = [0usize; 3];
        for (i, cap) in SHELL_CAPACITY.iter().enumerate() {
            shells[i] = remaining.min(*cap);
            remaining -= shells[i];
        }
        shells
    }
}

impl crate::module::SimulationModule for AtomicStructure {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, _seed: u64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.shell_angles = [0.0; 3];
        self.electron_count = params.get("electron_count") as usize;
    }

    fn reset(&mut self, params: &ParamSet) {
        self.shell_angles = [0.0; 3];
        self.electron_count = params.get("electron_count") as usize;
    }

    fn update(&mut self, dt: f64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.electron_count = params.get("electron_count") as usize;
        for (i, angle) in self.shell_angles.iter_mut().enumerate() {
            // Outer shells run slower, like the orbit module.
            let rate = SHELL_BASE_RATE / (i as f64 + 1.0);
            *angle = wrap_phase(*angle + rate * dt);
        }
    }

    fn frame(&self, out: &mut ModuleFrame) {
        // Nucleus: protons and neutrons alternating around a small ring.
        let nucleon_count = self.electron_count * 2;
        for n in 0..nucleon_count {
            let angle = n as f64 / nucleon_count as f64 * std::f64::consts::TAU;
            out.bodies.push(BodyView {
                position: Position::new(
                    CENTER_X + NUCLEUS_RADIUS * angle.cos(),
                    CENTER_Y + NUCLEUS_RADIUS * angle.sin(),
                ),
                radius: 6.0,
                color: if n % 2 == 0 { "#ef4444" } else { "#94a3b8" }.to_string(),
                kind: BodyKind::Nucleon,
                highlight: false,
            });
        }

        for (shell, count) in self.occupancy().into_iter().enumerate() {
            for k in 0..count {
                let spread = k as f64 / count as f64 * std::f64::consts::TAU;
                let angle = self.shell_angles[shell] + spread;
                out.bodies.push(BodyView {
                    position: Position::new(
                        CENTER_X + SHELL_RADII[shell] * angle.cos(),
                        CENTER_Y + SHELL_RADII[shell] * angle.sin(),
                    ),
                    radius: 5.0,
                    color: "#38bdf8".to_string(),
                    kind: BodyKind::Electron,
                    highlight: false,
                });
            }
        }

        out.readouts.push(Readout {
            label_key: "readout.atomic_number".into(),
            value: self.electron_count as f64,
            unit: "".into(),
        });
    }
}
