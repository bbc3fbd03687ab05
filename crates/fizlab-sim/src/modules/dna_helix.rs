//! Rotating DNA double helix.
//!
//! Two phase-shifted sinusoidal strands with base-pair rungs between
//! them. Pure phase animation; the rotation speed slider is the only
//! control.

use fizlab_core::constants::{HELIX_AMPLITUDE, HELIX_BASE_PAIRS, WORLD_H, WORLD_W};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, LinkView, ModuleFrame};
use fizlab_core::types::{wrap_phase, Position};

/// Phase advance between consecutive base pairs along the strand.
const TWIST_PER_PAIR: f64 = 0.55;

pub static PARAMS: [ParamSpec; 1] = [ParamSpec {
    key: "rotation_speed",
    label_key: "param.rotation_speed",
    min: 0.0,
    max: 4.0,
    step: 0.1,
    default: 1.0,
}];

pub struct DnaHelix {
    phase: f64,
}

impl DnaHelix {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }
}

impl crate::module::SimulationModule for DnaHelix {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, _seed: u64, _params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.phase = 0.0;
    }

    fn reset(&mut self, _params: &ParamSet) {
        self.phase = 0.0;
    }

    fn update(&mut self, dt: f64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.phase = wrap_phase(self.phase + params.get("rotation_speed") * dt);
    }

    fn frame(&self, out: &mut ModuleFrame) {
        let top = 40.0;
        let step = (WORLD_H - 2.0 * top) / (HELIX_BASE_PAIRS - 1) as f64;

        for i in 0..HELIX_BASE_PAIRS {
            let y = top + i as f64 * step;
            let twist = self.phase + i as f64 * TWIST_PER_PAIR;
            let x_left = WORLD_W / 2.0 + HELIX_AMPLITUDE * twist.sin();
            let x_right = WORLD_W / 2.0 + HELIX_AMPLITUDE * (twist + std::f64::consts::PI).sin();

            out.bodies.push(BodyView {
                position: Position::new(x_left, y),
                radius: 7.0,
                color: "#22c55e".to_string(),
                kind: BodyKind::StrandPoint,
                highlight: false,
            });
            out.bodies.push(BodyView {
                position: Position::new(x_right, y),
                radius: 7.0,
                color: "#a855f7".to_string(),
                kind: BodyKind::StrandPoint,
                highlight: false,
            });
            out.links.push(LinkView { a: 2 * i, b: 2 * i + 1 });
        }
    }
}
