//! Small-angle pendulum.
//!
//! Closed-form swing: angle = amplitude * sin(phase), with the phase
//! advancing at the small-angle natural frequency sqrt(g/L). No forces
//! are integrated; the lesson is the period-length relationship.

use fizlab_core::constants::{GRAVITY, PENDULUM_SCALE, WORLD_W};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, LinkView, ModuleFrame, Readout};
use fizlab_core::types::{wrap_phase, Position};

/// Pivot location on the render surface.
const PIVOT_X: f64 = WORLD_W / 2.0;
const PIVOT_Y: f64 = 60.0;

pub static PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        key: "length",
        label_key: "param.length",
        min: 0.5,
        max: 3.0,
        step: 0.1,
        default: 1.0,
    },
    ParamSpec {
        key: "amplitude",
        label_key: "param.amplitude",
        min: 5.0,
        max: 45.0,
        step: 1.0,
        default: 30.0,
    },
];

pub struct Pendulum {
    phase: f64,
    /// Length and amplitude as of the last tick, for the frozen render.
    length_m: f64,
    amplitude_deg: f64,
}

impl Pendulum {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            length_m: 1.0,
            amplitude_deg: 30.0,
        }
    }
}

impl crate::module::SimulationModule for Pendulum {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, _seed: u64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.phase = 0.0;
        self.length_m = params.get("length");
        self.amplitude_deg = params.get("amplitude");
    }

    fn reset(&mut self, params: &ParamSet) {
        self.phase = 0.0;
        self.length_m = params.get("length");
        self.amplitude_deg = params.get("amplitude");
    }

    fn update(&mut self, dt: f64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.length_m = params.get("length");
        self.amplitude_deg = params.get("amplitude");
        let rate = (GRAVITY / self.length_m).sqrt();
        self.phase = wrap_phase(self.phase + rate * dt);
    }

    fn frame(&self, out: &mut ModuleFrame) {
        let angle = self.amplitude_deg.to_radians() * self.phase.sin();
        let rod = self.length_m * PENDULUM_SCALE;
        let bob = Position::new(PIVOT_X + rod * angle.sin(), PIVOT_Y + rod * angle.cos());

        out.bodies.push(BodyView {
            position: Position::new(PIVOT_X, PIVOT_Y),
            radius: 5.0,
            color: "#64748b".to_string(),
            kind: BodyKind::Pivot,
            highlight: false,
        });
        out.bodies.push(BodyView {
            position: bob,
            radius: 16.0,
            color: "#f59e0b".to_string(),
            kind: BodyKind::Bob,
            highlight: false,
        });
        out.links.push(LinkView { a: 0, b: 1 });

        let period = std::f64::consts::TAU * (self.length_m / GRAVITY).sqrt();
        out.readouts.push(Readout {
            label_key: "readout.period".into(),
            value: period,
            unit: "s".into(),
        });
    }
}
