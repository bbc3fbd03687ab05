//! Planetary motion.
//!
//! Four planets on circular orbits around a central sun. Orbital rates
//! fall off with radius^(3/2) as a nod to Kepler's third law; the orbits
//! themselves are fixed circles, not solved gravity.

use fizlab_core::constants::{ORBIT_BASE_RATE, ORBIT_RADII, WORLD_H, WORLD_W};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, LinkView, ModuleFrame, Readout};
use fizlab_core::types::{wrap_phase, Position};

const CENTER_X: f64 = WORLD_W / 2.0;
const CENTER_Y: f64 = WORLD_H / 2.0;

const PLANET_COLORS: [&str; 4] = ["#a8a29e", "#f59e0b", "#3b82f6", "#ef4444"];
const PLANET_RADII: [f64; 4] = [5.0, 9.0, 10.0, 7.0];

pub static PARAMS: [ParamSpec; 1] = [ParamSpec {
    key: "orbit_speed",
    label_key: "param.orbit_speed",
    min: 0.0,
    max: 5.0,
    step: 0.1,
    default: 1.0,
}];

pub struct PlanetaryMotion {
    angles: [f64; 4],
}

impl PlanetaryMotion {
    pub fn new() -> Self {
        Self { angles: [0.0; 4] }
    }

    /// Angular rate of orbit `i` (rad/s at orbit_speed 1).
    fn rate(i: usize) -> f64 {
        ORBIT_BASE_RATE * (ORBIT_RADII[0] / ORBIT_RADII[i]).powf(1.5)
    }
}

impl crate::module::SimulationModule for PlanetaryMotion {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, _seed: u64, _params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.angles = [0.0; 4];
    }

    fn reset(&mut self, _params: &ParamSet) {
        self.angles = [0.0; 4];
    }

    fn update(&mut self, dt: f64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        let speed = params.get("orbit_speed");
        for (i, angle) in self.angles.iter_mut().enumerate() {
            *angle = wrap_phase(*angle + Self::rate(i) * speed * dt);
        }
    }

    fn frame(&self, out: &mut ModuleFrame) {
        out.bodies.push(BodyView {
            position: Position::new(CENTER_X, CENTER_Y),
            radius: 22.0,
            color: "#fbbf24".to_string(),
            kind: BodyKind::Sun,
            highlight: false,
        });

        for (i, angle) in self.angles.iter().enumerate() {
            out.bodies.push(BodyView {
                position: Position::new(
                    CENTER_X + ORBIT_RADII[i] * angle.cos(),
                    CENTER_Y + ORBIT_RADII[i] * angle.sin(),
                ),
                radius: PLANET_RADII[i],
                color: PLANET_COLORS[i].to_string(),
                kind: BodyKind::Planet,
                highlight: false,
            });
            // Orbit guide from sun to planet.
            out.links.push(LinkView { a: 0, b: i + 1 });
        }

        out.readouts.push(Readout {
            label_key: "readout.inner_period".into(),
            value: std::f64::consts::TAU / Self::rate(0),
            unit: "s".into(),
        });
    }
}
