//! Electron drift in a conductor.
//!
//! A fixed ion lattice plus electrons that jitter thermally while
//! drifting slowly in the field direction. The point of the lesson is
//! the contrast: jitter is fast and random, the net drift is barely
//! perceptible and proportional to the applied voltage.

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use fizlab_core::constants::{
    DRIFT_ELECTRON_COUNT, DRIFT_ION_COUNT, DRIFT_SPEED_PER_VOLT, THERMAL_JITTER_SPEED, WORLD_W,
};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, ModuleFrame, Readout};
use fizlab_core::types::{Position, Velocity};

use crate::module::SimulationModule;
use crate::modules::Shape;

/// Vertical extent of the rendered wire.
const WIRE_TOP: f64 = 190.0;
const WIRE_BOTTOM: f64 = 310.0;

pub static PARAMS: [ParamSpec; 1] = [ParamSpec {
    key: "voltage",
    label_key: "param.voltage",
    min: 0.0,
    max: 12.0,
    step: 0.5,
    default: 4.0,
}];

pub struct ElectronDrift {
    world: World,
    rng: ChaCha8Rng,
    seed: u64,
    /// Net drift speed from the last tick, for the readout.
    drift_speed: f64,
}

impl ElectronDrift {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(0),
            seed: 0,
            drift_speed: 0.0,
        }
    }

    /// Spawn the lattice and the electron cloud. Reseeds the RNG so a
    /// reset reproduces the run exactly.
    fn rebuild(&mut self) {
        self.world = World::new();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);

        let ion_step = WORLD_W / DRIFT_ION_COUNT as f64;
        for i in 0..DRIFT_ION_COUNT {
            self.world.spawn((
                Position::new(ion_step / 2.0 + i as f64 * ion_step, 250.0),
                Shape {
                    index: i,
                    radius: 10.0,
                    color: "#94a3b8",
                    kind: BodyKind::Ion,
                },
            ));
        }

        for i in 0..DRIFT_ELECTRON_COUNT {
            let x = self.rng.gen::<f64>() * WORLD_W;
            let y = WIRE_TOP + self.rng.gen::<f64>() * (WIRE_BOTTOM - WIRE_TOP);
            self.world.spawn((
                Position::new(x, y),
                Velocity::default(),
                Shape {
                    index: DRIFT_ION_COUNT + i,
                    radius: 4.0,
                    color: "#38bdf8",
                    kind: BodyKind::Electron,
                },
            ));
        }
    }
}

impl SimulationModule for ElectronDrift {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, seed: u64, _params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.seed = seed;
        self.rebuild();
    }

    fn reset(&mut self, _params: &ParamSet) {
        self.rebuild();
        self.drift_speed = 0.0;
    }

    fn update(&mut self, dt: f64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        let drift = params.get("voltage") * DRIFT_SPEED_PER_VOLT;
        self.drift_speed = drift;

        // Ions carry no Velocity component, so only electrons match here.
        for (_entity, (pos, vel, _shape)) in self
            .world
            .query_mut::<(&mut Position, &mut Velocity, &Shape)>()
        {
            // Fresh random heading each tick; the drift term is the only
            // component that survives averaging.
            let angle = self.rng.gen::<f64>() * std::f64::consts::TAU;
            vel.x = angle.cos() * THERMAL_JITTER_SPEED + drift;
            vel.y = angle.sin() * THERMAL_JITTER_SPEED;

            pos.x = (pos.x + vel.x * dt).rem_euclid(WORLD_W);
            pos.y = (pos.y + vel.y * dt).clamp(WIRE_TOP, WIRE_BOTTOM);
        }
    }

    fn frame(&self, out: &mut ModuleFrame) {
        let mut bodies: Vec<(usize, BodyView)> = self
            .world
            .query::<(&Position, &Shape)>()
            .iter()
            .map(|(_entity, (pos, shape))| {
                (
                    shape.index,
                    BodyView {
                        position: *pos,
                        radius: shape.radius,
                        color: shape.color.to_string(),
                        kind: shape.kind,
                        highlight: false,
                    },
                )
            })
            .collect();
        bodies.sort_by_key(|(index, _)| *index);
        out.bodies.extend(bodies.into_iter().map(|(_, b)| b));

        out.readouts.push(Readout {
            label_key: "readout.drift_speed".into(),
            value: self.drift_speed,
            unit: "mm_s".into(),
        });
    }
}
