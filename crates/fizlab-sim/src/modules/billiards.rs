//! Billiard-ball collision model.
//!
//! One moving "electron" ball is launched into a row of stationary
//! "atom" balls, visualizing how a signal propagates through collisions.
//!
//! The collision response is the teaching approximation, kept exactly as
//! taught: rotate both velocities into the collision frame given by the
//! angle between centers, exchange the normal components scaled by a
//! fixed restitution, rotate back, and separate the pair symmetrically
//! along the normal. All balls have equal mass. This is NOT an exact
//! rigid-body solver and must not be corrected into one.

use glam::DVec2;
use hecs::World;

use fizlab_core::constants::{
    ATOM_RADIUS, ATOM_SPACING, MOVER_LAUNCH_SPEED, MOVER_RADIUS, RESTITUTION, WORLD_H, WORLD_W,
};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, ModuleFrame, Readout};
use fizlab_core::types::{Position, Velocity};

use crate::module::SimulationModule;
use crate::modules::Shape;

/// Stationary atoms in the baseline row.
const ATOM_COUNT: usize = 10;

/// First atom's x position; the mover starts well to the left.
const ROW_START_X: f64 = 300.0;

pub static PARAMS: [ParamSpec; 1] = [ParamSpec {
    key: "ball_speed",
    label_key: "param.ball_speed",
    min: 0.2,
    max: 3.0,
    step: 0.1,
    default: 1.0,
}];

pub struct Billiards {
    world: World,
    /// Per-ball collision flags for this tick (spawn-index order).
    hit_flags: Vec<bool>,
}

/// Working copy of one ball during collision resolution.
struct BallSnap {
    entity: hecs::Entity,
    pos: DVec2,
    vel: DVec2,
    radius: f64,
}

impl Billiards {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            hit_flags: Vec::new(),
        }
    }

    /// Spawn the baseline layout: a row of stationary atoms and one
    /// mover launched at `ball_speed` times the nominal launch speed.
    fn rebuild(&mut self, params: &ParamSet) {
        self.world = World::new();
        let launch = MOVER_LAUNCH_SPEED * params.get("ball_speed");

        self.world.spawn((
            Position::new(60.0, WORLD_H / 2.0),
            Velocity::new(launch, 0.0),
            Shape {
                index: 0,
                radius: MOVER_RADIUS,
                color: "#f59e0b",
                kind: BodyKind::Ball,
            },
        ));
        for i in 0..ATOM_COUNT {
            self.world.spawn((
                Position::new(ROW_START_X + i as f64 * ATOM_SPACING, WORLD_H / 2.0),
                Velocity::new(0.0, 0.0),
                Shape {
                    index: i + 1,
                    radius: ATOM_RADIUS,
                    color: "#60a5fa",
                    kind: BodyKind::Ball,
                },
            ));
        }
        self.hit_flags = vec![false; ATOM_COUNT + 1];
    }

    /// Snapshot every ball in spawn-index order.
    fn collect(&self) -> Vec<BallSnap> {
        let mut balls: Vec<(usize, BallSnap)> = self
            .world
            .query::<(&Position, &Velocity, &Shape)>()
            .iter()
            .map(|(entity, (pos, vel, shape))| {
                (
                    shape.index,
                    BallSnap {
                        entity,
                        pos: (*pos).into(),
                        vel: (*vel).into(),
                        radius: shape.radius,
                    },
                )
            })
            .collect();
        balls.sort_by_key(|(index, _)| *index);
        balls.into_iter().map(|(_, b)| b).collect()
    }
}

/// Rotate a vector by `angle` radians.
fn rotate(v: DVec2, angle: f64) -> DVec2 {
    let (s, c) = angle.sin_cos();
    DVec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Bounce every ball off the walls, clamping it inside the surface.
/// Runs after integration and again after collision separation, which
/// can push a ball past a wall.
fn wall_pass(world: &mut World) {
    for (_entity, (pos, vel, shape)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Shape)>()
    {
        if pos.x - shape.radius < 0.0 {
            pos.x = shape.radius;
            vel.x = vel.x.abs();
        } else if pos.x + shape.radius > WORLD_W {
            pos.x = WORLD_W - shape.radius;
            vel.x = -vel.x.abs();
        }
        if pos.y - shape.radius < 0.0 {
            pos.y = shape.radius;
            vel.y = vel.y.abs();
        } else if pos.y + shape.radius > WORLD_H {
            pos.y = WORLD_H - shape.radius;
            vel.y = -vel.y.abs();
        }
    }
}

impl SimulationModule for Billiards {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, _seed: u64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.rebuild(params);
    }

    fn reset(&mut self, params: &ParamSet) {
        self.rebuild(params);
    }

    fn update(&mut self, dt: f64, _params: &ParamSet, events: &mut Vec<AudioEvent>) {
        for flag in &mut self.hit_flags {
            *flag = false;
        }

        // Integrate, then resolve walls before looking for contacts.
        for (_entity, (pos, vel)) in self.world.query_mut::<(&mut Position, &mut Velocity)>() {
            pos.x += vel.x * dt;
            pos.y += vel.y * dt;
        }
        wall_pass(&mut self.world);

        // Pairwise collision pass on a working copy; later pairs see the
        // results of earlier ones, matching the taught formulation.
        let mut balls = self.collect();
        for i in 0..balls.len() {
            for j in (i + 1)..balls.len() {
                let delta = balls[j].pos - balls[i].pos;
                let dist = delta.length();
                let min_dist = balls[i].radius + balls[j].radius;
                if dist >= min_dist || dist == 0.0 {
                    continue;
                }

                let relative_speed = (balls[i].vel - balls[j].vel).length();
                let theta = delta.y.atan2(delta.x);

                // Collision frame: x along the line of centers.
                let vi = rotate(balls[i].vel, -theta);
                let vj = rotate(balls[j].vel, -theta);

                // Exchange normal components, damped by restitution;
                // tangential components pass through untouched.
                let vi_after = DVec2::new(vj.x * RESTITUTION, vi.y);
                let vj_after = DVec2::new(vi.x * RESTITUTION, vj.y);
                balls[i].vel = rotate(vi_after, theta);
                balls[j].vel = rotate(vj_after, theta);

                // Symmetric separation along the normal removes the overlap.
                let normal = delta / dist;
                let half_overlap = (min_dist - dist) / 2.0;
                balls[i].pos -= normal * half_overlap;
                balls[j].pos += normal * half_overlap;

                self.hit_flags[i] = true;
                self.hit_flags[j] = true;
                events.push(AudioEvent::CollisionTick {
                    speed: relative_speed,
                });
            }
        }

        // Write the working copy back, then re-resolve the walls in case
        // separation pushed a ball outside.
        for ball in &balls {
            if let Ok((pos, vel)) = self
                .world
                .query_one_mut::<(&mut Position, &mut Velocity)>(ball.entity)
            {
                *pos = ball.pos.into();
                *vel = ball.vel.into();
            }
        }
        wall_pass(&mut self.world);
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
                        highlight: self.hit_flags.get(shape.index).copied().unwrap_or(false),
                    },
                )
            })
            .collect();
        bodies.sort_by_key(|(index, _)| *index);
        out.bodies.extend(bodies.into_iter().map(|(_, b)| b));

        let kinetic: f64 = self
            .world
            .query::<&Velocity>()
            .iter()
            .map(|(_, vel)| 0.5 * vel.speed() * vel.speed())
            .sum();
        out.readouts.push(Readout {
            label_key: "readout.kinetic_energy".into(),
            value: kinetic,
            unit: "j".into(),
        });
    }
}
