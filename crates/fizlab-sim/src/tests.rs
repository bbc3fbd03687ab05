//! Tests for the engine contract (pause/resume/reset, parameter flow,
//! tone release) and the billiard collision properties.

use fizlab_core::commands::ControlCommand;
use fizlab_core::constants::{DRIFT_SPEED_PER_VOLT, WORLD_H, WORLD_W};
use fizlab_core::enums::ModuleKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::state::ModuleFrame;

use crate::engine::SimEngine;
use crate::sink::{CollectingSink, RenderSink};

fn activate(engine: &mut SimEngine, instance: u32, module: ModuleKind, seed: u64) {
    engine.queue_command(ControlCommand::Activate {
        instance,
        module,
        seed,
    });
}

fn frames_json(frames: &[ModuleFrame]) -> String {
    serde_json::to_string(frames).unwrap()
}

// ---- Engine lifecycle ----

#[test]
fn test_activate_starts_running() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Pendulum, 1);
    let frames = engine.tick();
    assert_eq!(frames.len(), 1);
    assert!(frames[0].running);
    assert_eq!(frames[0].time.tick, 1);
}

#[test]
fn test_instance_cap() {
    let mut engine = SimEngine::new();
    for i in 0..6 {
        activate(&mut engine, i, ModuleKind::Pendulum, 1);
    }
    let frames = engine.tick();
    assert_eq!(frames.len(), 4, "a page embeds at most 4 instances");
}

#[test]
fn test_deactivate_removes_instance() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Pendulum, 1);
    activate(&mut engine, 1, ModuleKind::DnaHelix, 1);
    engine.tick();
    engine.queue_command(ControlCommand::Deactivate { instance: 0 });
    let frames = engine.tick();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].instance, 1);
}

#[test]
fn test_pause_freezes_state_and_time() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Pendulum, 1);
    for _ in 0..10 {
        engine.tick();
    }
    engine.queue_command(ControlCommand::Pause { instance: 0 });
    let frozen = engine.tick();
    let still_frozen = engine.tick();
    assert!(!frozen[0].running);
    assert_eq!(frames_json(&frozen), frames_json(&still_frozen));
    assert_eq!(frozen[0].time.tick, 10);
}

#[test]
fn test_pause_resume_no_discontinuity() {
    // Resuming must produce the same next state as if pause had never
    // occurred, for both a scalar-phase module and a body-list module.
    for module in [ModuleKind::Pendulum, ModuleKind::Billiards] {
        let mut straight = SimEngine::new();
        activate(&mut straight, 0, module, 7);
        for _ in 0..50 {
            straight.tick();
        }

        let mut interrupted = SimEngine::new();
        activate(&mut interrupted, 0, module, 7);
        for _ in 0..20 {
            interrupted.tick();
        }
        interrupted.queue_command(ControlCommand::Pause { instance: 0 });
        for _ in 0..13 {
            interrupted.tick();
        }
        interrupted.queue_command(ControlCommand::Resume { instance: 0 });
        let mut last = Vec::new();
        for _ in 0..30 {
            last = interrupted.tick();
        }

        let expected = straight.current_frames();
        assert_eq!(
            frames_json(&expected),
            frames_json(&last),
            "pause/resume drifted for {module:?}"
        );
    }
}

#[test]
fn test_reset_restores_baseline_and_pauses() {
    // Baseline reference: activate and pause before the first update.
    let mut reference = SimEngine::new();
    activate(&mut reference, 0, ModuleKind::Billiards, 3);
    reference.queue_command(ControlCommand::Pause { instance: 0 });
    let baseline = reference.tick();

    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Billiards, 3);
    for _ in 0..100 {
        engine.tick();
    }
    engine.queue_command(ControlCommand::Reset { instance: 0 });
    let after_reset = engine.tick();

    assert!(!after_reset[0].running, "reset leaves the instance paused");
    assert_eq!(frames_json(&baseline), frames_json(&after_reset));
    assert!(!engine.is_running(0));
}

#[test]
fn test_param_change_applies_next_tick() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::ElectronDrift, 1);
    engine.tick();

    engine.queue_command(ControlCommand::SetParam {
        instance: 0,
        key: "voltage".into(),
        value: 9.0,
    });
    let frames = engine.tick();
    let drift = frames[0]
        .readouts
        .iter()
        .find(|r| r.label_key == "readout.drift_speed")
        .map(|r| r.value)
        .unwrap();
    assert!((drift - 9.0 * DRIFT_SPEED_PER_VOLT).abs() < 1e-12);
}

#[test]
fn test_param_clamped_at_write_boundary() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::ElectronDrift, 1);
    engine.tick();

    // Slider max for voltage is 12; an out-of-range write clamps there.
    engine.queue_command(ControlCommand::SetParam {
        instance: 0,
        key: "voltage".into(),
        value: 500.0,
    });
    let frames = engine.tick();
    let drift = frames[0]
        .readouts
        .iter()
        .find(|r| r.label_key == "readout.drift_speed")
        .map(|r| r.value)
        .unwrap();
    assert!((drift - 12.0 * DRIFT_SPEED_PER_VOLT).abs() < 1e-12);
}

#[test]
fn test_speed_scales_elapsed_time() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::DnaHelix, 1);
    engine.queue_command(ControlCommand::SetSpeed {
        instance: 0,
        speed: 2.0,
    });
    let mut frames = Vec::new();
    for _ in 0..60 {
        frames = engine.tick();
    }
    // 60 ticks at 2x = 2 simulated seconds.
    assert!((frames[0].time.elapsed_secs - 2.0).abs() < 1e-9);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimEngine::new();
    let mut engine_b = SimEngine::new();
    activate(&mut engine_a, 0, ModuleKind::ElectronDrift, 12345);
    activate(&mut engine_b, 0, ModuleKind::ElectronDrift, 12345);

    for _ in 0..300 {
        let a = engine_a.tick();
        let b = engine_b.tick();
        assert_eq!(frames_json(&a), frames_json(&b), "frames diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimEngine::new();
    let mut engine_b = SimEngine::new();
    activate(&mut engine_a, 0, ModuleKind::ElectronDrift, 111);
    activate(&mut engine_b, 0, ModuleKind::ElectronDrift, 222);

    let mut diverged = false;
    for _ in 0..50 {
        let a = engine_a.tick();
        let b = engine_b.tick();
        if frames_json(&a) != frames_json(&b) {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should produce divergent runs");
}

// ---- Tone lifecycle ----

#[test]
fn test_ac_tone_started_and_released() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::AlternatingCurrent, 1);
    engine.tick();
    let events = engine.drain_audio();
    assert!(events
        .iter()
        .any(|e| matches!(e, AudioEvent::ToneStart { .. })));

    engine.queue_command(ControlCommand::Deactivate { instance: 0 });
    engine.tick();
    let events = engine.drain_audio();
    assert!(
        events.iter().any(|e| matches!(e, AudioEvent::ToneStop)),
        "deactivation must release the tone"
    );
}

#[test]
fn test_deactivate_all_releases_tones() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::AlternatingCurrent, 1);
    engine.tick();
    engine.drain_audio();

    engine.deactivate_all();
    let events = engine.drain_audio();
    assert!(events.iter().any(|e| matches!(e, AudioEvent::ToneStop)));
    assert_eq!(engine.instance_count(), 0);
}

#[test]
fn test_ac_retune_on_frequency_change() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::AlternatingCurrent, 1);
    engine.tick();
    engine.drain_audio();

    engine.queue_command(ControlCommand::SetParam {
        instance: 0,
        key: "frequency".into(),
        value: 5.0,
    });
    engine.tick();
    let events = engine.drain_audio();
    assert!(events
        .iter()
        .any(|e| matches!(e, AudioEvent::ToneStart { .. })));
}

// ---- Billiards properties ----

/// Kinetic energy from a billiards frame readout.
fn kinetic(frames: &[ModuleFrame]) -> f64 {
    frames[0]
        .readouts
        .iter()
        .find(|r| r.label_key == "readout.kinetic_energy")
        .map(|r| r.value)
        .unwrap()
}

#[test]
fn test_billiards_energy_never_increases() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Billiards, 1);
    let mut previous = f64::INFINITY;
    for _ in 0..1200 {
        let frames = engine.tick();
        let ke = kinetic(&frames);
        assert!(
            ke <= previous + 1e-9,
            "kinetic energy increased: {previous} -> {ke}"
        );
        previous = ke;
    }
}

#[test]
fn test_billiards_bodies_stay_in_bounds() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Billiards, 1);
    engine.queue_command(ControlCommand::SetParam {
        instance: 0,
        key: "ball_speed".into(),
        value: 3.0,
    });
    engine.queue_command(ControlCommand::Reset { instance: 0 });
    engine.queue_command(ControlCommand::Resume { instance: 0 });

    for _ in 0..5000 {
        let frames = engine.tick();
        for body in &frames[0].bodies {
            assert!(body.position.x >= body.radius - 1e-9);
            assert!(body.position.x <= WORLD_W - body.radius + 1e-9);
            assert!(body.position.y >= body.radius - 1e-9);
            assert!(body.position.y <= WORLD_H - body.radius + 1e-9);
        }
    }
}

#[test]
fn test_billiards_first_collision_separates_pair() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Billiards, 1);

    for _ in 0..2000 {
        let frames = engine.tick();
        let events = engine.drain_audio();
        let collided = events
            .iter()
            .any(|e| matches!(e, AudioEvent::CollisionTick { .. }));
        if !collided {
            continue;
        }
        let hit: Vec<_> = frames[0].bodies.iter().filter(|b| b.highlight).collect();
        assert_eq!(hit.len(), 2, "first collision involves exactly two bodies");
        let dist = hit[0].position.distance_to(&hit[1].position);
        assert!(
            dist >= hit[0].radius + hit[1].radius - 1e-6,
            "pair still overlapping after position correction: {dist}"
        );
        return;
    }
    panic!("no collision within 2000 ticks");
}

#[test]
fn test_billiards_motion_propagates_transitively() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Billiards, 1);

    // Baseline positions: pause immediately, before the first update.
    let mut reference = SimEngine::new();
    activate(&mut reference, 0, ModuleKind::Billiards, 1);
    reference.queue_command(ControlCommand::Pause { instance: 0 });
    let baseline = reference.tick();
    let initial: Vec<_> = baseline[0].bodies.iter().map(|b| b.position).collect();
    let atom_count = initial.len() - 1;

    let mut first_moved: Vec<Option<u64>> = vec![None; atom_count];
    let mut first_collision_tick: Option<u64> = None;

    for tick in 1..=3000u64 {
        let frames = engine.tick();
        let events = engine.drain_audio();
        if first_collision_tick.is_none()
            && events
                .iter()
                .any(|e| matches!(e, AudioEvent::CollisionTick { .. }))
        {
            first_collision_tick = Some(tick);
        }

        // Body 0 is the mover; atoms follow in row order.
        for atom in 0..atom_count {
            let pos = frames[0].bodies[atom + 1].position;
            if first_moved[atom].is_none() && pos.distance_to(&initial[atom + 1]) > 1e-9 {
                first_moved[atom] = Some(tick);
            }
        }
    }

    let collision_tick = first_collision_tick.expect("mover never reached the row");

    // No atom moves before the first collision, and the wave front is
    // monotone: an atom only starts moving after its upstream neighbor.
    let mut previous = collision_tick;
    for (atom, moved) in first_moved.iter().enumerate() {
        match moved {
            Some(tick) => {
                assert!(
                    *tick >= previous,
                    "atom {atom} moved at {tick}, before upstream neighbor ({previous})"
                );
                previous = *tick;
            }
            // The wave may not reach the far end of the row; once one
            // atom never moved, none further down may have moved either.
            None => {
                assert!(
                    first_moved[atom..].iter().all(|m| m.is_none()),
                    "atom beyond an unmoved atom moved"
                );
                break;
            }
        }
    }
    assert!(
        first_moved[0].is_some(),
        "first atom should be struck within 3000 ticks"
    );
}

#[test]
fn test_mover_velocity_constant_until_first_overlap() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Billiards, 1);

    let mut previous_x: Option<f64> = None;
    for _ in 0..2000 {
        let frames = engine.tick();
        let events = engine.drain_audio();
        let x = frames[0].bodies[0].position.x;
        if events
            .iter()
            .any(|e| matches!(e, AudioEvent::CollisionTick { .. }))
        {
            return; // contact made; free flight assertion ends here
        }
        if let Some(prev) = previous_x {
            // 120 units/s at 60Hz = 2 units per tick of free flight.
            assert!(((x - prev) - 2.0).abs() < 1e-9, "velocity changed early");
        }
        previous_x = Some(x);
    }
    panic!("no collision within 2000 ticks");
}

// ---- Render sink ----

#[test]
fn test_collecting_sink_keeps_latest_batch() {
    let mut engine = SimEngine::new();
    let mut sink = CollectingSink::default();
    activate(&mut engine, 0, ModuleKind::PlanetaryMotion, 1);
    for _ in 0..3 {
        let frames = engine.tick();
        sink.present(&frames);
    }
    assert_eq!(sink.presented, 3);
    assert_eq!(sink.last.len(), 1);
    assert_eq!(sink.last[0].module, ModuleKind::PlanetaryMotion);
}

// ---- Module frame shapes ----

#[test]
fn test_pendulum_frame_has_rod_link() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::Pendulum, 1);
    let frames = engine.tick();
    assert_eq!(frames[0].bodies.len(), 2);
    assert_eq!(frames[0].links.len(), 1);
}

#[test]
fn test_helix_links_pair_strand_points() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::DnaHelix, 1);
    let frames = engine.tick();
    assert_eq!(frames[0].bodies.len() % 2, 0);
    assert_eq!(frames[0].links.len(), frames[0].bodies.len() / 2);
    for link in &frames[0].links {
        assert!(link.a < frames[0].bodies.len());
        assert!(link.b < frames[0].bodies.len());
    }
}

#[test]
fn test_scale_explorer_filters_by_decade() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::ScaleExplorer, 1);
    // At the human scale neither protons nor galaxies are visible.
    let frames = engine.tick();
    assert!(!frames[0].bodies.is_empty());
    assert!(frames[0].bodies.len() < 13);
}

#[test]
fn test_atomic_structure_shell_occupancy() {
    let mut engine = SimEngine::new();
    activate(&mut engine, 0, ModuleKind::AtomicStructure, 1);
    engine.queue_command(ControlCommand::SetParam {
        instance: 0,
        key: "electron_count".into(),
        value: 11.0, // sodium: 2 + 8 + 1
    });
    let frames = engine.tick();
    let electrons = frames[0]
        .bodies
        .iter()
        .filter(|b| matches!(b.kind, fizlab_core::enums::BodyKind::Electron))
        .count();
    assert_eq!(electrons, 11);
}
