//! Tests for core vocabulary: phase wrapping, parameter clamping,
//! command/frame serialization, and the schema contract.

use std::f64::consts::TAU;

use crate::commands::ControlCommand;
use crate::enums::{Language, ModuleKind, Theme};
use crate::params::{ParamSet, ParamSpec};
use crate::schema::DailyFactRecord;
use crate::types::{wrap_phase, Position, SimTime, Velocity};

static TEST_SPECS: [ParamSpec; 2] = [
    ParamSpec {
        key: "voltage",
        label_key: "param.voltage",
        min: 0.0,
        max: 12.0,
        step: 0.5,
        default: 4.0,
    },
    ParamSpec {
        key: "frequency",
        label_key: "param.frequency",
        min: 0.5,
        max: 10.0,
        step: 0.1,
        default: 2.0,
    },
];

// ---- Phase wrapping ----

#[test]
fn test_wrap_phase_stays_in_range() {
    let mut phase = 0.0;
    for _ in 0..100_000 {
        phase = wrap_phase(phase + 0.37);
        assert!((0.0..TAU).contains(&phase), "phase out of range: {phase}");
    }
}

#[test]
fn test_wrap_phase_negative_input() {
    let wrapped = wrap_phase(-0.5);
    assert!((0.0..TAU).contains(&wrapped));
    assert!((wrapped - (TAU - 0.5)).abs() < 1e-12);
}

#[test]
fn test_wrap_phase_matches_modular_arithmetic() {
    let phase = 1.25;
    let rate = 3.0;
    let speed = 1.7;
    let next = wrap_phase(phase + rate * speed);
    assert!((next - (phase + rate * speed).rem_euclid(TAU)).abs() < 1e-12);
}

// ---- Parameters ----

#[test]
fn test_param_defaults() {
    let params = ParamSet::new(&TEST_SPECS);
    assert_eq!(params.get("voltage"), 4.0);
    assert_eq!(params.get("frequency"), 2.0);
}

#[test]
fn test_param_clamp_on_write() {
    let mut params = ParamSet::new(&TEST_SPECS);
    params.set("voltage", 99.0);
    assert_eq!(params.get("voltage"), 12.0);
    params.set("voltage", -3.0);
    assert_eq!(params.get("voltage"), 0.0);
    params.set("voltage", 7.5);
    assert_eq!(params.get("voltage"), 7.5);
}

#[test]
fn test_param_unknown_key_ignored() {
    let mut params = ParamSet::new(&TEST_SPECS);
    params.set("nonsense", 1.0);
    assert_eq!(params.get("nonsense"), 0.0);
}

// ---- Types ----

#[test]
fn test_position_helpers() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    assert!((a.angle_to(&Position::new(1.0, 0.0))).abs() < 1e-12);
}

#[test]
fn test_velocity_speed() {
    let v = Velocity::new(3.0, 4.0);
    assert!((v.speed() - 5.0).abs() < 1e-12);
}

#[test]
fn test_sim_time_advance() {
    let mut t = SimTime::default();
    t.advance(0.5);
    t.advance(0.25);
    assert_eq!(t.tick, 2);
    assert!((t.elapsed_secs - 0.75).abs() < 1e-12);
}

// ---- Serialization ----

#[test]
fn test_command_tagged_serialization() {
    let cmd = ControlCommand::SetParam {
        instance: 1,
        key: "voltage".into(),
        value: 6.0,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"type\":\"SetParam\""));
    let back: ControlCommand = serde_json::from_str(&json).unwrap();
    assert!(matches!(back, ControlCommand::SetParam { instance: 1, .. }));
}

#[test]
fn test_activate_round_trip() {
    let cmd = ControlCommand::Activate {
        instance: 0,
        module: ModuleKind::Billiards,
        seed: 42,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    let back: ControlCommand = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        back,
        ControlCommand::Activate {
            module: ModuleKind::Billiards,
            seed: 42,
            ..
        }
    ));
}

// ---- Preferences enums ----

#[test]
fn test_language_codes() {
    assert_eq!(Language::Pl.code(), "pl");
    assert_eq!(Language::from_code("hu"), Language::Hu);
    // Unknown codes fall back to the default language.
    assert_eq!(Language::from_code("de"), Language::Pl);
}

#[test]
fn test_theme_codes() {
    assert_eq!(Theme::Dark.code(), "dark");
    assert_eq!(Theme::from_code("dark"), Theme::Dark);
    assert_eq!(Theme::from_code("banana"), Theme::Light);
}

// ---- Schema contract ----

#[test]
fn test_daily_fact_record_shape() {
    let fact = DailyFactRecord {
        language: Language::Pl,
        title: "Prędkość dryfu".into(),
        content: "Elektrony dryfują wolniej niż ślimak.".into(),
        category: "electricity".into(),
        active: true,
    };
    let json = serde_json::to_string(&fact).unwrap();
    assert!(json.contains("\"language\":\"pl\""));
    let back: DailyFactRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fact);
}
