//! Alternating current.
//!
//! Electrons oscillate sinusoidally about fixed home positions — charge
//! sloshes back and forth, it does not travel down the wire. The module
//! owns a sustained hum tone whose pitch follows the frequency slider;
//! the tone is released on deactivation.

use fizlab_core::constants::{AC_ELECTRON_COUNT, AC_HUM_BASE_HZ, WORLD_H, WORLD_W};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, ModuleFrame, Readout};
use fizlab_core::types::{wrap_phase, Position};

pub static PARAMS: [ParamSpec; 2] = [
    ParamSpec {
        key: "frequency",
        label_key: "param.frequency",
        min: 0.5,
        max: 10.0,
        step: 0.1,
        default: 2.0,
    },
    ParamSpec {
        key: "amplitude",
        label_key: "param.amplitude",
        min: 5.0,
        max: 60.0,
        step: 1.0,
        default: 30.0,
    },
];

pub struct AlternatingCurrent {
    homes: Vec<Position>,
    phase: f64,
    /// Amplitude as of the last tick, for rendering the frozen state.
    amplitude: f64,
    /// Frequency of the currently sounding hum, if any.
    tone_hz: Option<f64>,
}

impl AlternatingCurrent {
    pub fn new() -> Self {
        Self {
            homes: Vec::new(),
            phase: 0.0,
            amplitude: 0.0,
            tone_hz: None,
        }
    }

    fn hum_for(frequency: f64) -> f64 {
        AC_HUM_BASE_HZ * frequency
    }
}

impl crate::module::SimulationModule for AlternatingCurrent {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, _seed: u64, params: &ParamSet, events: &mut Vec<AudioEvent>) {
        let step = WORLD_W / AC_ELECTRON_COUNT as f64;
        self.homes = (0..AC_ELECTRON_COUNT)
            .map(|i| Position::new(step / 2.0 + i as f64 * step, WORLD_H / 2.0))
            .collect();
        self.phase = 0.0;
        self.amplitude = params.get("amplitude");

        let hum = Self::hum_for(params.get("frequency"));
        self.tone_hz = Some(hum);
        events.push(AudioEvent::ToneStart { frequency_hz: hum });
    }

    fn reset(&mut self, _params: &ParamSet) {
        // The hum keeps sounding at its current pitch; only motion resets.
        self.phase = 0.0;
    }

    fn update(&mut self, dt: f64, params: &ParamSet, events: &mut Vec<AudioEvent>) {
        let frequency = params.get("frequency");
        self.phase = wrap_phase(self.phase + std::f64::consts::TAU * frequency * dt);
        self.amplitude = params.get("amplitude");

        // Retune the hum when the slider moved since the last tick.
        let hum = Self::hum_for(frequency);
        if self.tone_hz != Some(hum) {
            self.tone_hz = Some(hum);
            events.push(AudioEvent::ToneStart { frequency_hz: hum });
        }
    }

    fn frame(&self, out: &mut ModuleFrame) {
        let displacement = self.amplitude * self.phase.sin();
        for home in &self.homes {
            out.bodies.push(BodyView {
                position: Position::new(home.x + displacement, home.y),
                radius: 5.0,
                color: "#38bdf8".to_string(),
                kind: BodyKind::Electron,
                highlight: false,
            });
        }
        out.readouts.push(Readout {
            label_key: "readout.current".into(),
            value: self.phase.cos(),
            unit: "relative".into(),
        });
    }

    fn deactivate(&mut self, events: &mut Vec<AudioEvent>) {
        if self.tone_hz.take().is_some() {
            events.push(AudioEvent::ToneStop);
        }
    }
}
