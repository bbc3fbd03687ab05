//! Scale explorer.
//!
//! A logarithmic zoom from protons to the observable universe. The
//! slider sets a target power of ten; the view glides toward it each
//! tick, and only objects within a few decades of the current zoom are
//! emitted.

use fizlab_core::constants::{VISIBLE_DECADES, WORLD_H, WORLD_W, ZOOM_GLIDE};
use fizlab_core::enums::BodyKind;
use fizlab_core::events::AudioEvent;
use fizlab_core::params::{ParamSet, ParamSpec};
use fizlab_core::state::{BodyView, ModuleFrame, Readout};
use fizlab_core::types::Position;

/// Catalog entry: message key, log10 of the object's size in metres, color.
struct CatalogEntry {
    label_key: &'static str,
    log_size: f64,
    color: &'static str,
}

/// Fixed object catalog, smallest first.
static CATALOG: [CatalogEntry; 13] = [
    CatalogEntry { label_key: "scale.proton", log_size: -15.0, color: "#ef4444" },
    CatalogEntry { label_key: "scale.atom", log_size: -10.0, color: "#38bdf8" },
    CatalogEntry { label_key: "scale.virus", log_size: -7.0, color: "#a855f7" },
    CatalogEntry { label_key: "scale.bacterium", log_size: -6.0, color: "#22c55e" },
    CatalogEntry { label_key: "scale.sand_grain", log_size: -3.3, color: "#eab308" },
    CatalogEntry { label_key: "scale.human", log_size: 0.25, color: "#f97316" },
    CatalogEntry { label_key: "scale.blue_whale", log_size: 1.5, color: "#3b82f6" },
    CatalogEntry { label_key: "scale.everest", log_size: 3.9, color: "#78716c" },
    CatalogEntry { label_key: "scale.earth", log_size: 7.1, color: "#16a34a" },
    CatalogEntry { label_key: "scale.sun", log_size: 9.1, color: "#fbbf24" },
    CatalogEntry { label_key: "scale.solar_system", log_size: 13.0, color: "#f59e0b" },
    CatalogEntry { label_key: "scale.galaxy", log_size: 21.0, color: "#c084fc" },
    CatalogEntry { label_key: "scale.universe", log_size: 26.4, color: "#64748b" },
];

pub static PARAMS: [ParamSpec; 1] = [ParamSpec {
    key: "zoom_exponent",
    label_key: "param.zoom_exponent",
    min: -15.0,
    max: 26.0,
    step: 0.5,
    default: 0.0,
}];

pub struct ScaleExplorer {
    /// Current zoom exponent; eases toward the slider target.
    zoom: f64,
}

impl ScaleExplorer {
    pub fn new() -> Self {
        Self { zoom: 0.0 }
    }
}

impl crate::module::SimulationModule for ScaleExplorer {
    fn param_specs(&self) -> &'static [ParamSpec] {
        &PARAMS
    }

    fn initialize(&mut self, _seed: u64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        self.zoom = params.get("zoom_exponent");
    }

    fn reset(&mut self, params: &ParamSet) {
        self.zoom = params.get("zoom_exponent");
    }

    fn update(&mut self, _dt: f64, params: &ParamSet, _events: &mut Vec<AudioEvent>) {
        let target = params.get("zoom_exponent");
        self.zoom += (target - self.zoom) * ZOOM_GLIDE;
    }

    fn frame(&self, out: &mut ModuleFrame) {
        let slot_w = WORLD_W / CATALOG.len() as f64;
        for (i, entry) in CATALOG.iter().enumerate() {
            let rel = entry.log_size - self.zoom;
            if rel.abs() > VISIBLE_DECADES {
                continue;
            }
            // One decade closer to the zoom level = ten times larger.
            let radius = (10f64.powf(rel) * 40.0).clamp(2.0, 240.0);
            out.bodies.push(BodyView {
                position: Position::new(slot_w / 2.0 + i as f64 * slot_w, WORLD_H / 2.0),
                radius,
                color: entry.color.to_string(),
                kind: BodyKind::ScaleObject,
                highlight: false,
            });
            out.readouts.push(Readout {
                label_key: entry.label_key.into(),
                value: entry.log_size,
                unit: "log10_m".into(),
            });
        }

        out.readouts.push(Readout {
            label_key: "readout.zoom".into(),
            value: self.zoom,
            unit: "log10_m".into(),
        });
    }
}
