//! Parameter descriptors and clamp-on-write storage.
//!
//! Every user-adjustable scalar is declared as a `ParamSpec` with a
//! [min, max] range and step. Clamping happens exactly once, at the
//! `ParamSet::set` write boundary (the slider contract); update
//! functions read values and never re-validate them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declaration of one user-adjustable scalar input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Stable identifier, e.g. `"voltage"`.
    pub key: &'static str,
    /// Message key for the slider label.
    pub label_key: &'static str,
    pub min: f64,
    pub max: f64,
    /// Slider step granularity.
    pub step: f64,
    pub default: f64,
}

/// Current values for one module instance's declared parameters.
#[derive(Debug, Clone)]
pub struct ParamSet {
    specs: &'static [ParamSpec],
    values: HashMap<&'static str, f64>,
}

impl ParamSet {
    /// Build a set holding every spec's default value.
    pub fn new(specs: &'static [ParamSpec]) -> Self {
        let values = specs.iter().map(|s| (s.key, s.default)).collect();
        Self { specs, values }
    }

    /// Write a value, clamped to the spec's declared range.
    /// Writes to undeclared keys are ignored.
    pub fn set(&mut self, key: &str, value: f64) {
        if let Some(spec) = self.specs.iter().find(|s| s.key == key) {
            self.values.insert(spec.key, value.clamp(spec.min, spec.max));
        }
    }

    /// Read a value. Undeclared keys read as 0.0; modules only query
    /// keys they declared.
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// The declared specs (for surfacing slider ranges to the frontend).
    pub fn specs(&self) -> &'static [ParamSpec] {
        self.specs
    }
}
