//! Enumeration types used throughout the application.

use serde::{Deserialize, Serialize};

/// The eight simulation modules a lesson page can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    /// Electrons drifting through an ion lattice under an applied voltage.
    ElectronDrift,
    /// Electrons oscillating about home positions (AC current).
    AlternatingCurrent,
    /// Billiard-ball collision model (teaching approximation).
    Billiards,
    /// Planets on circular orbits around a sun.
    PlanetaryMotion,
    /// Small-angle pendulum (closed-form swing).
    Pendulum,
    /// Logarithmic zoom from subatomic to cosmic scales.
    ScaleExplorer,
    /// Nucleus plus electrons on occupancy shells.
    AtomicStructure,
    /// Rotating double helix with base-pair rungs.
    DnaHelix,
}

/// What a rendered body represents. Fixed at spawn, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Electron,
    Ion,
    Ball,
    Planet,
    Sun,
    Bob,
    Pivot,
    Nucleon,
    StrandPoint,
    ScaleObject,
}

/// UI color theme, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Supported interface languages. Polish is the site's origin language
/// and the fallback for missing message keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
    Hu,
}

impl Language {
    /// All supported languages, default first.
    pub const ALL: [Language; 3] = [Language::Pl, Language::En, Language::Hu];

    /// Two-letter language code as persisted and used in URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
            Language::Hu => "hu",
        }
    }

    /// Parse a persisted language code. Unknown codes map to the default.
    pub fn from_code(code: &str) -> Language {
        match code {
            "en" => Language::En,
            "hu" => Language::Hu,
            _ => Language::Pl,
        }
    }
}

impl Theme {
    /// Persisted string form (`light` | `dark`).
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted theme string. Unknown values map to the default.
    pub fn from_code(code: &str) -> Theme {
        match code {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
