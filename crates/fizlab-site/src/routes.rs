//! Localized routing.
//!
//! Every page has one canonical path per language, stored in the
//! message tables under `route.*`. Resolution tries the visitor's
//! preferred language first so paths shared across languages (such as
//! `/quiz`) keep their current language.

use fizlab_core::enums::Language;
use serde::{Deserialize, Serialize};

use crate::i18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Electricity,
    EarthSpace,
    Microworld,
    Perception,
    Quiz,
    Facts,
    Scale,
    NotFound,
}

impl Route {
    /// Every addressable page, in navigation order.
    pub const PAGES: [Route; 8] = [
        Route::Home,
        Route::Electricity,
        Route::EarthSpace,
        Route::Microworld,
        Route::Perception,
        Route::Quiz,
        Route::Facts,
        Route::Scale,
    ];

    fn path_key(self) -> Option<&'static str> {
        match self {
            Route::Home => Some("route.home"),
            Route::Electricity => Some("route.electricity"),
            Route::EarthSpace => Some("route.earth_space"),
            Route::Microworld => Some("route.microworld"),
            Route::Perception => Some("route.perception"),
            Route::Quiz => Some("route.quiz"),
            Route::Facts => Some("route.facts"),
            Route::Scale => Some("route.scale"),
            Route::NotFound => None,
        }
    }
}

/// The outcome of resolving a raw path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub route: Route,
    pub language: Language,
    /// Whatever followed the page's base path, leading slash included.
    pub suffix: String,
}

/// The canonical path of a page in one language.
pub fn localized_path(route: Route, lang: Language) -> &'static str {
    match route.path_key() {
        Some(key) => i18n::translate(lang, key),
        None => "/",
    }
}

fn match_in_language(path: &str, lang: Language) -> Option<(Route, String)> {
    for route in Route::PAGES {
        let base = localized_path(route, lang);
        if base == "/" {
            // The home path would prefix-match everything.
            if path == "/" {
                return Some((route, String::new()));
            }
            continue;
        }
        if path == base {
            return Some((route, String::new()));
        }
        if let Some(rest) = path.strip_prefix(base) {
            if rest.starts_with('/') {
                return Some((route, rest.to_string()));
            }
        }
    }
    None
}

/// Resolve a path against all languages, preferred language first.
///
/// Unknown paths map to `NotFound` in the preferred language with an
/// empty suffix.
pub fn resolve(path: &str, preferred: Language) -> RouteMatch {
    let path = normalize(path);
    if let Some((route, suffix)) = match_in_language(path, preferred) {
        return RouteMatch { route, language: preferred, suffix };
    }
    for &lang in &Language::ALL {
        if lang == preferred {
            continue;
        }
        if let Some((route, suffix)) = match_in_language(path, lang) {
            return RouteMatch { route, language: lang, suffix };
        }
    }
    RouteMatch {
        route: Route::NotFound,
        language: preferred,
        suffix: String::new(),
    }
}

/// Rewrite a path into another language, keeping the sub-path suffix.
///
/// Unresolvable paths land on the target language's home page.
pub fn switch_language(path: &str, preferred: Language, to: Language) -> String {
    let matched = resolve(path, preferred);
    match matched.route {
        Route::NotFound => localized_path(Route::Home, to).to_string(),
        route => format!("{}{}", localized_path(route, to), matched.suffix),
    }
}

/// Strip a trailing slash; the root path stays as-is.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
