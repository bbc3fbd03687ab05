//! Per-page head metadata: title, description, canonical URL, social
//! card tags and a JSON-LD structured-data block. Values come from the
//! message tables with sitewide fallbacks for anything untranslated.

use fizlab_core::enums::Language;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::i18n;
use crate::routes::{localized_path, Route};

pub const SITE_NAME: &str = "FizLab";
pub const BASE_URL: &str = "https://fizlab.edu.pl";

/// Sitewide social card image; pages do not override it.
pub const SOCIAL_IMAGE: &str = "https://fizlab.edu.pl/og-card.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaType {
    WebSite,
    Organization,
    Article,
}

/// What a page supplies to the head builder.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub route: Route,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub schema_type: SchemaType,
}

/// Default metadata for each page.
pub fn page_meta(route: Route) -> PageMeta {
    let (title_key, description_key, schema_type) = match route {
        Route::Home => ("seo.home.title", "seo.home.description", SchemaType::WebSite),
        Route::Electricity => (
            "seo.electricity.title",
            "seo.electricity.description",
            SchemaType::Article,
        ),
        Route::EarthSpace => (
            "seo.earth_space.title",
            "seo.earth_space.description",
            SchemaType::Article,
        ),
        Route::Microworld => (
            "seo.microworld.title",
            "seo.microworld.description",
            SchemaType::Article,
        ),
        Route::Perception => (
            "seo.perception.title",
            "seo.perception.description",
            SchemaType::Article,
        ),
        Route::Quiz => ("seo.quiz.title", "seo.quiz.description", SchemaType::WebSite),
        Route::Facts => (
            "seo.facts.title",
            "seo.facts.description",
            SchemaType::Organization,
        ),
        Route::Scale => ("seo.scale.title", "seo.scale.description", SchemaType::Article),
        Route::NotFound => (
            "seo.notfound.title",
            "seo.notfound.description",
            SchemaType::WebSite,
        ),
    };
    PageMeta {
        route,
        title_key,
        description_key,
        schema_type,
    }
}

/// Fully rendered head metadata for one page in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTags {
    pub title: String,
    pub description: String,
    pub canonical: String,
    /// `hreflang` alternates, one per supported language.
    pub alternates: Vec<(String, String)>,
    /// Open Graph properties, in emission order.
    pub open_graph: Vec<(String, String)>,
    /// Twitter card properties.
    pub twitter: Vec<(String, String)>,
    pub json_ld: Value,
}

/// Build the head block for a page.
pub fn head_tags(meta: &PageMeta, lang: Language) -> HeadTags {
    let title = resolve_or(lang, meta.title_key, "site.name");
    let description = resolve_or(lang, meta.description_key, "seo.default_description");
    let canonical = format!("{}{}", BASE_URL, localized_path(meta.route, lang));

    let alternates = Language::ALL
        .iter()
        .map(|&alt| {
            (
                alt.code().to_string(),
                format!("{}{}", BASE_URL, localized_path(meta.route, alt)),
            )
        })
        .collect();

    let open_graph = vec![
        ("og:title".to_string(), title.clone()),
        ("og:description".to_string(), description.clone()),
        ("og:url".to_string(), canonical.clone()),
        ("og:site_name".to_string(), SITE_NAME.to_string()),
        ("og:type".to_string(), og_type(meta.schema_type).to_string()),
        ("og:locale".to_string(), lang.code().to_string()),
        ("og:image".to_string(), SOCIAL_IMAGE.to_string()),
    ];
    let twitter = vec![
        ("twitter:card".to_string(), "summary".to_string()),
        ("twitter:title".to_string(), title.clone()),
        ("twitter:description".to_string(), description.clone()),
        ("twitter:image".to_string(), SOCIAL_IMAGE.to_string()),
    ];

    let json_ld = structured_data(meta.schema_type, lang, &title, &description, &canonical);

    HeadTags {
        title,
        description,
        canonical,
        alternates,
        open_graph,
        twitter,
        json_ld,
    }
}

/// Translate `key`; if it has no entry anywhere, use the sitewide
/// fallback key instead of surfacing the raw key to crawlers.
fn resolve_or(lang: Language, key: &'static str, fallback_key: &'static str) -> String {
    let value = i18n::translate(lang, key);
    if value == key {
        i18n::translate(lang, fallback_key).to_string()
    } else {
        value.to_string()
    }
}

fn og_type(schema: SchemaType) -> &'static str {
    match schema {
        SchemaType::Article => "article",
        SchemaType::WebSite | SchemaType::Organization => "website",
    }
}

fn structured_data(
    schema: SchemaType,
    lang: Language,
    title: &str,
    description: &str,
    canonical: &str,
) -> Value {
    match schema {
        SchemaType::WebSite => json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": SITE_NAME,
            "url": BASE_URL,
            "inLanguage": lang.code(),
        }),
        SchemaType::Organization => json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": SITE_NAME,
            "url": BASE_URL,
            "description": description,
        }),
        SchemaType::Article => json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": title,
            "description": description,
            "url": canonical,
            "inLanguage": lang.code(),
            "publisher": {
                "@type": "Organization",
                "name": SITE_NAME,
                "url": BASE_URL,
            },
        }),
    }
}
