//! Site shell: localization, localized routing, SEO metadata, daily
//! facts, and quiz sessions. Pure functions over static tables — no
//! runtime framework dependency.

pub mod facts;
pub mod i18n;
pub mod messages;
pub mod quiz;
pub mod routes;
pub mod seo;

#[cfg(test)]
mod tests;
