//! Message lookup and interpolation.
//!
//! Each language has a static key→string table. Lookup falls back to
//! the default language (Polish) and finally to the raw key — a missing
//! translation degrades visibly instead of panicking. There is no
//! pluralization and no fallback chain beyond that single step.

use fizlab_core::enums::Language;

use crate::messages;

/// A language's complete message table.
pub type MessageTable = &'static [(&'static str, &'static str)];

/// The table for one language.
pub fn table(lang: Language) -> MessageTable {
    match lang {
        Language::Pl => messages::pl::MESSAGES,
        Language::En => messages::en::MESSAGES,
        Language::Hu => messages::hu::MESSAGES,
    }
}

fn lookup(table: MessageTable, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve a message key for a language.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(table(lang), key)
        .or_else(|| lookup(table(Language::default()), key))
        .unwrap_or(key)
}

/// Replace `{name}` placeholders with the given values.
///
/// Placeholders without a matching argument are left in place, same as
/// a missing key surfacing raw.
pub fn format_message(template: &str, args: &[(&str, String)]) -> String {
    let mut result = template.to_string();
    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }
    result
}

/// Convenience: translate then interpolate.
pub fn translate_with(lang: Language, key: &str, args: &[(&str, String)]) -> String {
    format_message(translate(lang, key), args)
}
