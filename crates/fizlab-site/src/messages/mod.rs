//! Static message tables, one module per language.
//!
//! Polish is the origin language and the only table guaranteed to be
//! complete; the others fall back through `i18n::translate`.

pub mod en;
pub mod hu;
pub mod pl;
