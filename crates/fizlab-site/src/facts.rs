//! Daily fact rotation.
//!
//! Facts come from the external `daily_facts` table; a built-in set
//! ships with the app so the page works offline. Selection is a simple
//! day-number rotation over the active facts of the visitor's language.

use fizlab_core::enums::Language;
use fizlab_core::schema::DailyFactRecord;

fn fact(language: Language, title: &str, content: &str, category: &str) -> DailyFactRecord {
    DailyFactRecord {
        language,
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        active: true,
    }
}

/// The facts bundled with the application.
pub fn builtin_facts() -> Vec<DailyFactRecord> {
    vec![
        fact(
            Language::Pl,
            "Ślimacze tempo elektronów",
            "Elektrony w przewodzie dryfują z prędkością ułamków milimetra na sekundę, \
             a mimo to światło zapala się natychmiast, bo pole elektryczne rozchodzi się \
             niemal z prędkością światła.",
            "electricity",
        ),
        fact(
            Language::Pl,
            "Rok na Merkurym",
            "Merkury okrąża Słońce w 88 dni, ale jego doba słoneczna trwa 176 dni ziemskich \
             — na Merkurym rok mija szybciej niż jeden dzień.",
            "space",
        ),
        fact(
            Language::Pl,
            "Pusty atom",
            "Gdyby jądro atomu miało rozmiar piłki na środku stadionu, elektrony krążyłyby \
             na wysokości ostatnich trybun. Atom to głównie pusta przestrzeń.",
            "microworld",
        ),
        fact(
            Language::Pl,
            "Dwa metry w każdej komórce",
            "Nić DNA z jednej ludzkiej komórki po rozwinięciu miałaby około dwóch metrów \
             długości, a mieści się w jądrze o średnicy kilku mikrometrów.",
            "microworld",
        ),
        fact(
            Language::En,
            "Electrons move at a snail's pace",
            "Electrons drift through a wire at fractions of a millimetre per second, yet a \
             lamp lights instantly because the electric field propagates at nearly the \
             speed of light.",
            "electricity",
        ),
        fact(
            Language::En,
            "A year on Mercury",
            "Mercury orbits the Sun in 88 days, but its solar day lasts 176 Earth days — \
             on Mercury a year passes faster than a single day.",
            "space",
        ),
        fact(
            Language::En,
            "The empty atom",
            "If an atomic nucleus were a ball at the centre of a stadium, the electrons \
             would orbit out by the top rows of seats. An atom is mostly empty space.",
            "microworld",
        ),
        fact(
            Language::Hu,
            "Csigalassú elektronok",
            "Az elektronok a vezetékben másodpercenként a milliméter törtrészét teszik meg, \
             a lámpa mégis azonnal felgyullad, mert az elektromos tér közel fénysebességgel \
             terjed.",
            "electricity",
        ),
        fact(
            Language::Hu,
            "Egy év a Merkúron",
            "A Merkúr 88 nap alatt kerüli meg a Napot, de egy napja 176 földi napig tart — \
             a Merkúron egy év hamarabb telik el, mint egyetlen nap.",
            "space",
        ),
    ]
}

/// Pick the fact shown on a given day.
///
/// Only active facts in the requested language participate. When a
/// category filter matches nothing, the filter is dropped rather than
/// showing an empty page; `None` means the language has no facts at
/// all.
pub fn fact_for_day<'a>(
    facts: &'a [DailyFactRecord],
    day: u64,
    language: Language,
    category: Option<&str>,
) -> Option<&'a DailyFactRecord> {
    let in_language: Vec<&DailyFactRecord> = facts
        .iter()
        .filter(|f| f.active && f.language == language)
        .collect();

    let pool: Vec<&DailyFactRecord> = match category {
        Some(cat) => {
            let filtered: Vec<&DailyFactRecord> = in_language
                .iter()
                .copied()
                .filter(|f| f.category == cat)
                .collect();
            if filtered.is_empty() {
                in_language
            } else {
                filtered
            }
        }
        None => in_language,
    };

    if pool.is_empty() {
        return None;
    }
    Some(pool[(day as usize) % pool.len()])
}
