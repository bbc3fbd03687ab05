use fizlab_core::enums::Language;
use fizlab_core::schema::DailyFactRecord;

use crate::facts::{builtin_facts, fact_for_day};
use crate::i18n::{format_message, translate, translate_with};
use crate::quiz::{questions_for, QuizSession};
use crate::routes::{localized_path, resolve, switch_language, Route};
use crate::seo::{head_tags, page_meta, PageMeta, SchemaType, BASE_URL};

// --- i18n ---

#[test]
fn translate_finds_language_entry() {
    assert_eq!(translate(Language::En, "control.pause"), "Pause");
    assert_eq!(translate(Language::Pl, "control.pause"), "Pauza");
}

#[test]
fn translate_falls_back_to_polish_then_raw_key() {
    // Not yet translated into Hungarian.
    assert_eq!(
        translate(Language::Hu, "readout.inner_period"),
        "Okres pierwszej planety"
    );
    assert_eq!(translate(Language::Hu, "no.such.key"), "no.such.key");
}

#[test]
fn format_message_replaces_named_placeholders() {
    let out = format_message(
        "Question {current} of {total}",
        &[("current", "2".to_string()), ("total", "5".to_string())],
    );
    assert_eq!(out, "Question 2 of 5");
}

#[test]
fn format_message_leaves_unmatched_placeholders() {
    let out = format_message("Hello {name}", &[]);
    assert_eq!(out, "Hello {name}");
}

#[test]
fn translate_with_interpolates() {
    let out = translate_with(
        Language::Pl,
        "quiz.progress",
        &[("current", "1".to_string()), ("total", "3".to_string())],
    );
    assert_eq!(out, "Pytanie 1 z 3");
}

// --- Routing ---

#[test]
fn every_page_path_round_trips_in_every_language() {
    for &lang in &Language::ALL {
        for route in Route::PAGES {
            let path = localized_path(route, lang);
            let matched = resolve(path, lang);
            assert_eq!(matched.route, route, "{path} in {lang:?}");
            assert_eq!(matched.language, lang);
            assert_eq!(matched.suffix, "");
        }
    }
}

#[test]
fn home_matches_root_exactly() {
    let matched = resolve("/", Language::Hu);
    assert_eq!(matched.route, Route::Home);
    assert_eq!(matched.language, Language::Hu);
    assert_eq!(resolve("/anything", Language::Pl).route, Route::NotFound);
}

#[test]
fn shared_paths_prefer_visitor_language() {
    // "/quiz" is the canonical quiz path in both Polish and English.
    assert_eq!(resolve("/quiz", Language::En).language, Language::En);
    assert_eq!(resolve("/quiz", Language::Pl).language, Language::Pl);
    // A Hungarian-only path resolves regardless of preference.
    let matched = resolve("/kviz", Language::En);
    assert_eq!(matched.route, Route::Quiz);
    assert_eq!(matched.language, Language::Hu);
}

#[test]
fn resolve_keeps_sub_path_suffix() {
    let matched = resolve("/elektrycznosc-i-magnetyzm/dryf", Language::Pl);
    assert_eq!(matched.route, Route::Electricity);
    assert_eq!(matched.suffix, "/dryf");
}

#[test]
fn resolve_ignores_trailing_slash() {
    let matched = resolve("/quiz/", Language::Pl);
    assert_eq!(matched.route, Route::Quiz);
    assert_eq!(matched.suffix, "");
}

#[test]
fn switch_language_remaps_path_and_keeps_suffix() {
    let out = switch_language("/elektrycznosc-i-magnetyzm/dryf", Language::Pl, Language::En);
    assert_eq!(out, "/electricity-and-magnetism/dryf");
    let out = switch_language("/fold-es-vilagur", Language::Hu, Language::Pl);
    assert_eq!(out, "/ziemia-i-kosmos");
}

#[test]
fn switch_language_sends_unknown_paths_home() {
    assert_eq!(switch_language("/nope", Language::Pl, Language::En), "/");
}

// --- SEO ---

#[test]
fn head_tags_build_canonical_and_alternates() {
    let meta = page_meta(Route::EarthSpace);
    let head = head_tags(&meta, Language::En);
    assert_eq!(head.title, "Earth and space");
    assert_eq!(head.canonical, format!("{BASE_URL}/earth-and-space"));
    assert_eq!(head.alternates.len(), Language::ALL.len());
    assert!(head
        .alternates
        .iter()
        .any(|(code, url)| code == "pl" && url == &format!("{BASE_URL}/ziemia-i-kosmos")));
}

#[test]
fn lesson_pages_emit_article_structured_data() {
    let meta = page_meta(Route::Microworld);
    assert_eq!(meta.schema_type, SchemaType::Article);
    let head = head_tags(&meta, Language::Pl);
    assert_eq!(head.json_ld["@type"], "Article");
    assert_eq!(head.json_ld["headline"], head.title.as_str());
    assert_eq!(head.json_ld["publisher"]["@type"], "Organization");
}

#[test]
fn home_emits_website_structured_data() {
    let head = head_tags(&page_meta(Route::Home), Language::Pl);
    assert_eq!(head.json_ld["@type"], "WebSite");
    assert_eq!(head.json_ld["url"], BASE_URL);
}

#[test]
fn untranslated_description_uses_sitewide_fallback() {
    let meta = PageMeta {
        description_key: "seo.unwritten.description",
        ..page_meta(Route::Home)
    };
    let head = head_tags(&meta, Language::En);
    assert_eq!(
        head.description,
        translate(Language::En, "seo.default_description")
    );
}

// --- Daily facts ---

#[test]
fn fact_rotation_cycles_through_language_pool() {
    let facts = builtin_facts();
    let pool: Vec<_> = facts.iter().filter(|f| f.language == Language::Pl).collect();
    assert!(pool.len() >= 2);
    let a = fact_for_day(&facts, 0, Language::Pl, None).unwrap();
    let wrapped = fact_for_day(&facts, pool.len() as u64, Language::Pl, None).unwrap();
    assert_eq!(a.title, wrapped.title);
}

#[test]
fn fact_category_filter_applies_and_falls_back() {
    let facts = builtin_facts();
    let space = fact_for_day(&facts, 0, Language::Pl, Some("space")).unwrap();
    assert_eq!(space.category, "space");
    // Unknown category drops the filter instead of returning nothing.
    assert!(fact_for_day(&facts, 0, Language::Pl, Some("astro-botany")).is_some());
}

#[test]
fn fact_lookup_skips_inactive_and_other_languages() {
    let facts = vec![
        DailyFactRecord {
            language: Language::En,
            title: "off".to_string(),
            content: String::new(),
            category: "space".to_string(),
            active: false,
        },
        DailyFactRecord {
            language: Language::Pl,
            title: "pl".to_string(),
            content: String::new(),
            category: "space".to_string(),
            active: true,
        },
    ];
    assert!(fact_for_day(&facts, 0, Language::En, None).is_none());
    assert_eq!(fact_for_day(&facts, 0, Language::Pl, None).unwrap().title, "pl");
}

// --- Quiz ---

#[test]
fn quiz_session_scores_and_finishes() {
    let mut session = QuizSession::new("electricity-magnetism", "easy");
    assert_eq!(session.total(), 2);
    assert_eq!(session.progress_label(Language::Pl), "Pytanie 1 z 2");

    let first = session.current_question().unwrap();
    assert!(session.answer(first.correct));
    assert_eq!(session.progress_label(Language::Pl), "Pytanie 2 z 2");

    let second = session.current_question().unwrap();
    let wrong = (second.correct + 1) % second.choices.len();
    assert!(!session.answer(wrong));

    assert!(session.is_finished());
    assert_eq!(session.score(), 1);
    // Answering past the end changes nothing.
    assert!(!session.answer(0));
    assert_eq!(session.score(), 1);
}

#[test]
fn quiz_finish_produces_attempt_record() {
    let mut session = QuizSession::new("earth-space", "medium");
    while !session.is_finished() {
        let q = session.current_question().unwrap();
        session.answer(q.correct);
    }
    let record = session.finish(Some(7), 1_756_000_000);
    assert_eq!(record.topic, "earth-space");
    assert_eq!(record.difficulty, "medium");
    assert_eq!(record.score, record.total);
    assert_eq!(record.user_id, Some(7));
}

#[test]
fn question_bank_choices_are_translated() {
    for q in questions_for("microworld", "medium") {
        assert!(q.correct < q.choices.len());
        for choice in &q.choices {
            assert!(!choice.get(Language::Hu).is_empty());
        }
    }
}
