use super::*;
use crate::config::CatalogConfig;
use crate::scoring::{Archetype, BlendKey};
use crate::test_support;
use std::fs;
use tempfile::TempDir;

fn write_catalogs(dir: &TempDir) -> CatalogConfig {
    let paths = CatalogConfig {
        questions: dir.path().join("winter.json"),
        stories: dir.path().join("stories.json"),
        enrichment: dir.path().join("diverse_elements.json"),
        modes: dir.path().join("antidote.json"),
    };
    fs::write(&paths.questions, test_support::QUESTIONS).unwrap();
    fs::write(&paths.stories, test_support::STORIES).unwrap();
    fs::write(&paths.enrichment, test_support::ENRICHMENT).unwrap();
    fs::write(&paths.modes, test_support::MODES).unwrap();
    paths
}

#[test]
fn loads_all_catalogs_from_disk() {
    let dir = TempDir::new().unwrap();
    let catalogs = Catalogs::load(&write_catalogs(&dir)).unwrap();

    assert_eq!(catalogs.questions.len(), 3);
    assert_eq!(catalogs.stories.len(), 7);
    assert_eq!(catalogs.modes.len(), 3);
}

#[test]
fn missing_file_is_an_io_error_naming_the_catalog() {
    let dir = TempDir::new().unwrap();
    let paths = write_catalogs(&dir);
    fs::remove_file(&paths.stories).unwrap();

    match Catalogs::load(&paths) {
        Err(CatalogError::Io { catalog, path, .. }) => {
            assert_eq!(catalog, "stories");
            assert_eq!(path, paths.stories);
        }
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn malformed_json_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = write_catalogs(&dir);
    fs::write(&paths.modes, "{ not json").unwrap();

    assert!(matches!(
        Catalogs::load(&paths),
        Err(CatalogError::Malformed { catalog: "modes", .. })
    ));
}

#[test]
fn questions_keep_document_order() {
    let questions = QuestionCatalog::parse(test_support::QUESTIONS).unwrap();
    let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["q1", "q2", "q0"]);
    assert_eq!(questions.get("q2").unwrap().options.len(), 4);
}

#[test]
fn option_without_scores_defaults_to_no_deltas() {
    let json = r#"{"user_input": {"q": {"question": "?", "options": [{"text": "a"}]}}}"#;
    let questions = QuestionCatalog::parse(json).unwrap();
    assert!(questions.get("q").unwrap().options[0].scores.is_empty());
}

#[test]
fn unknown_archetype_in_scores_is_rejected() {
    let json = r#"{"user_input": {"q": {"question": "?", "options": [{"text": "a", "scores": {"Sage": 1}}]}}}"#;
    assert!(matches!(
        QuestionCatalog::parse(json),
        Err(CatalogError::Malformed { catalog: "questions", .. })
    ));
}

#[test]
fn empty_question_sets_are_invalid() {
    assert!(matches!(
        QuestionCatalog::parse(r#"{"user_input": {}}"#),
        Err(CatalogError::Invalid { .. })
    ));
    assert!(matches!(
        QuestionCatalog::parse(r#"{"user_input": {"q": {"question": "?", "options": []}}}"#),
        Err(CatalogError::Invalid { .. })
    ));
}

#[test]
fn blended_keys_are_normalised() {
    let stories = StoryBank::parse(test_support::STORIES).unwrap();
    let pair = BlendKey::new(Archetype::Leader, Archetype::Visionary).unwrap();
    assert_eq!(stories.blended(pair).unwrap().title, "The Winter City");
}

#[test]
fn duplicate_blended_pair_is_invalid() {
    let json = r#"{"stories": {"blended": {
        "Leader_Lover": {"title": "a", "story": "a"},
        "Lover_Leader": {"title": "b", "story": "b"}
    }}}"#;
    assert!(matches!(StoryBank::parse(json), Err(CatalogError::Invalid { .. })));
}

#[test]
fn malformed_blended_key_is_invalid() {
    let json = r#"{"stories": {"blended": {"LeaderFighter": {"title": "a", "story": "a"}}}}"#;
    assert!(matches!(StoryBank::parse(json), Err(CatalogError::Invalid { .. })));
}

#[test]
fn coverage_gaps_list_missing_pairs() {
    let gaps = test_support::catalogs().coverage_gaps();
    assert_eq!(gaps, ["Leader_Lover", "Fighter_Visionary", "Fighter_Lover"]);
}

#[test]
fn enrichment_text_joins_perspectives_with_blank_lines() {
    let bank = EnrichmentBank::parse(test_support::ENRICHMENT).unwrap();
    assert_eq!(
        bank.get(Archetype::Leader).unwrap().text(),
        "Lead by listening.\n\nRest is a duty too."
    );
}

#[test]
fn modes_keep_order_and_derive_image_names() {
    let modes = ModeCatalog::parse(test_support::MODES).unwrap();
    let names: Vec<_> = modes.names().collect();
    assert_eq!(names, ["Survival", "Hygge", "Wonder"]);
    assert_eq!(modes.get("Hygge").unwrap().image_file_name(), "hygge.jpg");
}

#[test]
fn placeholder_mode_name_is_reserved() {
    let json = r#"{"Select": {"Explanation": "x"}}"#;
    assert!(matches!(ModeCatalog::parse(json), Err(CatalogError::Invalid { .. })));
}
