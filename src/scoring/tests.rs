use super::*;
use crate::catalog::{Catalogs, EnrichmentBank, StoryBank};
use crate::test_support;
use super::Archetype::*;

fn option(scores: &[(Archetype, i32)]) -> AnswerOption {
    AnswerOption {
        text: "option".to_string(),
        scores: scores.iter().copied().collect(),
    }
}

#[test]
fn recompute_sums_selected_options_only() {
    let a = option(&[(Leader, 2), (Visionary, 1)]);
    let b = option(&[(Leader, 1), (Lover, 3)]);
    let state = recompute([&a, &b]);

    assert_eq!(state.get(Leader), 3);
    assert_eq!(state.get(Fighter), 0);
    assert_eq!(state.get(Visionary), 1);
    assert_eq!(state.get(Lover), 3);
    assert_eq!(state.iter().count(), 4);
}

#[test]
fn recompute_from_scratch_does_not_double_count() {
    let first = option(&[(Fighter, 2)]);
    let changed = option(&[(Lover, 2)]);

    let before = recompute([&first]);
    let after = recompute([&changed]);

    assert_eq!(before.get(Fighter), 2);
    assert_eq!(after.get(Fighter), 0);
    assert_eq!(after.get(Lover), 2);
}

#[test]
fn serialized_state_has_exactly_four_keys_in_canonical_order() {
    let state = ScoreState::with_scores([(Lover, 1)]);
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"Leader":0,"Fighter":0,"Visionary":0,"Lover":1}"#);
}

#[test]
fn apply_saturates_instead_of_overflowing() {
    let mut state = ScoreState::with_scores([(Leader, i32::MAX)]);
    state.apply(&Deltas::from([(Leader, 5)]));
    assert_eq!(state.get(Leader), i32::MAX);
}

#[test]
fn two_way_tie_forms_canonical_pair() {
    let state = ScoreState::with_scores([(Leader, 5), (Fighter, 5)]);
    match Winners::of(&state) {
        Winners::Pair(pair) => assert_eq!(pair.key(), "Leader_Fighter"),
        other => panic!("expected a pair, got {:?}", other),
    }
}

#[test]
fn pair_key_ignores_score_order() {
    let state = ScoreState::with_scores([(Visionary, 4), (Leader, 4), (Lover, 1)]);
    assert_eq!(
        Winners::of(&state),
        Winners::Pair(BlendKey::new(Visionary, Leader).unwrap())
    );
    assert_eq!(BlendKey::new(Visionary, Leader).unwrap().key(), "Leader_Visionary");
}

#[test]
fn single_maximum_is_pure() {
    let state = ScoreState::with_scores([(Leader, 3), (Fighter, 1), (Visionary, 1), (Lover, 1)]);
    let catalogs = test_support::catalogs();
    match resolve(&state, &catalogs).unwrap() {
        Outcome::Pure {
            archetype, story, ..
        } => {
            assert_eq!(archetype, Leader);
            assert_eq!(story.title, "The Keeper of the Lanterns");
        }
        other => panic!("expected pure outcome, got {:?}", other),
    }
}

#[test]
fn all_equal_is_tied_for_any_value() {
    let catalogs = test_support::catalogs();
    for value in [0, 1, 7, -3] {
        let state = ScoreState::with_scores(Archetype::ALL.map(|a| (a, value)));
        assert!(matches!(
            resolve(&state, &catalogs),
            Ok(Outcome::Tied { ref winners }) if winners.len() == 4
        ));
    }
}

#[test]
fn three_way_tie_is_tied() {
    let catalogs = test_support::catalogs();
    let state = ScoreState::with_scores([(Leader, 2), (Fighter, 2), (Lover, 2)]);
    assert!(matches!(resolve(&state, &catalogs), Ok(Outcome::Tied { .. })));
}

#[test]
fn blended_lookup_uses_normalised_key() {
    let catalogs = test_support::catalogs();
    let state = ScoreState::with_scores([(Leader, 4), (Visionary, 4)]);
    match resolve(&state, &catalogs).unwrap() {
        Outcome::Blended { pair, story } => {
            assert_eq!(pair.key(), "Leader_Visionary");
            assert_eq!(story.title, "The Winter City");
        }
        other => panic!("expected blended outcome, got {:?}", other),
    }
}

#[test]
fn missing_pure_story_is_reported() {
    let mut catalogs: Catalogs = test_support::catalogs();
    catalogs.stories = StoryBank::parse(r#"{"stories": {"pure": {}, "blended": {}}}"#).unwrap();

    let state = ScoreState::with_scores([(Leader, 1)]);
    assert_eq!(
        resolve(&state, &catalogs),
        Err(ContentMissing::Story {
            key: "Leader".to_string()
        })
    );
}

#[test]
fn missing_enrichment_for_pure_winner_is_reported() {
    let mut catalogs = test_support::catalogs();
    catalogs.enrichment = EnrichmentBank::parse(r#"{"diverse_elements": {}}"#).unwrap();

    let state = ScoreState::with_scores([(Leader, 1)]);
    assert_eq!(
        resolve(&state, &catalogs),
        Err(ContentMissing::Enrichment { archetype: Leader })
    );
}

#[test]
fn missing_blended_story_is_reported() {
    let catalogs = test_support::catalogs();
    let state = ScoreState::with_scores([(Fighter, 2), (Lover, 2)]);
    assert_eq!(
        resolve(&state, &catalogs),
        Err(ContentMissing::Story {
            key: "Fighter_Lover".to_string()
        })
    );
}

#[test]
fn blend_key_parsing() {
    assert_eq!(BlendKey::parse("Lover_Fighter").unwrap().key(), "Fighter_Lover");
    assert!(matches!(BlendKey::parse("Leader"), Err(ArchetypeError::MalformedPair(_))));
    assert!(matches!(BlendKey::parse("Leader_Leader"), Err(ArchetypeError::RepeatedArchetype(_))));
    assert!(matches!(BlendKey::parse("Leader_Sage"), Err(ArchetypeError::Unknown(_))));
    assert_eq!(BlendKey::all().count(), 6);
}
