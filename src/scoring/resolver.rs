//! Maps a score state onto a story outcome.

use super::archetype::{Archetype, BlendKey};
use super::state::ScoreState;
use crate::catalog::{Catalogs, Enrichment, Story};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentMissing {
    #[error("No story found for `{key}`")]
    Story { key: String },
    #[error("No enrichment found for `{archetype}`")]
    Enrichment { archetype: Archetype },
}

/// Winning set of an evaluation, before any catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winners {
    Single(Archetype),
    Pair(BlendKey),
    Tie(Vec<Archetype>),
}

impl Winners {
    pub fn of(state: &ScoreState) -> Self {
        let winners = state.winners();
        if let [single] = winners[..] {
            return Winners::Single(single);
        }
        // `winners()` yields distinct archetypes, so a pair always forms a key.
        if let [a, b] = winners[..] {
            if let Some(pair) = BlendKey::new(a, b) {
                return Winners::Pair(pair);
            }
        }
        Winners::Tie(winners)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    Pure {
        archetype: Archetype,
        story: &'a Story,
        enrichment: &'a Enrichment,
    },
    Blended {
        pair: BlendKey,
        story: &'a Story,
    },
    Tied {
        winners: Vec<Archetype>,
    },
}

pub fn resolve<'a>(state: &ScoreState, catalogs: &'a Catalogs) -> Result<Outcome<'a>, ContentMissing> {
    let outcome = match Winners::of(state) {
        Winners::Single(archetype) => {
            let story = catalogs.stories.pure(archetype).ok_or_else(|| ContentMissing::Story {
                key: archetype.to_string(),
            })?;
            let enrichment = catalogs
                .enrichment
                .get(archetype)
                .ok_or(ContentMissing::Enrichment { archetype })?;
            Outcome::Pure {
                archetype,
                story,
                enrichment,
            }
        }
        Winners::Pair(pair) => {
            let story = catalogs
                .stories
                .blended(pair)
                .ok_or_else(|| ContentMissing::Story { key: pair.key() })?;
            Outcome::Blended { pair, story }
        }
        Winners::Tie(winners) => Outcome::Tied { winners },
    };
    debug!(?state, outcome = %outcome.label(), "resolved archetype outcome");
    Ok(outcome)
}

/// Like [`resolve`], with a warning logged when content is missing.
pub fn resolve_logged<'a>(state: &ScoreState, catalogs: &'a Catalogs) -> Result<Outcome<'a>, ContentMissing> {
    resolve(state, catalogs).map_err(|missing| {
        warn!(%missing, "story bank is missing content for the resolved outcome");
        missing
    })
}

impl Outcome<'_> {
    fn label(&self) -> String {
        match self {
            Outcome::Pure { archetype, .. } => format!("pure:{archetype}"),
            Outcome::Blended { pair, .. } => format!("blended:{pair}"),
            Outcome::Tied { winners } => format!("tied:{}", winners.len()),
        }
    }
}
