//! Archetype scoring: accumulation of option deltas and outcome resolution.
//!
//! Scores are never carried between evaluations. Every evaluation starts
//! from a zeroed [`ScoreState`] and applies the currently selected option of
//! each answered question exactly once, so a changed answer replaces its old
//! contribution instead of stacking on top of it.

pub mod archetype;
pub mod resolver;
pub mod state;

pub use archetype::{Archetype, ArchetypeError, BlendKey};
pub use resolver::{resolve, resolve_logged, ContentMissing, Outcome, Winners};
pub use state::{Deltas, ScoreState};

use crate::catalog::AnswerOption;

/// Recomputes the full score state from the currently selected options.
pub fn recompute<'a>(selected: impl IntoIterator<Item = &'a AnswerOption>) -> ScoreState {
    selected.into_iter().fold(ScoreState::new(), |mut state, option| {
        state.apply(&option.scores);
        state
    })
}

#[cfg(test)]
mod tests;
