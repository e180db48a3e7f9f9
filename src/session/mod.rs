//! Per-user quiz state.
//!
//! A session only remembers which option is selected for each question.
//! Scores and outcomes are derived on demand, never stored.

use crate::catalog::{AnswerOption, Catalogs, QuestionCatalog};
use crate::scoring::{self, ContentMissing, Outcome, ScoreState};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),
    #[error("Question `{question}` has {available} options, option {index} does not exist")]
    OptionOutOfRange {
        question: String,
        index: usize,
        available: usize,
    },
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    answers: BTreeMap<String, usize>,
    feedback_draft: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            answers: BTreeMap::new(),
            feedback_draft: String::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Records or replaces the choice for `question_id`. Invalid input leaves
    /// the session untouched.
    pub fn select(
        &mut self,
        questions: &QuestionCatalog,
        question_id: &str,
        option: usize,
    ) -> Result<(), SessionError> {
        let question = questions
            .get(question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))?;
        if option >= question.options.len() {
            return Err(SessionError::OptionOutOfRange {
                question: question_id.to_string(),
                index: option,
                available: question.options.len(),
            });
        }

        let previous = self.answers.insert(question_id.to_string(), option);
        debug!(session = %self.id, question = question_id, option, ?previous, "answer selected");
        Ok(())
    }

    /// Returns whether a choice was removed.
    pub fn clear(&mut self, question_id: &str) -> bool {
        self.answers.remove(question_id).is_some()
    }

    pub fn selection(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Selected options in catalog order. Answers to questions the catalog
    /// no longer has are skipped.
    pub fn selected_options<'a>(
        &'a self,
        questions: &'a QuestionCatalog,
    ) -> impl Iterator<Item = &'a AnswerOption> + 'a {
        questions.iter().filter_map(move |question| {
            self.selection(&question.id)
                .and_then(|index| question.options.get(index))
        })
    }

    pub fn scores(&self, questions: &QuestionCatalog) -> ScoreState {
        scoring::recompute(self.selected_options(questions))
    }

    pub fn outcome<'a>(&self, catalogs: &'a Catalogs) -> Result<Outcome<'a>, ContentMissing> {
        scoring::resolve_logged(&self.scores(&catalogs.questions), catalogs)
    }

    pub fn feedback_draft(&self) -> &str {
        &self.feedback_draft
    }

    pub fn set_feedback_draft(&mut self, text: &str) {
        self.feedback_draft = text.to_string();
    }

    pub fn clear_feedback_draft(&mut self) {
        self.feedback_draft.clear();
    }
}
