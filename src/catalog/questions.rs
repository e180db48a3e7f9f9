use super::{from_json, ordered_entries, CatalogError};
use crate::scoring::Deltas;
use serde::{Deserialize, Serialize};

pub(crate) const CATALOG: &str = "questions";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub text: String,
    #[serde(default)]
    pub scores: Deltas,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Deserialize)]
struct QuestionFile {
    user_input: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<AnswerOption>,
}

/// Questions in the order the catalog lists them.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let file: QuestionFile = from_json(CATALOG, json)?;
        let questions = ordered_entries::<RawQuestion>(CATALOG, file.user_input)?
            .into_iter()
            .map(|(id, raw)| Question {
                id,
                prompt: raw.question,
                options: raw.options,
            })
            .collect::<Vec<_>>();

        if questions.is_empty() {
            return Err(CatalogError::invalid(CATALOG, "no questions defined"));
        }
        if let Some(empty) = questions.iter().find(|q| q.options.is_empty()) {
            return Err(CatalogError::invalid(
                CATALOG,
                format!("question `{}` has no options", empty.id),
            ));
        }

        Ok(Self { questions })
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
