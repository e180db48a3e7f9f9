//! Static content loaded once at startup: questions, stories, enrichment
//! perspectives and comparison modes.
//!
//! Every catalog is a JSON document. A missing or malformed file is fatal;
//! gaps in the story bank are only logged, because they surface later as a
//! recoverable content-missing outcome.

pub mod enrichment;
pub mod modes;
pub mod questions;
pub mod stories;

pub use enrichment::{Enrichment, EnrichmentBank};
pub use modes::{ModeCatalog, ModeEntry};
pub use questions::{AnswerOption, Question, QuestionCatalog};
pub use stories::{Story, StoryBank};

use crate::config::CatalogConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {catalog} catalog at {path}: {source}")]
    Io {
        catalog: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed {catalog} catalog: {source}")]
    Malformed {
        catalog: &'static str,
        source: serde_json::Error,
    },
    #[error("Invalid {catalog} catalog: {reason}")]
    Invalid {
        catalog: &'static str,
        reason: String,
    },
}

impl CatalogError {
    pub(crate) fn invalid(catalog: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::Invalid {
            catalog,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalogs {
    pub questions: QuestionCatalog,
    pub stories: StoryBank,
    pub enrichment: EnrichmentBank,
    pub modes: ModeCatalog,
}

impl Catalogs {
    pub fn load(paths: &CatalogConfig) -> Result<Self, CatalogError> {
        let questions = QuestionCatalog::parse(&read(questions::CATALOG, &paths.questions)?)?;
        let stories = StoryBank::parse(&read(stories::CATALOG, &paths.stories)?)?;
        let enrichment = EnrichmentBank::parse(&read(enrichment::CATALOG, &paths.enrichment)?)?;
        let modes = ModeCatalog::parse(&read(modes::CATALOG, &paths.modes)?)?;

        let catalogs = Self {
            questions,
            stories,
            enrichment,
            modes,
        };
        info!(
            questions = catalogs.questions.len(),
            stories = catalogs.stories.len(),
            modes = catalogs.modes.len(),
            "catalogs loaded"
        );
        catalogs.log_coverage_gaps();
        Ok(catalogs)
    }

    /// Outcome keys that would resolve to a content-missing result.
    pub fn coverage_gaps(&self) -> Vec<String> {
        let mut gaps = self.stories.missing_keys();
        gaps.extend(
            self.enrichment
                .missing()
                .map(|archetype| format!("enrichment:{archetype}")),
        );
        gaps
    }

    fn log_coverage_gaps(&self) {
        for gap in self.coverage_gaps() {
            warn!(key = %gap, "no content for a reachable outcome");
        }
    }
}

fn read(catalog: &'static str, path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        catalog,
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn from_json<T: DeserializeOwned>(catalog: &'static str, json: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Malformed { catalog, source })
}

/// Entries of a JSON object in document order.
pub(crate) fn ordered_entries<T: DeserializeOwned>(
    catalog: &'static str,
    object: serde_json::Map<String, serde_json::Value>,
) -> Result<Vec<(String, T)>, CatalogError> {
    object
        .into_iter()
        .map(|(key, value)| {
            serde_json::from_value(value)
                .map(|entry| (key, entry))
                .map_err(|source| CatalogError::Malformed { catalog, source })
        })
        .collect()
}

#[cfg(test)]
mod tests;
