//! Free-text feedback forwarded to a hosted table.
//!
//! Text is validated locally first; the sink is only reached with a
//! [`FeedbackRecord`], which cannot be built from blank input.

pub mod airtable;
pub mod validator;

pub use airtable::AirtableSink;
pub use validator::{ValidationError, Validator};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

pub const SUCCESS_MESSAGE: &str = "Your thoughts have been saved successfully!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("Feedback storage is not configured: {0}")]
    Unconfigured(String),
    #[error("Request timeout - the feedback service took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the feedback service")]
    Connect,
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Feedback service rejected the record ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("An error occurred while saving your feedback: {0}")]
    Sink(#[from] SinkError),
}

/// One validated submission.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    text: String,
}

impl FeedbackRecord {
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        Validator::check(text).map(|text| Self {
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only destination for feedback records.
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn submit(&self, record: &FeedbackRecord) -> Result<(), SinkError>;
}

/// Stand-in used when credentials are absent, so startup still succeeds.
pub struct UnconfiguredSink {
    reason: String,
}

impl UnconfiguredSink {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl FeedbackSink for UnconfiguredSink {
    async fn submit(&self, _record: &FeedbackRecord) -> Result<(), SinkError> {
        Err(SinkError::Unconfigured(self.reason.clone()))
    }
}

/// Validates `text` and forwards it to `sink` exactly once.
pub async fn submit_feedback(sink: &dyn FeedbackSink, text: &str) -> Result<(), FeedbackError> {
    let record = FeedbackRecord::new(text)?;

    match sink.submit(&record).await {
        Ok(()) => {
            info!(chars = record.text().chars().count(), "feedback stored");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "feedback submission failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests;
