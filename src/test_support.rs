//! Fixtures shared by unit tests.

use crate::catalog::{Catalogs, EnrichmentBank, ModeCatalog, QuestionCatalog, StoryBank};
use crate::feedback::{FeedbackRecord, FeedbackSink, SinkError};
use async_trait::async_trait;
use std::sync::Mutex;

pub const QUESTIONS: &str = r#"{
  "user_input": {
    "q1": {
      "question": "What does the first snowfall make you want to do?",
      "options": [
        {"text": "Organise the neighbours to clear the paths", "scores": {"Leader": 2}},
        {"text": "Go out and test myself against the cold", "scores": {"Fighter": 2}},
        {"text": "Imagine the town transformed", "scores": {"Visionary": 2}},
        {"text": "Stay in with someone close", "scores": {"Lover": 2}}
      ]
    },
    "q2": {
      "question": "Which winter evening sounds best?",
      "options": [
        {"text": "Planning next year", "scores": {"Leader": 1, "Visionary": 1}},
        {"text": "A long ski in the dark", "scores": {"Fighter": 1}},
        {"text": "Stargazing", "scores": {"Visionary": 1, "Lover": 1}},
        {"text": "Nothing in particular", "scores": {}}
      ]
    },
    "q0": {
      "question": "Listed last although its id sorts first",
      "options": [
        {"text": "Lead", "scores": {"Leader": 3}},
        {"text": "Love", "scores": {"Lover": 3}}
      ]
    }
  }
}"#;

pub const STORIES: &str = r#"{
  "stories": {
    "pure": {
      "Leader": {"title": "The Keeper of the Lanterns", "story": "You light the way."},
      "Fighter": {"title": "The Long Ascent", "story": "You climb."},
      "Visionary": {"title": "The Ice Architect", "story": "You imagine."},
      "Lover": {"title": "The Warm Window", "story": "You gather."}
    },
    "blended": {
      "Leader_Fighter": {"title": "The Expedition", "story": "Together, onward."},
      "Visionary_Leader": {"title": "The Winter City", "story": "A plan made of light."},
      "Visionary_Lover": {"title": "The Northern Lights", "story": "Wonder, shared."}
    }
  }
}"#;

pub const ENRICHMENT: &str = r#"{
  "diverse_elements": {
    "Leader": {"additional_perspectives": [{"perspective": "Lead by listening."}, {"perspective": "Rest is a duty too."}]},
    "Fighter": {"additional_perspectives": [{"perspective": "Strength can be gentle."}]},
    "Visionary": {"additional_perspectives": [{"perspective": "Dreams need roots."}]},
    "Lover": {"additional_perspectives": [{"perspective": "Warmth travels."}]}
  }
}"#;

pub const MODES: &str = r#"{
  "Survival": {"Explanation": "Winter as a test of endurance."},
  "Hygge": {"Explanation": "Winter as comfort and closeness."},
  "Wonder": {"Explanation": "Winter as enchantment."}
}"#;

pub fn catalogs() -> Catalogs {
    Catalogs {
        questions: QuestionCatalog::parse(QUESTIONS).unwrap(),
        stories: StoryBank::parse(STORIES).unwrap(),
        enrichment: EnrichmentBank::parse(ENRICHMENT).unwrap(),
        modes: ModeCatalog::parse(MODES).unwrap(),
    }
}

/// Records every submission; fails while `fail_with` is set.
#[derive(Default)]
pub struct RecordingSink {
    pub received: Mutex<Vec<String>>,
    pub fail_with: Mutex<Option<SinkError>>,
}

impl RecordingSink {
    pub fn failing(error: SinkError) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            fail_with: Mutex::new(Some(error)),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl FeedbackSink for RecordingSink {
    async fn submit(&self, record: &FeedbackRecord) -> Result<(), SinkError> {
        self.received.lock().unwrap().push(record.text().to_string());
        match self.fail_with.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
