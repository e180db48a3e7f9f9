use crate::catalog::Catalogs;
use crate::export::{self, StoryDocument};
use crate::scoring::{Archetype, ContentMissing, Outcome};
use crate::session::Session;
use serde::Serialize;

pub const TITLE: &str = "Your Winter Story";
pub const TIED_MESSAGE: &str = "It looks like you equally embody all aspects of winter! Please try answering again to see if we can find your true match.";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub label: &'static str,
    pub file_name: &'static str,
    pub mime_type: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoryView {
    Pure {
        archetype: Archetype,
        title: String,
        story: String,
        enrichment_heading: &'static str,
        enrichment: String,
        download: Download,
    },
    Blended {
        archetypes: [Archetype; 2],
        title: String,
        story: String,
    },
    Tied {
        message: &'static str,
    },
    ContentMissing {
        message: String,
    },
}

impl StoryView {
    pub fn render(catalogs: &Catalogs, session: &Session) -> Self {
        match session.outcome(catalogs) {
            Ok(outcome) => Self::from_outcome(&outcome),
            Err(missing) => Self::missing(&missing),
        }
    }

    pub fn from_outcome(outcome: &Outcome<'_>) -> Self {
        match outcome {
            Outcome::Pure {
                archetype,
                story,
                enrichment,
            } => StoryView::Pure {
                archetype: *archetype,
                title: story.title.clone(),
                story: story.body.clone(),
                enrichment_heading: export::ENRICHMENT_HEADING,
                enrichment: enrichment.text(),
                download: Download {
                    label: export::DOWNLOAD_LABEL,
                    file_name: export::FILE_NAME,
                    mime_type: export::MIME_TYPE,
                },
            },
            Outcome::Blended { pair, story } => StoryView::Blended {
                archetypes: [pair.first(), pair.second()],
                title: story.title.clone(),
                story: story.body.clone(),
            },
            Outcome::Tied { .. } => StoryView::Tied {
                message: TIED_MESSAGE,
            },
        }
    }

    fn missing(missing: &ContentMissing) -> Self {
        StoryView::ContentMissing {
            message: format!("Your story could not be shown because content is missing. {}", missing),
        }
    }
}

/// Document contents for a downloadable outcome. Only pure outcomes carry
/// enrichment, so blended and tied outcomes have nothing to export.
pub struct Downloadable {
    pub title: String,
    pub body: String,
    pub enrichment: String,
}

impl Downloadable {
    pub fn from_outcome(outcome: &Outcome<'_>) -> Option<Self> {
        match outcome {
            Outcome::Pure { story, enrichment, .. } => Some(Self {
                title: story.title.clone(),
                body: story.body.clone(),
                enrichment: enrichment.text(),
            }),
            _ => None,
        }
    }

    pub fn document(&self) -> StoryDocument<'_> {
        StoryDocument {
            title: &self.title,
            body: &self.body,
            enrichment: &self.enrichment,
        }
    }
}
