//! View models for the four screens and the shared footer.
//!
//! Each `render` is a pure function of the catalogs, configuration and
//! session it is handed. The front-end only draws what it receives.

pub mod analysis;
pub mod footer;
pub mod introspection;
pub mod start;
pub mod story;

pub use analysis::{AnalysisView, ModePanel};
pub use footer::Footer;
pub use introspection::{IntrospectionView, QuestionView};
pub use start::StartView;
pub use story::StoryView;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

/// Navigation entries, in menu order.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Start,
    Introspection,
    YourStory,
    Analysis,
}

impl View {
    pub const ALL: [View; 4] = [View::Start, View::Introspection, View::YourStory, View::Analysis];

    pub fn label(&self) -> &'static str {
        match self {
            View::Start => "Start",
            View::Introspection => "Introspection",
            View::YourStory => "Your Story",
            View::Analysis => "Analysis",
        }
    }
}
