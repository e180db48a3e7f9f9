use super::ViewError;
use crate::catalog::modes::PLACEHOLDER;
use crate::catalog::ModeCatalog;
use crate::config::AssetsConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const TITLE: &str = "Diverse Winter Narratives";
pub const INTRO: &str = "Winter isn't just a season we experience\u{2014}it's a story we all tell in different ways. The way we appreciate winter reflects deeper aspects of who we are, shaped by the values and ideas within our communities. To explore this, we\u{2019}ve identified 10 unique themes\u{2014}key perspectives on winter that appear again and again in books and films. These themes aren\u{2019}t the only possible ones, nor are they always separate. They often blend together, adding richness and complexity to how we understand winter. By looking at these different lenses, we can better appreciate the beauty of our diverse experiences and how they shape our shared story of winter.";
pub const COMPARE_PROMPT: &str = "Select a theme from each dropdown menu. What happens when these two perspectives come together? Do they clash, or do they complement each other? Discover how different ways of seeing winter can highlight the tensions and harmonies in our shared experience.";
pub const PLACEHOLDER_CAPTION: &str = "Please select a mode";
pub const NEUTRAL_IMAGE: &str = "neutral.jpg";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShareForm {
    pub heading: &'static str,
    pub prompt: &'static str,
    pub label: &'static str,
    pub agreement: &'static str,
    pub button: &'static str,
}

const SHARE_FORM: ShareForm = ShareForm {
    heading: "Share Your Thoughts",
    prompt: "Do you have further thoughts on winter? Please share!",
    label: "Share your reflections:",
    agreement: "By clicking 'Share,' you agree to the terms outlined in the disclaimers, including the use of your input for research and improvement purposes.",
    button: "Share",
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub title: &'static str,
    pub intro: &'static str,
    /// Dropdown entries; the first one is the placeholder.
    pub modes: Vec<String>,
    pub first_label: &'static str,
    pub second_label: &'static str,
    pub compare_prompt: &'static str,
    pub share: ShareForm,
    pub feedback_draft: String,
}

impl AnalysisView {
    pub fn render(modes: &ModeCatalog, feedback_draft: &str) -> Self {
        Self {
            title: TITLE,
            intro: INTRO,
            modes: std::iter::once(PLACEHOLDER)
                .chain(modes.names())
                .map(str::to_string)
                .collect(),
            first_label: "Select a mode",
            second_label: "Select another mode",
            compare_prompt: COMPARE_PROMPT,
            share: SHARE_FORM,
            feedback_draft: feedback_draft.to_string(),
        }
    }
}

/// One side of the side-by-side comparison.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModePanel {
    pub mode: Option<String>,
    /// Present only when the file exists on disk.
    pub image: Option<PathBuf>,
    /// The same image as a `data:` URL the webview can display directly.
    pub image_src: Option<String>,
    pub caption: String,
    pub explanation: Option<String>,
}

impl ModePanel {
    pub fn render(modes: &ModeCatalog, assets: &AssetsConfig, selection: &str) -> Result<Self, ViewError> {
        if selection == PLACEHOLDER {
            let (image, image_src) = load_image(&assets.image_dir, NEUTRAL_IMAGE);
            return Ok(Self {
                mode: None,
                image,
                image_src,
                caption: PLACEHOLDER_CAPTION.to_string(),
                explanation: None,
            });
        }

        let mode = modes
            .get(selection)
            .ok_or_else(|| ViewError::UnknownMode(selection.to_string()))?;
        let (image, image_src) = load_image(&assets.image_dir, &mode.image_file_name());
        Ok(Self {
            mode: Some(mode.name.clone()),
            image,
            image_src,
            caption: mode.name.clone(),
            explanation: Some(mode.explanation.clone()),
        })
    }
}

/// An unreadable image is treated like a missing one.
fn load_image(dir: &Path, file_name: &str) -> (Option<PathBuf>, Option<String>) {
    let path = dir.join(file_name);
    if !path.is_file() {
        return (None, None);
    }
    match fs::read(&path) {
        Ok(bytes) => {
            let src = format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes));
            (Some(path), Some(src))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "mode image could not be read");
            (None, None)
        }
    }
}
