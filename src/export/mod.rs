//! Story download as a `.docx` document.

pub mod docx;
pub mod image;

pub use self::docx::DocxBuilder;
pub use self::image::{EmbeddedImage, ImageError, ImageKind, LogoFetcher};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub const FILE_NAME: &str = "winter_narrative.docx";
pub const MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const ENRICHMENT_HEADING: &str = "Enriching Your Winter Experience";
pub const DOWNLOAD_LABEL: &str = "Download Your Winter Narrative as DOCX";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write document: {0}")]
    Write(#[from] zip::result::ZipError),
}

#[derive(Debug, Clone, Copy)]
pub struct StoryDocument<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub enrichment: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    /// Non-fatal problems, e.g. the logo could not be fetched.
    pub warnings: Vec<String>,
}

/// Renders `doc`. Logo problems are reported in `warnings`, never as errors.
pub async fn export_story(
    logo: &LogoFetcher,
    logo_width_inches: f32,
    doc: StoryDocument<'_>,
) -> Result<ExportedDocument, ExportError> {
    let mut builder = DocxBuilder::new();
    let mut warnings = Vec::new();

    match logo.fetch().await {
        Ok(Some(image)) => {
            builder.add_picture(image, logo_width_inches).add_paragraph("");
        }
        Ok(None) => {}
        Err(e) => {
            warn!(error = %e, "exporting story without logo");
            warnings.push(e.to_string());
        }
    }

    builder
        .add_heading(doc.title, 1)
        .add_paragraph(doc.body)
        .add_heading(ENRICHMENT_HEADING, 2)
        .add_paragraph(doc.enrichment);

    Ok(ExportedDocument {
        file_name: FILE_NAME,
        mime_type: MIME_TYPE,
        bytes: builder.finish()?,
        warnings,
    })
}
