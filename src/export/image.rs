//! Best-effort logo download for exported documents.

use bytes::Bytes;
use ::image::{GenericImageView, ImageFormat};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to download logo image: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Failed to download logo image: HTTP {0}")]
    Status(u16),
    #[error("Logo image could not be decoded: {0}")]
    Decode(String),
    #[error("Logo image format is not supported in documents")]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
        }
    }
}

/// Image bytes plus what the document needs to lay them out.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub bytes: Bytes,
    pub kind: ImageKind,
    pub width_px: u32,
    pub height_px: u32,
}

impl EmbeddedImage {
    pub fn decode(bytes: Bytes) -> Result<Self, ImageError> {
        let kind = match ::image::guess_format(&bytes).map_err(|e| ImageError::Decode(e.to_string()))? {
            ImageFormat::Png => ImageKind::Png,
            ImageFormat::Jpeg => ImageKind::Jpeg,
            _ => return Err(ImageError::Unsupported),
        };
        let (width_px, height_px) = ::image::load_from_memory(&bytes)
            .map_err(|e| ImageError::Decode(e.to_string()))?
            .dimensions();
        if width_px == 0 || height_px == 0 {
            return Err(ImageError::Decode("image has no pixels".to_string()));
        }

        Ok(Self {
            bytes,
            kind,
            width_px,
            height_px,
        })
    }
}

pub struct LogoFetcher {
    client: Client,
    url: Option<String>,
}

impl LogoFetcher {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ImageError> {
        let client = Client::builder().timeout(timeout).build()?;
        let url = Some(url.trim().to_string()).filter(|u| !u.is_empty());
        Ok(Self { client, url })
    }

    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            url: None,
        }
    }

    /// `Ok(None)` when no logo is configured.
    pub async fn fetch(&self) -> Result<Option<EmbeddedImage>, ImageError> {
        let Some(url) = &self.url else {
            return Ok(None);
        };

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        EmbeddedImage::decode(bytes).map(Some)
    }
}
