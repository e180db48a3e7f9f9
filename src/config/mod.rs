//! Application configuration (`winter.toml`) and feedback-store secrets.
//!
//! The TOML file only holds non-secret settings and every field has a
//! default. Credentials for the hosted feedback table come from the
//! environment, optionally seeded from a `.env` file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_VAR: &str = "WINTER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "winter.toml";

pub const API_KEY_VAR: &str = "AIRTABLE_API_KEY";
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";
pub const TABLE_NAME_VAR: &str = "AIRTABLE_TABLE_NAME";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Missing required environment variables: {0}")]
    MissingEnv(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub assets: AssetsConfig,
    pub feedback: FeedbackConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub questions: PathBuf,
    pub stories: PathBuf,
    pub enrichment: PathBuf,
    pub modes: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetsConfig {
    pub image_dir: PathBuf,
    pub hero_image_url: String,
    /// Logo placed at the top of exported documents. Empty disables it.
    pub logo_url: String,
    pub logo_width_inches: f32,
    pub logo_timeout_seconds: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FeedbackConfig {
    pub api_url: String,
    pub field: String,
    pub timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from("data/winter.json"),
            stories: PathBuf::from("data/stories.json"),
            enrichment: PathBuf::from("data/diverse_elements.json"),
            modes: PathBuf::from("data/antidote.json"),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("images"),
            hero_image_url: "https://www.bestofworlds.se/img/winter.webp".to_string(),
            logo_url: "https://bestofworlds.se/img/lglogo.png".to_string(),
            logo_width_inches: 2.0,
            logo_timeout_seconds: 10,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.airtable.com/v0".to_string(),
            field: "Feedback".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = match fs::read_to_string(path) {
            Ok(text) => {
                info!(path = %path.display(), "loaded configuration");
                Self::from_toml_str(&text)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Loads from `$WINTER_CONFIG` or `./winter.toml`.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load(&path)
    }

    fn rebase(&mut self, base: &Path) {
        for path in [
            &mut self.catalog.questions,
            &mut self.catalog.stories,
            &mut self.catalog.enrichment,
            &mut self.catalog.modes,
            &mut self.assets.image_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Credentials for the hosted feedback table.
#[derive(Clone, PartialEq, Eq)]
pub struct FeedbackCredentials {
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
}

impl fmt::Debug for FeedbackCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackCredentials")
            .field("api_key", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl FeedbackCredentials {
    /// Reads the process environment after applying any `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name).filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => {
                missing.push(name);
                String::new()
            }
        };

        let credentials = Self {
            api_key: read(API_KEY_VAR),
            base_id: read(BASE_ID_VAR),
            table_name: read(TABLE_NAME_VAR),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(ConfigError::MissingEnv(missing.join(", ")))
        }
    }
}
