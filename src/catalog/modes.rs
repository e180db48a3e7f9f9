use super::{from_json, ordered_entries, CatalogError};
use serde::{Deserialize, Serialize};

pub(crate) const CATALOG: &str = "modes";

/// Dropdown entry that stands for "nothing selected yet".
pub const PLACEHOLDER: &str = "Select";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModeEntry {
    pub name: String,
    pub explanation: String,
}

impl ModeEntry {
    /// Image file name derived from the lowercased mode name.
    pub fn image_file_name(&self) -> String {
        format!("{}.jpg", self.name.to_lowercase())
    }
}

#[derive(Deserialize)]
struct RawMode {
    #[serde(rename = "Explanation")]
    explanation: String,
}

#[derive(Debug, Clone, Default)]
pub struct ModeCatalog {
    modes: Vec<ModeEntry>,
}

impl ModeCatalog {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let object: serde_json::Map<String, serde_json::Value> = from_json(CATALOG, json)?;
        let modes = ordered_entries::<RawMode>(CATALOG, object)?
            .into_iter()
            .map(|(name, raw)| ModeEntry {
                name,
                explanation: raw.explanation,
            })
            .collect::<Vec<_>>();

        if modes.iter().any(|m| m.name == PLACEHOLDER) {
            return Err(CatalogError::invalid(
                CATALOG,
                format!("`{PLACEHOLDER}` is reserved for the empty selection"),
            ));
        }

        Ok(Self { modes })
    }

    pub fn get(&self, name: &str) -> Option<&ModeEntry> {
        self.modes.iter().find(|m| m.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
