use super::{from_json, CatalogError};
use crate::scoring::{Archetype, BlendKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub(crate) const CATALOG: &str = "stories";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    #[serde(rename = "story")]
    pub body: String,
}

#[derive(Deserialize)]
struct StoryFile {
    stories: RawStories,
}

#[derive(Deserialize)]
struct RawStories {
    #[serde(default)]
    pure: BTreeMap<Archetype, Story>,
    #[serde(default)]
    blended: BTreeMap<String, Story>,
}

/// Pure stories keyed by archetype, blended stories keyed by pair.
///
/// Blended keys are normalised to canonical order on load, so a catalog
/// written as `"Visionary_Leader"` is still found for the pair
/// {Leader, Visionary}.
#[derive(Debug, Clone, Default)]
pub struct StoryBank {
    pure: BTreeMap<Archetype, Story>,
    blended: BTreeMap<BlendKey, Story>,
}

impl StoryBank {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let file: StoryFile = from_json(CATALOG, json)?;
        let mut blended = BTreeMap::new();

        for (raw_key, story) in file.stories.blended {
            let key = BlendKey::parse(&raw_key)
                .map_err(|e| CatalogError::invalid(CATALOG, e.to_string()))?;
            if key.key() != raw_key {
                debug!(raw = %raw_key, canonical = %key, "normalised blended story key");
            }
            if blended.insert(key, story).is_some() {
                return Err(CatalogError::invalid(
                    CATALOG,
                    format!("more than one blended story for `{key}`"),
                ));
            }
        }

        Ok(Self {
            pure: file.stories.pure,
            blended,
        })
    }

    pub fn pure(&self, archetype: Archetype) -> Option<&Story> {
        self.pure.get(&archetype)
    }

    pub fn blended(&self, pair: BlendKey) -> Option<&Story> {
        self.blended.get(&pair)
    }

    pub fn len(&self) -> usize {
        self.pure.len() + self.blended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pure and blended keys with no story, in canonical order.
    pub fn missing_keys(&self) -> Vec<String> {
        let pure = Archetype::ALL
            .into_iter()
            .filter(|a| !self.pure.contains_key(a))
            .map(|a| a.to_string());
        let blended = BlendKey::all()
            .filter(|k| !self.blended.contains_key(k))
            .map(|k| k.key());
        pure.chain(blended).collect()
    }
}
