use super::{from_json, CatalogError};
use crate::scoring::Archetype;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub(crate) const CATALOG: &str = "enrichment";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub archetype: Archetype,
    pub perspectives: Vec<String>,
}

impl Enrichment {
    /// Perspectives joined by blank lines, as shown and exported.
    pub fn text(&self) -> String {
        self.perspectives.join("\n\n")
    }
}

#[derive(Deserialize)]
struct EnrichmentFile {
    diverse_elements: BTreeMap<Archetype, RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    additional_perspectives: Vec<RawPerspective>,
}

#[derive(Deserialize)]
struct RawPerspective {
    perspective: String,
}

#[derive(Debug, Clone, Default)]
pub struct EnrichmentBank {
    entries: BTreeMap<Archetype, Enrichment>,
}

impl EnrichmentBank {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let file: EnrichmentFile = from_json(CATALOG, json)?;
        let entries = file
            .diverse_elements
            .into_iter()
            .map(|(archetype, raw)| {
                let perspectives = raw
                    .additional_perspectives
                    .into_iter()
                    .map(|p| p.perspective)
                    .collect();
                (archetype, Enrichment { archetype, perspectives })
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn get(&self, archetype: Archetype) -> Option<&Enrichment> {
        self.entries.get(&archetype)
    }

    pub fn missing(&self) -> impl Iterator<Item = Archetype> + '_ {
        Archetype::ALL
            .into_iter()
            .filter(|a| !self.entries.contains_key(a))
    }
}
