use super::archetype::Archetype;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Point contributions of one answer option. Archetypes left out count as zero.
pub type Deltas = BTreeMap<Archetype, i32>;

/// Per-archetype scores for one evaluation of a session's answers.
///
/// Always holds exactly the four archetypes; there is no way to insert
/// any other key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    scores: [i32; 4],
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from explicit values; archetypes not listed stay at zero.
    pub fn with_scores(values: impl IntoIterator<Item = (Archetype, i32)>) -> Self {
        let mut state = Self::new();
        for (archetype, score) in values {
            state.scores[archetype.index()] = score;
        }
        state
    }

    pub fn get(&self, archetype: Archetype) -> i32 {
        self.scores[archetype.index()]
    }

    /// Adds every delta of one option onto the matching archetype.
    pub fn apply(&mut self, deltas: &Deltas) {
        for (archetype, delta) in deltas {
            let slot = &mut self.scores[archetype.index()];
            *slot = slot.saturating_add(*delta);
        }
    }

    /// Scores in canonical archetype order.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, i32)> + '_ {
        Archetype::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    pub fn max(&self) -> i32 {
        self.scores.iter().copied().max().unwrap_or_default()
    }

    /// Archetypes sharing the maximum score, in canonical order.
    pub fn winners(&self) -> Vec<Archetype> {
        let max = self.max();
        self.iter()
            .filter(|(_, score)| *score == max)
            .map(|(archetype, _)| archetype)
            .collect()
    }
}

impl Serialize for ScoreState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Archetype::ALL.len()))?;
        for (archetype, score) in self.iter() {
            map.serialize_entry(archetype.as_str(), &score)?;
        }
        map.end()
    }
}
