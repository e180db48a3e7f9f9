use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArchetypeError {
    #[error("Unknown archetype: {0}")]
    Unknown(String),
    #[error("Malformed blended key `{0}`, expected two archetypes joined by `_`")]
    MalformedPair(String),
    #[error("Blended key `{0}` names the same archetype twice")]
    RepeatedArchetype(String),
}

/// The four fixed narrative archetypes.
///
/// Declaration order is the canonical order. `Ord` follows it, and
/// blended story keys are always built from it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Archetype {
    Leader,
    Fighter,
    Visionary,
    Lover,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Leader,
        Archetype::Fighter,
        Archetype::Visionary,
        Archetype::Lover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Leader => "Leader",
            Archetype::Fighter => "Fighter",
            Archetype::Visionary => "Visionary",
            Archetype::Lover => "Lover",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = ArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ArchetypeError::Unknown(s.to_string()))
    }
}

/// Unordered pair of two distinct archetypes, stored in canonical order.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlendKey {
    first: Archetype,
    second: Archetype,
}

impl BlendKey {
    /// Returns `None` when both sides are the same archetype.
    pub fn new(a: Archetype, b: Archetype) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Parses `"A_B"` in either order.
    pub fn parse(key: &str) -> Result<Self, ArchetypeError> {
        let (a, b) = key
            .split_once('_')
            .ok_or_else(|| ArchetypeError::MalformedPair(key.to_string()))?;
        let a: Archetype = a.parse()?;
        let b: Archetype = b.parse()?;
        Self::new(a, b).ok_or_else(|| ArchetypeError::RepeatedArchetype(key.to_string()))
    }

    pub fn first(&self) -> Archetype {
        self.first
    }

    pub fn second(&self) -> Archetype {
        self.second
    }

    /// The story bank key, e.g. `"Leader_Visionary"`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.first, self.second)
    }

    /// All six pairs, in canonical order.
    pub fn all() -> impl Iterator<Item = BlendKey> {
        Archetype::ALL.into_iter().enumerate().flat_map(|(i, a)| {
            Archetype::ALL[i + 1..]
                .iter()
                .map(move |&b| BlendKey { first: a, second: b })
        })
    }
}

impl fmt::Display for BlendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.first, self.second)
    }
}
