//! Race (faction) codes.

use serde::{Deserialize, Serialize};

/// One of the three StarCraft factions, or an unrecognized raw code.
///
/// Recognized codes are case-insensitive and normalized to lowercase.
/// Anything else is kept verbatim in [`Race::Unknown`] so it can still be
/// displayed, but race-keyed aggregations skip it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Race {
    Zerg,
    Terran,
    Protoss,
    Unknown(String),
}

impl Race {
    /// Parse a faction code such as `"z"` or `"T"`.
    pub fn parse(code: &str) -> Self {
        let trimmed = code.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "z" => Race::Zerg,
            "t" => Race::Terran,
            "p" => Race::Protoss,
            _ => Race::Unknown(trimmed.to_string()),
        }
    }

    /// Single-character code, or the raw text for unknown races.
    pub fn code(&self) -> &str {
        match self {
            Race::Zerg => "z",
            Race::Terran => "t",
            Race::Protoss => "p",
            Race::Unknown(raw) => raw,
        }
    }

    /// Full faction name for recognized races.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Race::Zerg => Some("zerg"),
            Race::Terran => Some("terran"),
            Race::Protoss => Some("protoss"),
            Race::Unknown(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Race::Unknown(_))
    }
}

impl From<String> for Race {
    fn from(s: String) -> Self {
        Race::parse(&s)
    }
}

impl From<Race> for String {
    fn from(race: Race) -> Self {
        race.code().to_string()
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
