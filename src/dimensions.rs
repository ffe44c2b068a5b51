//! Distinct values for filter menus.
//!
//! Player and race values come from side 1 only, matching the filter engine:
//! a value offered in a menu always selects at least one match.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Match;

/// A filterable field of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Tournament,
    Player,
    Race,
}

impl Dimension {
    fn value_of<'m>(&self, m: &'m Match) -> &'m str {
        match self {
            Dimension::Tournament => &m.tournament,
            Dimension::Player => &m.player,
            Dimension::Race => m.race.code(),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tournament" | "tournaments" => Ok(Dimension::Tournament),
            "player" | "players" => Ok(Dimension::Player),
            "race" | "races" => Ok(Dimension::Race),
            other => Err(format!("Unknown dimension: {}", other)),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Tournament => write!(f, "tournament"),
            Dimension::Player => write!(f, "player"),
            Dimension::Race => write!(f, "race"),
        }
    }
}

/// Distinct values of `dimension`, in first-seen order.
///
/// Callers that need a stable menu order should sort the result.
pub fn distinct_values(matches: &[Match], dimension: Dimension) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    matches
        .iter()
        .map(|m| dimension.value_of(m))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Sorted menu values for every dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub tournaments: Vec<String>,
    pub players: Vec<String>,
    pub races: Vec<String>,
}

impl FilterOptions {
    pub fn from_matches(matches: &[Match]) -> Self {
        let sorted = |dimension| {
            let mut values = distinct_values(matches, dimension);
            values.sort();
            values
        };

        Self {
            tournaments: sorted(Dimension::Tournament),
            players: sorted(Dimension::Player),
            races: sorted(Dimension::Race),
        }
    }

    pub fn values(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Tournament => &self.tournaments,
            Dimension::Player => &self.players,
            Dimension::Race => &self.races,
        }
    }
}
