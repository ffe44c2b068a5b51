//! Multi-select match filtering.
//!
//! A [`MatchFilter`] is an immutable selection value. Changing the selection
//! produces a new filter; applying it produces a new collection.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::models::{Match, Race};

/// Active filter selection. An empty set places no constraint on its dimension.
///
/// Players and races are matched against side 1 only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFilter {
    #[serde(default)]
    pub tournaments: BTreeSet<String>,

    #[serde(default)]
    pub players: BTreeSet<String>,

    /// Race codes; recognized codes are stored lowercase
    #[serde(default, deserialize_with = "deserialize_races")]
    pub races: BTreeSet<String>,
}

fn normalize_races<I, S>(races: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    races
        .into_iter()
        .map(|r| Race::parse(r.as_ref()).code().to_string())
        .collect()
}

fn deserialize_races<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let races = Vec::<String>::deserialize(deserializer)?;
    Ok(normalize_races(races))
}

impl MatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tournament selection.
    pub fn with_tournaments<I, S>(self, tournaments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tournaments: tournaments.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Replace the player selection.
    pub fn with_players<I, S>(self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Replace the race selection.
    pub fn with_races<I, S>(self, races: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            races: normalize_races(races),
            ..self
        }
    }

    /// The same selection with only the tournament constraint kept.
    pub fn tournaments_only(&self) -> Self {
        Self::new().with_tournaments(self.tournaments.iter().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty() && self.players.is_empty() && self.races.is_empty()
    }

    /// Whether `m` satisfies every non-empty constraint.
    pub fn matches(&self, m: &Match) -> bool {
        if !self.tournaments.is_empty() && !self.tournaments.contains(&m.tournament) {
            return false;
        }
        if !self.players.is_empty() && !self.players.contains(&m.player) {
            return false;
        }
        if !self.races.is_empty() && !self.races.contains(m.race.code()) {
            return false;
        }
        true
    }

    /// Matches satisfying the filter, in input order.
    pub fn apply(&self, matches: &[Match]) -> Vec<Match> {
        if self.is_empty() {
            return matches.to_vec();
        }
        let filtered: Vec<Match> = matches.iter().filter(|m| self.matches(m)).cloned().collect();
        debug!(
            "Filter kept {} of {} matches ({:?})",
            filtered.len(),
            matches.len(),
            self
        );
        filtered
    }
}
