//! Derived statistics models.

use serde::{Deserialize, Serialize};

use super::Race;

/// Medal count for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalStanding {
    pub player: String,

    /// Most played race across both sides; `None` if no recognized race was seen
    pub race: Option<Race>,

    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalStanding {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            race: None,
            gold: 0,
            silver: 0,
            bronze: 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// Win rate of a player over the matches they played as side 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerWinRate {
    pub player: String,

    /// Race of the first side-1 match seen for this player
    pub race: Race,

    pub wins: u32,
    pub losses: u32,
    pub total_matches: u32,

    /// Percentage in 0.0..=100.0, unrounded
    pub win_rate: f64,
}

/// Win rate of one player in one ordered race matchup, e.g. `"zvt"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupWinRate {
    pub matchup: String,
    pub wins: u32,
    pub total_matches: u32,
    pub win_rate: f64,
}

/// Number of players whose main race is `race`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceShare {
    pub race: Race,
    pub players: u32,
}

/// Number of matches played in one unordered race matchup, e.g. `"pvz"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupCount {
    pub matchup: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_total() {
        let mut standing = MedalStanding::new("Alice");
        standing.gold = 2;
        standing.silver = 1;
        standing.bronze = 3;
        assert_eq!(standing.total(), 6);
    }

    #[test]
    fn test_medal_standing_serialization() {
        let mut standing = MedalStanding::new("Alice");
        standing.race = Some(Race::Protoss);
        let json = serde_json::to_value(&standing).unwrap();
        assert_eq!(json["player"], "Alice");
        assert_eq!(json["race"], "p");
        assert_eq!(json["gold"], 0);
    }
}
