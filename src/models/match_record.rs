//! Match model — one recorded series between two players.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Race;

/// Group label used for the playoff bracket.
pub const PLAYOFFS_GROUP: &str = "playoffs";

/// Stage and match number identifying the grand final.
pub const GRAND_FINAL_STAGE: &str = "R03";
pub const GRAND_FINAL_MATCH_NUMBER: &str = "1";

/// The bronze match uses the same label for stage and match number.
pub const BRONZE_MATCH_LABEL: &str = "3rd Place Match";

/// Outcome of a match from the point of view of side 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    /// Interpret the `Winner` column: `"1"` means side 1 won.
    pub fn from_winner_flag(flag: &str) -> Self {
        if flag == "1" {
            MatchResult::Win
        } else {
            MatchResult::Loss
        }
    }

    /// The result seen from the other side.
    pub fn complement(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Loss => MatchResult::Win,
        }
    }
}

/// A single match between two players.
///
/// `player` and `opponent` are side 1 and side 2 of the bracket, not
/// winner and loser; `result` is relative to `player`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Tournament label (the `LMSL` column)
    pub tournament: String,

    /// Side 1 player name
    pub player: String,

    /// Side 1 race
    pub race: Race,

    /// Side 2 player name
    pub opponent: String,

    /// Side 2 race
    pub opponent_race: Race,

    /// Result for side 1
    pub result: MatchResult,

    /// Bracket or phase, e.g. "playoffs"
    pub group: String,

    /// Round within the group, e.g. "R03"
    pub group_stage: String,

    /// Match identifier within the stage; not always numeric
    pub match_number: String,

    pub player1_score: Option<u32>,
    pub player2_score: Option<u32>,

    /// Only set when the source carries a `Date` column. Never used for ordering.
    pub date: Option<NaiveDate>,
}

impl Match {
    /// Create a match with empty bracket labels and no scores.
    pub fn new(
        tournament: impl Into<String>,
        player: impl Into<String>,
        race: Race,
        opponent: impl Into<String>,
        opponent_race: Race,
        result: MatchResult,
    ) -> Self {
        Self {
            tournament: tournament.into(),
            player: player.into(),
            race,
            opponent: opponent.into(),
            opponent_race,
            result,
            group: String::new(),
            group_stage: String::new(),
            match_number: String::new(),
            player1_score: None,
            player2_score: None,
            date: None,
        }
    }

    /// Set the bracket position of this match.
    pub fn with_stage(
        mut self,
        group: impl Into<String>,
        group_stage: impl Into<String>,
        match_number: impl Into<String>,
    ) -> Self {
        self.group = group.into();
        self.group_stage = group_stage.into();
        self.match_number = match_number.into();
        self
    }

    pub fn opponent_result(&self) -> MatchResult {
        self.result.complement()
    }

    pub fn winner(&self) -> &str {
        match self.result {
            MatchResult::Win => &self.player,
            MatchResult::Loss => &self.opponent,
        }
    }

    pub fn loser(&self) -> &str {
        match self.result {
            MatchResult::Win => &self.opponent,
            MatchResult::Loss => &self.player,
        }
    }

    pub fn is_grand_final(&self) -> bool {
        self.group == PLAYOFFS_GROUP
            && self.group_stage == GRAND_FINAL_STAGE
            && self.match_number == GRAND_FINAL_MATCH_NUMBER
    }

    pub fn is_bronze_match(&self) -> bool {
        self.group == PLAYOFFS_GROUP
            && self.group_stage == BRONZE_MATCH_LABEL
            && self.match_number == BRONZE_MATCH_LABEL
    }
}
