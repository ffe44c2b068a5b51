//! Dashboard views.
//!
//! Each view is rebuilt from the full dataset and the current filter
//! selection whenever the selection changes. Views never mutate the dataset.

use serde::Serialize;

use crate::calculate::{
    matchup_distribution, medal_table, player_matchup_win_rates, player_win_rates,
    race_distribution, recent_results,
};
use crate::config::DashboardConfig;
use crate::dimensions::FilterOptions;
use crate::filter::MatchFilter;
use crate::models::{Match, MatchupCount, MatchupWinRate, PlayerWinRate, Race, RaceShare};

/// One row of the medal table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalRow {
    pub rank: usize,
    pub player: String,
    pub race: Option<Race>,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

/// League overview: medal table and recent results.
///
/// Always computed over the full dataset.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub total_matches: usize,
    pub medal_table: Vec<MedalRow>,
    pub recent_results: Vec<Match>,
}

impl OverviewView {
    pub fn build(matches: &[Match], dashboard: &DashboardConfig) -> Self {
        let medal_table = medal_table(matches, dashboard.medal_table_size)
            .into_iter()
            .enumerate()
            .map(|(i, standing)| MedalRow {
                rank: i + 1,
                total: standing.total(),
                player: standing.player,
                race: standing.race,
                gold: standing.gold,
                silver: standing.silver,
                bronze: standing.bronze,
            })
            .collect();

        Self {
            total_matches: matches.len(),
            medal_table,
            recent_results: recent_results(matches, dashboard.recent_results),
        }
    }
}

/// Tournament analytics: race and matchup distributions.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentsView {
    pub options: FilterOptions,
    pub filter: MatchFilter,
    pub match_count: usize,

    /// Main race per player, scoped by the tournament selection only
    pub race_distribution: Vec<RaceShare>,

    pub matchup_distribution: Vec<MatchupCount>,
}

impl TournamentsView {
    pub fn build(matches: &[Match], filter: &MatchFilter) -> Self {
        let filtered = filter.apply(matches);
        let by_tournament = filter.tournaments_only().apply(matches);

        Self {
            options: FilterOptions::from_matches(matches),
            filter: filter.clone(),
            match_count: filtered.len(),
            race_distribution: race_distribution(&by_tournament),
            matchup_distribution: matchup_distribution(&filtered),
        }
    }
}

/// Matchup breakdown for one player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerMatchups {
    pub player: String,
    pub matchups: Vec<MatchupWinRate>,
}

/// Player analytics: win rates and a single player's matchups.
#[derive(Debug, Clone, Serialize)]
pub struct PlayersView {
    pub options: FilterOptions,
    pub filter: MatchFilter,
    pub match_count: usize,
    pub player_stats: Vec<PlayerWinRate>,

    /// Only present when exactly one player is selected
    pub matchups: Option<PlayerMatchups>,
}

impl PlayersView {
    /// Build the view. The race selection is ignored: players are filtered by
    /// player and tournament only.
    pub fn build(matches: &[Match], filter: &MatchFilter) -> Self {
        let filter = MatchFilter {
            races: Default::default(),
            ..filter.clone()
        };
        let filtered = filter.apply(matches);

        let matchups = match filter.players.len() {
            1 => filter.players.iter().next().map(|player| PlayerMatchups {
                player: player.clone(),
                matchups: player_matchup_win_rates(&filtered, player),
            }),
            _ => None,
        };

        Self {
            options: FilterOptions::from_matches(matches),
            match_count: filtered.len(),
            player_stats: player_win_rates(&filtered),
            matchups,
            filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchResult;

    fn game(
        tournament: &str,
        player: &str,
        race: &str,
        opponent: &str,
        opponent_race: &str,
        won: bool,
    ) -> Match {
        let result = if won { MatchResult::Win } else { MatchResult::Loss };
        Match::new(
            tournament,
            player,
            Race::parse(race),
            opponent,
            Race::parse(opponent_race),
            result,
        )
    }

    fn dataset() -> Vec<Match> {
        vec![
            game("1", "Alice", "z", "Bob", "t", true).with_stage("A", "R01", "1"),
            game("1", "Bob", "t", "Carol", "p", false).with_stage("A", "R01", "2"),
            game("1", "Alice", "z", "Carol", "p", true).with_stage("playoffs", "R03", "1"),
            game("1", "Bob", "t", "Dave", "z", true).with_stage(
                "playoffs",
                "3rd Place Match",
                "3rd Place Match",
            ),
            game("2", "Carol", "p", "Alice", "z", true).with_stage("A", "R01", "1"),
            game("2", "Dave", "z", "Bob", "p", true).with_stage("A", "R01", "2"),
        ]
    }

    #[test]
    fn test_overview() {
        let view = OverviewView::build(&dataset(), &DashboardConfig::default());

        assert_eq!(view.total_matches, 6);
        assert_eq!(view.recent_results.len(), 5);

        let top = &view.medal_table[0];
        assert_eq!(top.rank, 1);
        assert_eq!(top.player, "Alice");
        assert_eq!(top.gold, 1);
        assert_eq!(top.total, 1);
        assert_eq!(top.race, Some(Race::Zerg));

        let carol = view.medal_table.iter().find(|r| r.player == "Carol").unwrap();
        assert_eq!(carol.silver, 1);
        let bob = view.medal_table.iter().find(|r| r.player == "Bob").unwrap();
        assert_eq!(bob.bronze, 1);
    }

    #[test]
    fn test_overview_respects_sizes() {
        let dashboard = DashboardConfig {
            medal_table_size: 2,
            recent_results: 1,
        };
        let view = OverviewView::build(&dataset(), &dashboard);
        assert_eq!(view.medal_table.len(), 2);
        assert_eq!(view.recent_results.len(), 1);
    }

    #[test]
    fn test_overview_empty_dataset() {
        let view = OverviewView::build(&[], &DashboardConfig::default());
        assert_eq!(view.total_matches, 0);
        assert!(view.medal_table.is_empty());
        assert!(view.recent_results.is_empty());
    }

    #[test]
    fn test_tournaments_view_race_distribution_ignores_player_filter() {
        let data = dataset();
        let filter = MatchFilter::new()
            .with_tournaments(["2"])
            .with_players(["Carol"]);
        let view = TournamentsView::build(&data, &filter);

        assert_eq!(view.match_count, 1);
        // Tournament 2 has four players regardless of the player selection
        let players: u32 = view.race_distribution.iter().map(|r| r.players).sum();
        assert_eq!(players, 4);
        assert_eq!(view.matchup_distribution.len(), 1);
        assert_eq!(view.matchup_distribution[0].matchup, "pvz");
        assert_eq!(view.options.tournaments, vec!["1", "2"]);
    }

    #[test]
    fn test_players_view_single_player_matchups() {
        let data = dataset();
        let filter = MatchFilter::new().with_players(["Alice"]).with_races(["p"]);
        let view = PlayersView::build(&data, &filter);

        // race selection ignored
        assert!(view.filter.races.is_empty());
        assert_eq!(view.match_count, 2);
        assert_eq!(view.player_stats.len(), 1);
        assert_eq!(view.player_stats[0].win_rate, 100.0);

        let matchups = view.matchups.unwrap();
        assert_eq!(matchups.player, "Alice");
        let keys: Vec<&str> = matchups.matchups.iter().map(|m| m.matchup.as_str()).collect();
        assert_eq!(keys, vec!["zvt", "zvp"]);
    }

    #[test]
    fn test_players_view_no_matchups_for_multiple_players() {
        let filter = MatchFilter::new().with_players(["Alice", "Bob"]);
        let view = PlayersView::build(&dataset(), &filter);
        assert!(view.matchups.is_none());
        assert_eq!(view.player_stats.len(), 2);
    }
}
