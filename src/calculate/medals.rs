//! Medal table from playoff finals.

use crate::models::{Match, MedalStanding};

use super::{OrderedGroups, RaceTally};

/// Number of players shown in the medal table.
pub const MEDAL_TABLE_SIZE: usize = 15;

#[derive(Default)]
struct Tally {
    races: RaceTally,
    gold: u32,
    silver: u32,
    bronze: u32,
}

/// Medal counts for every player appearing on either side of any match,
/// in first-seen order.
///
/// Grand final winners get gold and losers silver; bronze match winners get
/// bronze. Finals accumulate across the whole collection, so a dataset with
/// several tournaments counts each tournament's finals.
pub fn medal_tally(matches: &[Match]) -> Vec<MedalStanding> {
    let mut groups: OrderedGroups<Tally> = OrderedGroups::new();

    for m in matches {
        groups.entry(&m.player).races.record(&m.race);
        groups.entry(&m.opponent).races.record(&m.opponent_race);

        if m.is_grand_final() {
            groups.entry(m.winner()).gold += 1;
            groups.entry(m.loser()).silver += 1;
        }

        if m.is_bronze_match() {
            groups.entry(m.winner()).bronze += 1;
        }
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(player, tally)| MedalStanding {
            race: tally.races.main_race().cloned(),
            gold: tally.gold,
            silver: tally.silver,
            bronze: tally.bronze,
            ..MedalStanding::new(player)
        })
        .collect()
}

/// Top `limit` players ranked by gold, then silver, then bronze.
///
/// Ties keep first-seen order.
pub fn medal_table(matches: &[Match], limit: usize) -> Vec<MedalStanding> {
    let mut standings = medal_tally(matches);
    standings.sort_by(|a, b| (b.gold, b.silver, b.bronze).cmp(&(a.gold, a.silver, a.bronze)));
    standings.truncate(limit);
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::test_support::game;
    use crate::models::Race;

    fn find<'a>(standings: &'a [MedalStanding], player: &str) -> &'a MedalStanding {
        standings.iter().find(|s| s.player == player).unwrap()
    }

    #[test]
    fn test_grand_final_awards_gold_and_silver() {
        let matches = vec![game("A", "z", "B", "t", true).with_stage("playoffs", "R03", "1")];
        let table = medal_table(&matches, MEDAL_TABLE_SIZE);

        assert_eq!(find(&table, "A").gold, 1);
        assert_eq!(find(&table, "A").silver, 0);
        assert_eq!(find(&table, "B").silver, 1);
        assert_eq!(find(&table, "B").gold, 0);
    }

    #[test]
    fn test_grand_final_side_two_winner() {
        let matches = vec![game("A", "z", "B", "t", false).with_stage("playoffs", "R03", "1")];
        let table = medal_table(&matches, MEDAL_TABLE_SIZE);

        assert_eq!(find(&table, "B").gold, 1);
        assert_eq!(find(&table, "A").silver, 1);
    }

    #[test]
    fn test_bronze_match_awards_winner_only() {
        let matches = vec![game("A", "z", "B", "t", false).with_stage(
            "playoffs",
            "3rd Place Match",
            "3rd Place Match",
        )];
        let table = medal_table(&matches, MEDAL_TABLE_SIZE);

        assert_eq!(find(&table, "B").bronze, 1);
        assert_eq!(find(&table, "A").bronze, 0);
        assert_eq!(find(&table, "A").total(), 0);
    }

    #[test]
    fn test_ordinary_matches_award_nothing() {
        let matches = vec![
            game("A", "z", "B", "t", true).with_stage("playoffs", "R02", "1"),
            game("A", "z", "B", "t", true).with_stage("A", "R03", "1"),
        ];
        let tally = medal_tally(&matches);
        assert!(tally.iter().all(|s| s.total() == 0));
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_ranking_gold_then_silver_then_bronze() {
        let final_ = |p: &str, o: &str| {
            game(p, "z", o, "t", true).with_stage("playoffs", "R03", "1")
        };
        let bronze = |p: &str, o: &str| {
            game(p, "z", o, "t", true).with_stage("playoffs", "3rd Place Match", "3rd Place Match")
        };

        let matches = vec![
            bronze("E", "F"),
            final_("C", "D"),
            final_("A", "B"),
            final_("A", "C"),
            bronze("D", "F"),
            bronze("D", "F"),
        ];
        let table = medal_table(&matches, MEDAL_TABLE_SIZE);
        let order: Vec<&str> = table.iter().map(|s| s.player.as_str()).collect();

        // A: 2 gold; C: 1 gold 1 silver; B: 1 silver; D: 1 silver 2 bronze;
        // E: 1 bronze; F: nothing
        assert_eq!(order, vec!["A", "C", "D", "B", "E", "F"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let matches = vec![
            game("X", "z", "Y", "t", true),
            game("W", "p", "V", "z", true),
        ];
        let table = medal_table(&matches, MEDAL_TABLE_SIZE);
        let order: Vec<&str> = table.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(order, vec!["X", "Y", "W", "V"]);
    }

    #[test]
    fn test_table_truncated() {
        let matches: Vec<_> = (0..20)
            .map(|i| game(&format!("P{i}"), "z", &format!("Q{i}"), "t", true))
            .collect();
        assert_eq!(medal_table(&matches, MEDAL_TABLE_SIZE).len(), 15);
        assert_eq!(medal_table(&matches, 3).len(), 3);
    }

    #[test]
    fn test_main_race_counts_both_sides() {
        let matches = vec![
            game("A", "z", "B", "t", true),
            game("B", "p", "A", "t", true),
            game("C", "p", "A", "t", false),
        ];
        let tally = medal_tally(&matches);

        assert_eq!(find(&tally, "A").race, Some(Race::Terran));
        // B played t then p once each: first seen wins
        assert_eq!(find(&tally, "B").race, Some(Race::Terran));
        assert_eq!(find(&tally, "C").race, Some(Race::Protoss));
    }

    #[test]
    fn test_unknown_race_excluded_from_main_race() {
        let matches = vec![
            game("A", "x", "B", "t", true),
            game("A", "x", "B", "t", true),
        ];
        let tally = medal_tally(&matches);
        assert_eq!(find(&tally, "A").race, None);
        assert_eq!(find(&tally, "B").race, Some(Race::Terran));
    }

    #[test]
    fn test_finals_accumulate_across_tournaments() {
        let mut first = game("A", "z", "B", "t", true).with_stage("playoffs", "R03", "1");
        first.tournament = "1".to_string();
        let mut second = game("A", "z", "B", "t", true).with_stage("playoffs", "R03", "1");
        second.tournament = "2".to_string();

        let table = medal_table(&[first, second], MEDAL_TABLE_SIZE);
        assert_eq!(find(&table, "A").gold, 2);
        assert_eq!(find(&table, "B").silver, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(medal_table(&[], MEDAL_TABLE_SIZE).is_empty());
    }
}
