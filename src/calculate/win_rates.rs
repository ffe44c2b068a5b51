//! Player and matchup win rates.
//!
//! Both aggregations only look at side 1: a player who only ever appears as
//! `opponent` has no row here.

use crate::models::{Match, MatchResult, MatchupWinRate, PlayerWinRate, Race};

use super::{calculate_win_rate, OrderedGroups};

struct Record {
    race: Race,
    wins: u32,
    losses: u32,
}

/// Win rate per side-1 player, in first-seen order.
pub fn player_win_rates(matches: &[Match]) -> Vec<PlayerWinRate> {
    let mut groups: OrderedGroups<Record> = OrderedGroups::new();

    for m in matches {
        let record = groups.entry_or_insert_with(&m.player, || Record {
            race: m.race.clone(),
            wins: 0,
            losses: 0,
        });
        match m.result {
            MatchResult::Win => record.wins += 1,
            MatchResult::Loss => record.losses += 1,
        }
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(player, record)| {
            let total = record.wins + record.losses;
            PlayerWinRate {
                player,
                race: record.race,
                wins: record.wins,
                losses: record.losses,
                total_matches: total,
                win_rate: calculate_win_rate(record.wins, total),
            }
        })
        .collect()
}

#[derive(Default)]
struct MatchupRecord {
    wins: u32,
    total: u32,
}

/// Win rate of `player` per ordered matchup (`"{race}v{opponent_race}"`),
/// over matches where they are side 1, in first-seen order.
pub fn player_matchup_win_rates(matches: &[Match], player: &str) -> Vec<MatchupWinRate> {
    let mut groups: OrderedGroups<MatchupRecord> = OrderedGroups::new();

    for m in matches.iter().filter(|m| m.player == player) {
        let key = format!("{}v{}", m.race.code(), m.opponent_race.code());
        let record = groups.entry(&key);
        record.total += 1;
        if m.result == MatchResult::Win {
            record.wins += 1;
        }
    }

    groups
        .into_entries()
        .into_iter()
        .map(|(matchup, record)| MatchupWinRate {
            matchup,
            wins: record.wins,
            total_matches: record.total,
            win_rate: calculate_win_rate(record.wins, record.total),
        })
        .collect()
}
