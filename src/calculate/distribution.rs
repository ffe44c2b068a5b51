//! Race and matchup distributions.

use std::collections::BTreeMap;

use crate::models::{Match, MatchupCount, RaceShare};

use super::{OrderedGroups, RaceTally};

/// Number of players per main race.
///
/// Every participant's races are tallied across both sides; their main race
/// is the most played one (ties go to the first seen). Players with no
/// recognized race are left out. Races appear in the order their first
/// player was seen.
pub fn race_distribution(matches: &[Match]) -> Vec<RaceShare> {
    let mut players: OrderedGroups<RaceTally> = OrderedGroups::new();
    for m in matches {
        players.entry(&m.player).record(&m.race);
        players.entry(&m.opponent).record(&m.opponent_race);
    }

    let mut shares: Vec<RaceShare> = Vec::new();
    for (_, tally) in players.into_entries() {
        let Some(race) = tally.main_race() else {
            continue;
        };
        match shares.iter_mut().find(|s| &s.race == race) {
            Some(share) => share.players += 1,
            None => shares.push(RaceShare {
                race: race.clone(),
                players: 1,
            }),
        }
    }

    shares
}

/// Matches per unordered matchup, keyed by the two race codes sorted and
/// joined with `v` (`"pvz"`, `"tvt"`). Matches with an unrecognized race on
/// either side are skipped. Output is sorted by key.
pub fn matchup_distribution(matches: &[Match]) -> Vec<MatchupCount> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for m in matches {
        if !m.race.is_recognized() || !m.opponent_race.is_recognized() {
            continue;
        }
        let (a, b) = (m.race.code(), m.opponent_race.code());
        let key = if a <= b {
            format!("{a}v{b}")
        } else {
            format!("{b}v{a}")
        };
        *counts.entry(key).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(matchup, count)| MatchupCount { matchup, count })
        .collect()
}
