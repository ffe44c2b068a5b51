//! Statistics calculation engine.
//!
//! Computes derived metrics from a match collection:
//! - Medal table from playoff finals
//! - Recent results
//! - Player and per-matchup win rates
//! - Race and matchup distributions
//!
//! Every function is pure and deterministic for a given input order.

mod distribution;
mod medals;
mod recent;
mod win_rates;

pub use distribution::{matchup_distribution, race_distribution};
pub use medals::{medal_table, medal_tally, MEDAL_TABLE_SIZE};
pub use recent::{recent_results, RECENT_RESULTS_SIZE};
pub use win_rates::{player_matchup_win_rates, player_win_rates};

use std::collections::HashMap;

use crate::models::Race;

/// Calculate a win rate as a percentage. Returns 0.0 when no games were played.
pub fn calculate_win_rate(wins: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        (wins as f64 / total as f64) * 100.0
    }
}

/// Running per-player race counts, kept in first-seen order.
///
/// Unrecognized race codes are not counted.
#[derive(Debug, Clone, Default)]
pub struct RaceTally {
    counts: Vec<(Race, u32)>,
}

impl RaceTally {
    pub fn record(&mut self, race: &Race) {
        if !race.is_recognized() {
            return;
        }
        match self.counts.iter_mut().find(|(r, _)| r == race) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((race.clone(), 1)),
        }
    }

    /// Most frequent race; ties go to the race recorded first.
    pub fn main_race(&self) -> Option<&Race> {
        let mut best: Option<&(Race, u32)> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(race, _)| race)
    }
}

/// Groups keyed by string that remember the order keys were first seen.
#[derive(Debug)]
pub(crate) struct OrderedGroups<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> OrderedGroups<V> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn entry_or_insert_with(&mut self, key: &str, init: impl FnOnce() -> V) -> &mut V {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push((key.to_string(), init()));
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub(crate) fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V: Default> OrderedGroups<V> {
    pub(crate) fn entry(&mut self, key: &str) -> &mut V {
        self.entry_or_insert_with(key, V::default)
    }
}
