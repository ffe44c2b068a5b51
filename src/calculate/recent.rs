//! Recent results.

use crate::models::Match;

/// Number of matches shown as recent results.
pub const RECENT_RESULTS_SIZE: usize = 5;

/// The first `limit` matches by descending match number.
///
/// Match numbers compare as text, so `"2"` sorts above `"10"`. Matches with
/// equal numbers keep their input order.
pub fn recent_results(matches: &[Match], limit: usize) -> Vec<Match> {
    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| b.match_number.cmp(&a.match_number));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::test_support::game;

    fn numbered(player: &str, number: &str) -> Match {
        game(player, "z", "B", "t", true).with_stage("A", "R01", number)
    }

    #[test]
    fn test_string_ordering() {
        let matches = vec![numbered("x", "10"), numbered("y", "2"), numbered("z", "1")];
        let recent = recent_results(&matches, RECENT_RESULTS_SIZE);
        let numbers: Vec<&str> = recent.iter().map(|m| m.match_number.as_str()).collect();
        assert_eq!(numbers, vec!["2", "10", "1"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let matches: Vec<_> = (0..8).map(|i| numbered("p", &i.to_string())).collect();
        let recent = recent_results(&matches, RECENT_RESULTS_SIZE);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].match_number, "7");
        assert_eq!(recent[4].match_number, "3");
    }

    #[test]
    fn test_labels_sort_as_text() {
        let matches = vec![numbered("a", "3rd Place Match"), numbered("b", "4")];
        let recent = recent_results(&matches, RECENT_RESULTS_SIZE);
        assert_eq!(recent[0].match_number, "4");
        assert_eq!(recent[1].match_number, "3rd Place Match");
    }

    #[test]
    fn test_equal_numbers_keep_input_order() {
        let matches = vec![numbered("first", "1"), numbered("second", "1")];
        let recent = recent_results(&matches, RECENT_RESULTS_SIZE);
        assert_eq!(recent[0].player, "first");
        assert_eq!(recent[1].player, "second");
    }

    #[test]
    fn test_does_not_reorder_input() {
        let matches = vec![numbered("x", "1"), numbered("y", "2")];
        let _ = recent_results(&matches, RECENT_RESULTS_SIZE);
        assert_eq!(matches[0].player, "x");
    }
}
