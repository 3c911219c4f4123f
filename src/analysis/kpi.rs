//! Leg quality metrics (KPIs).
//!
//! Summarizes how well a generated leg balances roles.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turns | Distinct turn values |
//! | Total Breaks | Same role in two consecutive turns, summed over participants |
//! | Unbalanced | Participants outside the home/guest window |
//! | Longest Home Run | Longest streak of home appearances of any participant |
//! | Longest Guest Run | Longest streak of guest appearances of any participant |
//!
//! # Reference
//! de Werra (1981), "Scheduling in Sports"

use std::collections::{BTreeSet, HashMap};

use super::MatchesAnalyzer;
use crate::models::{Pairing, Participant};

/// Quality indicators for one leg.
///
/// Break counts use turn values as given, so a leg reordered by the
/// optimizer must be renumbered first.
#[derive(Debug, Clone)]
pub struct LegKpi<P: Participant> {
    /// Number of distinct turns.
    pub turn_count: usize,
    /// Number of matches.
    pub match_count: usize,
    /// Sum of breaks across all participants.
    pub total_breaks: usize,
    /// Breaks per participant.
    pub breaks_by_participant: HashMap<P, usize>,
    /// Participants outside the home/guest window, in first appearance order.
    pub unbalanced: Vec<P>,
    /// Longest home streak of any participant.
    pub longest_home_run: usize,
    /// Longest guest streak of any participant.
    pub longest_guest_run: usize,
}

impl<P: Participant> LegKpi<P> {
    /// Computes KPIs from a leg.
    pub fn calculate(matches: &[Pairing<P>]) -> Self {
        let turn_count = matches.iter().map(|m| m.turn).collect::<BTreeSet<_>>().len();
        let breaks_by_participant = MatchesAnalyzer::breaks_by_participant(matches);
        let total_breaks = breaks_by_participant.values().sum();
        let unbalanced = MatchesAnalyzer::unbalanced_home_guest_count(matches)
            .into_iter()
            .map(|(p, _)| p)
            .collect();

        let mut longest_home_run = 0;
        let mut longest_guest_run = 0;
        for p in MatchesAnalyzer::participants(matches) {
            let runs = MatchesAnalyzer::max_consecutive_home_guest_count(&p, matches);
            longest_home_run = longest_home_run.max(runs.home);
            longest_guest_run = longest_guest_run.max(runs.guest);
        }

        Self {
            turn_count,
            match_count: matches.len(),
            total_breaks,
            breaks_by_participant,
            unbalanced,
            longest_home_run,
            longest_guest_run,
        }
    }

    /// Whether the leg is balanced and has at most `max_breaks` breaks.
    pub fn meets_thresholds(&self, max_breaks: usize) -> bool {
        self.unbalanced.is_empty() && self.total_breaks <= max_breaks
    }

    /// Minimum number of breaks any leg with `participant_count`
    /// participants can have: `N - 2` for even `N`, 0 for odd `N`.
    pub fn minimum_breaks(participant_count: usize) -> usize {
        if participant_count % 2 == 0 {
            participant_count.saturating_sub(2)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(turn: usize, home: i64, guest: i64) -> Pairing<i64> {
        Pairing::new(turn, home, guest)
    }

    #[test]
    fn test_kpi_basic() {
        let matches = vec![
            p(0, 1, 2),
            p(0, 3, 4),
            p(1, 1, 3),
            p(1, 4, 2),
            p(2, 4, 1),
            p(2, 2, 3),
        ];
        let kpi = LegKpi::calculate(&matches);
        assert_eq!(kpi.turn_count, 3);
        assert_eq!(kpi.match_count, 6);
        assert_eq!(kpi.total_breaks, 4);
        assert!(kpi.unbalanced.is_empty());
        assert_eq!(kpi.longest_home_run, 2);
        assert_eq!(kpi.longest_guest_run, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi: LegKpi<i64> = LegKpi::calculate(&[]);
        assert_eq!(kpi.turn_count, 0);
        assert_eq!(kpi.total_breaks, 0);
        assert!(kpi.meets_thresholds(0));
    }

    #[test]
    fn test_meets_thresholds() {
        let matches = vec![p(0, 1, 2), p(1, 1, 3), p(2, 2, 3)];
        let kpi = LegKpi::calculate(&matches);
        // 1 is home twice, 3 guest twice → unbalanced for N = 3.
        assert!(!kpi.meets_thresholds(10));
    }

    #[test]
    fn test_minimum_breaks() {
        assert_eq!(LegKpi::<i64>::minimum_breaks(2), 0);
        assert_eq!(LegKpi::<i64>::minimum_breaks(5), 0);
        assert_eq!(LegKpi::<i64>::minimum_breaks(6), 4);
        assert_eq!(LegKpi::<i64>::minimum_breaks(14), 12);
    }
}
