//! Home/guest statistics over a match list.
//!
//! All functions are pure and read the matches in the order given, which
//! callers keep in play order (turn by turn).

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{Pairing, Participant};

/// Home and guest tallies for one participant.
///
/// Also used for run lengths, where `home` and `guest` are the longest
/// streaks of consecutive appearances in each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HomeGuestCount {
    /// Appearances (or longest run) as home participant.
    pub home: usize,
    /// Appearances (or longest run) as guest.
    pub guest: usize,
}

impl HomeGuestCount {
    /// Total appearances.
    #[inline]
    pub fn total(&self) -> usize {
        self.home + self.guest
    }

    /// Absolute difference between home and guest.
    #[inline]
    pub fn imbalance(&self) -> usize {
        self.home.abs_diff(self.guest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Home,
    Guest,
}

impl Role {
    fn of<P: PartialEq>(participant: &P, pairing: &Pairing<P>) -> Option<Role> {
        if pairing.home == *participant {
            Some(Role::Home)
        } else if pairing.guest == *participant {
            Some(Role::Guest)
        } else {
            None
        }
    }

    fn tracked(for_home: bool) -> Role {
        if for_home {
            Role::Home
        } else {
            Role::Guest
        }
    }

    fn opposite(self) -> Role {
        match self {
            Role::Home => Role::Guest,
            Role::Guest => Role::Home,
        }
    }
}

/// Stateless statistics used by the generators and the optimizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchesAnalyzer;

impl MatchesAnalyzer {
    /// Distinct participants in order of first appearance.
    pub fn participants<P: Participant>(matches: &[Pairing<P>]) -> Vec<P> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for m in matches {
            for p in [&m.home, &m.guest] {
                if seen.insert(p) {
                    out.push(p.clone());
                }
            }
        }
        out
    }

    /// Tallies home and guest appearances per participant.
    pub fn home_guest_count<P: Participant>(matches: &[Pairing<P>]) -> HashMap<P, HomeGuestCount> {
        let mut counts: HashMap<P, HomeGuestCount> = HashMap::new();
        for m in matches {
            counts.entry(m.home.clone()).or_default().home += 1;
            counts.entry(m.guest.clone()).or_default().guest += 1;
        }
        counts
    }

    /// Participants whose home or guest count falls outside
    /// `[floor((N-1)/2), ceil((N-1)/2)]`, with `N` the number of distinct
    /// participants. Returned in order of first appearance.
    pub fn unbalanced_home_guest_count<P: Participant>(
        matches: &[Pairing<P>],
    ) -> Vec<(P, HomeGuestCount)> {
        let participants = Self::participants(matches);
        let n = participants.len();
        if n == 0 {
            return Vec::new();
        }
        let low = (n - 1) / 2;
        let high = n / 2;
        let counts = Self::home_guest_count(matches);

        participants
            .into_iter()
            .filter_map(|p| {
                let c = counts.get(&p).copied().unwrap_or_default();
                let inside = |v: usize| (low..=high).contains(&v);
                if inside(c.home) && inside(c.guest) {
                    None
                } else {
                    Some((p, c))
                }
            })
            .collect()
    }

    /// Longest streak of consecutive appearances in the same role,
    /// computed separately for home and guest.
    pub fn max_consecutive_home_guest_count<P: Participant>(
        participant: &P,
        matches: &[Pairing<P>],
    ) -> HomeGuestCount {
        let mut best = HomeGuestCount::default();
        let mut home_run = 0;
        let mut guest_run = 0;

        for m in matches {
            match Role::of(participant, m) {
                Some(Role::Home) => {
                    home_run += 1;
                    guest_run = 0;
                    best.home = best.home.max(home_run);
                }
                Some(Role::Guest) => {
                    guest_run += 1;
                    home_run = 0;
                    best.guest = best.guest.max(guest_run);
                }
                None => {}
            }
        }

        best
    }

    /// Run lengths of `participant` in the tracked role, scanning the
    /// matches from last to first.
    ///
    /// # Algorithm
    /// At each outer position:
    /// - participant not in the tracked role → yield 0, step back one match;
    /// - otherwise keep stepping back, counting every appearance in the
    ///   tracked role, until the participant shows up in the opposite role
    ///   or the matches run out. Yield the count, then the outer scan
    ///   resumes after the stopping match (it is not revisited).
    ///
    /// The iterator is finite and cannot be restarted.
    ///
    /// # Example
    /// ```
    /// use rr_schedule::analysis::MatchesAnalyzer;
    /// use rr_schedule::models::Pairing;
    ///
    /// let matches = vec![
    ///     Pairing::new(0, 1, 2),
    ///     Pairing::new(1, 1, 3),
    ///     Pairing::new(2, 3, 1),
    ///     Pairing::new(3, 1, 4),
    ///     Pairing::new(4, 1, 2),
    ///     Pairing::new(5, 2, 3),
    /// ];
    /// let runs: Vec<usize> = MatchesAnalyzer::last_consecutive_counts(&1, true, &matches).collect();
    /// assert_eq!(runs, vec![0, 2, 2]);
    /// ```
    pub fn last_consecutive_counts<'a, P: Participant>(
        participant: &'a P,
        for_home: bool,
        matches: &'a [Pairing<P>],
    ) -> LastConsecutiveCounts<'a, P> {
        LastConsecutiveCounts {
            participant,
            tracked: Role::tracked(for_home),
            matches,
            cursor: matches.len().checked_sub(1),
        }
    }

    /// Number of breaks: a participant holding the same role in turn `t`
    /// and turn `t + 1`. Uses the turn values as given.
    pub fn break_count<P: Participant>(matches: &[Pairing<P>]) -> usize {
        Self::breaks_by_participant(matches).values().sum()
    }

    /// Breaks per participant (see [`MatchesAnalyzer::break_count`]).
    pub fn breaks_by_participant<P: Participant>(matches: &[Pairing<P>]) -> HashMap<P, usize> {
        let mut roles: HashMap<(&P, usize), Role> = HashMap::new();
        for m in matches {
            roles.insert((&m.home, m.turn), Role::Home);
            roles.insert((&m.guest, m.turn), Role::Guest);
        }

        let mut breaks: HashMap<P, usize> = HashMap::new();
        for (&(p, turn), role) in &roles {
            let entry = breaks.entry(p.clone()).or_insert(0);
            if roles.get(&(p, turn + 1)) == Some(role) {
                *entry += 1;
            }
        }
        breaks
    }
}

/// Iterator returned by [`MatchesAnalyzer::last_consecutive_counts`].
#[derive(Debug, Clone)]
pub struct LastConsecutiveCounts<'a, P> {
    participant: &'a P,
    tracked: Role,
    matches: &'a [Pairing<P>],
    /// Next index to examine; `None` once the scan passed the first match.
    cursor: Option<usize>,
}

impl<P: Participant> Iterator for LastConsecutiveCounts<'_, P> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let mut i = self.cursor?;

        if Role::of(self.participant, &self.matches[i]) != Some(self.tracked) {
            self.cursor = i.checked_sub(1);
            return Some(0);
        }

        let opposite = Some(self.tracked.opposite());
        let mut count = 0;
        loop {
            let role = Role::of(self.participant, &self.matches[i]);
            if role == opposite {
                break;
            }
            if role == Some(self.tracked) {
                count += 1;
            }
            match i.checked_sub(1) {
                Some(prev) => i = prev,
                None => {
                    self.cursor = None;
                    return Some(count);
                }
            }
        }

        // `i` is the opposite-role match; the outer step moves past it.
        self.cursor = i.checked_sub(1);
        Some(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(turn: usize, home: i64, guest: i64) -> Pairing<i64> {
        Pairing::new(turn, home, guest)
    }

    fn sample() -> Vec<Pairing<i64>> {
        vec![
            p(0, 1, 2),
            p(0, 3, 4),
            p(1, 1, 3),
            p(1, 4, 2),
            p(2, 4, 1),
            p(2, 2, 3),
        ]
    }

    #[test]
    fn test_participants_first_appearance_order() {
        assert_eq!(MatchesAnalyzer::participants(&sample()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_home_guest_count() {
        let counts = MatchesAnalyzer::home_guest_count(&sample());
        assert_eq!(counts[&1], HomeGuestCount { home: 2, guest: 1 });
        assert_eq!(counts[&2], HomeGuestCount { home: 1, guest: 2 });
        assert_eq!(counts[&3], HomeGuestCount { home: 1, guest: 2 });
        assert_eq!(counts[&4], HomeGuestCount { home: 2, guest: 1 });
        assert_eq!(counts[&1].total(), 3);
    }

    #[test]
    fn test_unbalanced_within_window() {
        // N = 4 → window [1, 2]; every participant fits.
        assert!(MatchesAnalyzer::unbalanced_home_guest_count(&sample()).is_empty());
    }

    #[test]
    fn test_unbalanced_detected() {
        // N = 3 → window [1, 1].
        let matches = vec![p(0, 1, 2), p(1, 1, 3), p(2, 2, 3)];
        let unbalanced = MatchesAnalyzer::unbalanced_home_guest_count(&matches);
        assert_eq!(
            unbalanced,
            vec![
                (1, HomeGuestCount { home: 2, guest: 0 }),
                (3, HomeGuestCount { home: 0, guest: 2 }),
            ]
        );
    }

    #[test]
    fn test_unbalanced_empty() {
        let none: Vec<Pairing<i64>> = Vec::new();
        assert!(MatchesAnalyzer::unbalanced_home_guest_count(&none).is_empty());
    }

    #[test]
    fn test_max_consecutive() {
        let matches = vec![
            p(0, 1, 2),
            p(1, 1, 3),
            p(2, 1, 4),
            p(3, 2, 1),
            p(4, 3, 1),
            p(5, 1, 5),
        ];
        let runs = MatchesAnalyzer::max_consecutive_home_guest_count(&1, &matches);
        assert_eq!(runs, HomeGuestCount { home: 3, guest: 2 });

        let runs = MatchesAnalyzer::max_consecutive_home_guest_count(&5, &matches);
        assert_eq!(runs, HomeGuestCount { home: 0, guest: 1 });
    }

    #[test]
    fn test_max_consecutive_ignores_other_matches() {
        // Matches without the participant do not interrupt a run.
        let matches = vec![p(0, 1, 2), p(1, 3, 4), p(2, 1, 3)];
        let runs = MatchesAnalyzer::max_consecutive_home_guest_count(&1, &matches);
        assert_eq!(runs.home, 2);
    }

    #[test]
    fn test_last_consecutive_counts_fixture() {
        let matches = vec![
            p(0, 1, 2),
            p(1, 1, 3),
            p(2, 3, 1),
            p(3, 1, 4),
            p(4, 1, 2),
            p(5, 2, 3),
        ];
        let home: Vec<usize> =
            MatchesAnalyzer::last_consecutive_counts(&1, true, &matches).collect();
        // idx5: not home → 0; idx4..3 home run of 2, stops at idx2 (guest)
        // which is skipped; idx1..0 run of 2 to the start.
        assert_eq!(home, vec![0, 2, 2]);

        let guest: Vec<usize> =
            MatchesAnalyzer::last_consecutive_counts(&1, false, &matches).collect();
        // idx5, idx4, idx3: not guest → 0 each; idx2 guest, stops at idx1
        // (home) which is skipped; idx0 home → 0.
        assert_eq!(guest, vec![0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_last_consecutive_counts_skips_unrelated_matches_inside_run() {
        let matches = vec![p(0, 1, 2), p(1, 3, 4), p(2, 1, 4)];
        let runs: Vec<usize> =
            MatchesAnalyzer::last_consecutive_counts(&1, true, &matches).collect();
        assert_eq!(runs, vec![2]);
    }

    #[test]
    fn test_last_consecutive_counts_absent_participant() {
        let matches = vec![p(0, 1, 2), p(1, 2, 1)];
        let runs: Vec<usize> =
            MatchesAnalyzer::last_consecutive_counts(&9, true, &matches).collect();
        assert_eq!(runs, vec![0, 0]);
    }

    #[test]
    fn test_last_consecutive_counts_empty() {
        let none: Vec<Pairing<i64>> = Vec::new();
        assert_eq!(
            MatchesAnalyzer::last_consecutive_counts(&1, true, &none).count(),
            0
        );
    }

    #[test]
    fn test_last_consecutive_counts_is_consumed() {
        let matches = sample();
        let mut it = MatchesAnalyzer::last_consecutive_counts(&1, true, &matches);
        let first: Vec<usize> = it.by_ref().collect();
        assert!(!first.is_empty());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_break_count() {
        // 1: H,H,G → 1 break; 2: G,G,H → 1; 3: H,G,G → 1; 4: G,H,H → 1
        assert_eq!(MatchesAnalyzer::break_count(&sample()), 4);
        let per = MatchesAnalyzer::breaks_by_participant(&sample());
        assert!(per.values().all(|&b| b == 1));
    }

    #[test]
    fn test_break_count_bye_interrupts() {
        // Participant 1 is home in turns 0 and 2 with a bye in turn 1.
        let matches = vec![p(0, 1, 2), p(1, 2, 3), p(2, 1, 3)];
        let per = MatchesAnalyzer::breaks_by_participant(&matches);
        assert_eq!(per[&1], 0);
    }
}
