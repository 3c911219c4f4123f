//! Round-robin pairing generators.
//!
//! Two systems produce a single leg of pairings:
//!
//! - **`RoundRobinSystem`**: circle method, any participant count.
//! - **`IdealRoundRobinSystem`**: fixed minimal-break tables for 5 to 14
//!   participants.
//!
//! Both read the participants by position; see
//! [`Participant`](crate::models::Participant) for the ordering contract.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"

mod ideal;
mod ideal_tables;
mod round_robin;

pub use ideal::IdealRoundRobinSystem;
pub use round_robin::RoundRobinSystem;

use crate::error::ScheduleError;
use crate::models::{Pairing, Participant};

/// A generator of one round-robin leg.
///
/// Pairings carry 0-based turns. Every unordered pair of distinct
/// participants appears exactly once.
pub trait PairingGenerator<P: Participant> {
    /// Generator name (e.g., "circle", "ideal").
    fn name(&self) -> &'static str;

    /// Generates the pairings of one leg, ordered by turn.
    fn generate_matches(&self) -> Result<Vec<Pairing<P>>, ScheduleError>;
}

/// Turns in one leg for `participant_count` participants: `N - 1` for even
/// `N`, `N` for odd `N` (one bye per turn), 0 below two participants.
pub(crate) fn turns_per_leg(participant_count: usize) -> usize {
    match participant_count {
        0 | 1 => 0,
        n => n + n % 2 - 1,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use super::turns_per_leg;
    use crate::models::Pairing;

    #[test]
    fn test_turns_per_leg() {
        assert_eq!(turns_per_leg(0), 0);
        assert_eq!(turns_per_leg(1), 0);
        assert_eq!(turns_per_leg(2), 1);
        assert_eq!(turns_per_leg(5), 5);
        assert_eq!(turns_per_leg(6), 5);
        assert_eq!(turns_per_leg(14), 13);
    }

    /// Asserts the single round-robin invariants for `participants`.
    pub(crate) fn assert_single_round_robin(matches: &[Pairing<i64>], participants: &[i64]) {
        let n = participants.len();
        assert_eq!(matches.len(), n * (n - 1) / 2);

        let mut pairs = HashSet::new();
        for m in matches {
            assert_ne!(m.home, m.guest, "self pairing in {m:?}");
            assert!(participants.contains(&m.home) && participants.contains(&m.guest));
            let key = (m.home.min(m.guest), m.home.max(m.guest));
            assert!(pairs.insert(key), "pair {key:?} appears twice");
        }

        for p in participants {
            let played = matches.iter().filter(|m| m.involves(p)).count();
            assert_eq!(played, n - 1, "participant {p} plays {played} matches");
        }

        // Nobody plays twice in the same turn.
        let mut seen = HashSet::new();
        for m in matches {
            assert!(seen.insert((m.turn, m.home)), "{} twice in turn {}", m.home, m.turn);
            assert!(seen.insert((m.turn, m.guest)), "{} twice in turn {}", m.guest, m.turn);
        }
    }
}
