//! Circle-method round-robin generator.
//!
//! # Algorithm
//!
//! 1. Pad the participants with a bye if their count is odd.
//! 2. Keep the first slot fixed; the others form a rotation list.
//! 3. In turn `t`, the fixed slot meets `rotation[t]`; the remaining
//!    slots are paired by folding the rotation list around `t`.
//! 4. Roles alternate by turn parity (fixed slot) and by pairing index
//!    (folded pairs).
//! 5. Drop matches against the bye.
//! 6. For odd counts, swap the last-turn match of every participant that
//!    ends up with more home than guest matches.
//!
//! # Complexity
//! O(n²) matches, O(n²) work.
//!
//! # Reference
//! Kirkman (1847); Berger tables; Rasmussen & Trick (2008),
//! "Round robin scheduling – a survey"

use crate::analysis::MatchesAnalyzer;
use crate::error::ScheduleError;
use crate::models::{Pairing, Participant, Slot};

use super::{turns_per_leg, PairingGenerator};

/// General-purpose round-robin generator for any participant count.
///
/// The output depends on the *order* of the participants: rotating or
/// shuffling the input produces a different, equally valid schedule.
/// Generation is deterministic for a fixed order.
///
/// # Example
///
/// ```
/// use rr_schedule::systems::{PairingGenerator, RoundRobinSystem};
///
/// let system = RoundRobinSystem::new(vec![1, 2, 3, 4]);
/// let matches = system.generate_matches().unwrap();
/// assert_eq!(matches.len(), 6);
/// assert_eq!(system.turn_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinSystem<P: Participant> {
    participants: Vec<P>,
}

impl<P: Participant> RoundRobinSystem<P> {
    /// Creates a generator over an ordered participant list.
    pub fn new(participants: Vec<P>) -> Self {
        Self { participants }
    }

    /// Number of turns the generator produces (bye included).
    pub fn turn_count(&self) -> usize {
        turns_per_leg(self.participants.len())
    }

    /// Runs the circle method without any post-processing.
    fn rotate(&self) -> Vec<Pairing<P>> {
        let mut slots: Vec<Slot<P>> = self.participants.iter().cloned().map(Slot::Team).collect();
        if slots.len() % 2 == 1 {
            slots.push(Slot::Bye);
        }

        let half = slots.len() / 2;
        let (fixed, rotation) = (&slots[0], &slots[1..]);
        let size = rotation.len();
        let mut matches = Vec::with_capacity(size * half);

        for turn in 0..size {
            let rotating = &rotation[turn % size];
            if turn % 2 == 0 {
                push_pairing(&mut matches, turn, rotating, fixed);
            } else {
                push_pairing(&mut matches, turn, fixed, rotating);
            }

            for idx in 1..half {
                let first = &rotation[(turn + idx) % size];
                let second = &rotation[(turn + size - idx) % size];
                if idx % 2 == 1 {
                    push_pairing(&mut matches, turn, first, second);
                } else {
                    push_pairing(&mut matches, turn, second, first);
                }
            }
        }

        matches
    }

    /// Restores home/guest balance for odd participant counts.
    ///
    /// Every participant with more home than guest matches has its
    /// last-turn match swapped. Counts are taken once, before any swap.
    /// Even counts are left untouched.
    pub fn fix_unbalanced_home_guest_counts_in_last_turn(&self, matches: &mut [Pairing<P>]) {
        if self.participants.len() % 2 == 0 {
            return;
        }
        let Some(last_turn) = matches.iter().map(|m| m.turn).max() else {
            return;
        };

        let counts = MatchesAnalyzer::home_guest_count(matches);
        let home_heavy: Vec<&P> = self
            .participants
            .iter()
            .filter(|p| counts.get(*p).is_some_and(|c| c.home > c.guest))
            .collect();

        for p in home_heavy {
            if let Some(m) = matches
                .iter_mut()
                .find(|m| m.turn == last_turn && m.home == *p)
            {
                std::mem::swap(&mut m.home, &mut m.guest);
            }
        }
    }
}

impl<P: Participant> PairingGenerator<P> for RoundRobinSystem<P> {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn generate_matches(&self) -> Result<Vec<Pairing<P>>, ScheduleError> {
        if self.participants.len() < 2 {
            return Ok(Vec::new());
        }
        let mut matches = self.rotate();
        self.fix_unbalanced_home_guest_counts_in_last_turn(&mut matches);
        Ok(matches)
    }
}

fn push_pairing<P: Participant>(
    out: &mut Vec<Pairing<P>>,
    turn: usize,
    home: &Slot<P>,
    guest: &Slot<P>,
) {
    if let (Some(h), Some(g)) = (home.team(), guest.team()) {
        out.push(Pairing::new(turn, h.clone(), g.clone()));
    }
}
