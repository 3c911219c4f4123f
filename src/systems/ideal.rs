//! Table-driven minimal-break generator.
//!
//! Looks up a precomputed schedule for the participant count and maps its
//! 1-based positions onto the caller's participants.
//!
//! # Reference
//! de Werra (1981), "Scheduling in Sports"; breaks lower bound `N - 2`
//! for even `N`.

use crate::error::ScheduleError;
use crate::models::{Pairing, Participant};

use super::ideal_tables::{self, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use super::PairingGenerator;

/// Minimal-break generator for 5 to 14 participants.
///
/// Fails with [`ScheduleError::ParticipantCountOutOfRange`] outside that
/// range; callers fall back to [`RoundRobinSystem`](super::RoundRobinSystem).
///
/// # Example
///
/// ```
/// use rr_schedule::systems::{IdealRoundRobinSystem, PairingGenerator};
///
/// let system = IdealRoundRobinSystem::new(vec!["A", "B", "C", "D", "E"]);
/// let matches = system.generate_matches().unwrap();
/// assert_eq!(matches.len(), 10);
/// assert_eq!((matches[0].turn, matches[0].home, matches[0].guest), (0, "B", "E"));
///
/// assert!(IdealRoundRobinSystem::new(vec![1, 2, 3, 4]).generate_matches().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IdealRoundRobinSystem<P: Participant> {
    participants: Vec<P>,
}

impl<P: Participant> IdealRoundRobinSystem<P> {
    /// Creates a generator over an ordered participant list.
    pub fn new(participants: Vec<P>) -> Self {
        Self { participants }
    }
}

impl<P: Participant> PairingGenerator<P> for IdealRoundRobinSystem<P> {
    fn name(&self) -> &'static str {
        "ideal"
    }

    fn generate_matches(&self) -> Result<Vec<Pairing<P>>, ScheduleError> {
        let count = self.participants.len();
        let table = ideal_tables::table(count).ok_or(ScheduleError::ParticipantCountOutOfRange {
            count,
            min: MIN_PARTICIPANTS,
            max: MAX_PARTICIPANTS,
        })?;

        // Only the turn becomes 0-based; positions index the 1-based table.
        Ok(table
            .iter()
            .map(|&(turn, home, guest)| {
                Pairing::new(
                    usize::from(turn) - 1,
                    self.participants[usize::from(home) - 1].clone(),
                    self.participants[usize::from(guest) - 1].clone(),
                )
            })
            .collect())
    }
}
