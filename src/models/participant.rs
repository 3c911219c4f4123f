//! Participant capability.
//!
//! A participant is an opaque, equality-comparable identifier (a team key,
//! a club name, an index). The scheduler never looks inside it.

use std::fmt::Debug;
use std::hash::Hash;

/// Capability bound for anything that can take part in a round-robin.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type,
/// so `i64`, `u32`, `String` and custom key newtypes all qualify.
///
/// # Ordering contract
/// Schedules are derived from the *position* of each participant in the
/// input sequence, not only from membership. The same set of participants
/// in a different order yields a different (equally valid) schedule, which
/// is why every API takes an ordered slice or `Vec` rather than a set.
pub trait Participant: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Participant for T {}

/// A slot in the circle-method rotation.
///
/// Odd participant counts are padded with an explicit [`Slot::Bye`] instead
/// of relying on a "default" participant value, so that `0` or `""` remain
/// legitimate participant ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<P> {
    /// A real participant.
    Team(P),
    /// Placeholder opponent; matches against it are discarded.
    Bye,
}

impl<P: Clone> Slot<P> {
    /// Returns the participant, or `None` for the bye.
    pub(crate) fn team(&self) -> Option<&P> {
        match self {
            Slot::Team(p) => Some(p),
            Slot::Bye => None,
        }
    }
}
