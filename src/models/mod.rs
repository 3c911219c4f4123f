//! Round-robin domain models.
//!
//! Provides the core data types shared by generators, the optimizer and
//! the match creator.
//!
//! # Domain Mappings
//!
//! | rr-schedule | Football | Chess | Esports |
//! |-------------|----------|-------|---------|
//! | Participant | Club | Player | Team |
//! | Turn | Matchday | Round | Week |
//! | Combination | Fixture | Pairing | Series |
//! | Leg | Half-season | Cycle | Split |

mod pairing;
mod participant;
mod policy;

pub use pairing::{Combination, Pairing};
pub use participant::Participant;
pub(crate) use participant::Slot;
pub use policy::{LegType, RefereeType};
