//! Round-robin tournament scheduling.
//!
//! Generates single and mirrored double round-robin schedules for an
//! arbitrary list of participants, keeping home/guest assignments balanced
//! and the number of breaks (same role in consecutive turns) low.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `Pairing`, `Combination`,
//!   `RefereeType`, `LegType`
//! - **`systems`**: Pairing generators: `RoundRobinSystem` (circle method) and
//!   `IdealRoundRobinSystem` (minimal-break tables for 5 to 14 participants)
//! - **`analysis`**: `MatchesAnalyzer` statistics and `LegKpi` summaries
//! - **`optimizer`**: `RoundRobinOptimizer` turn reordering
//! - **`creator`**: `MatchCreator` façade (generator choice, return leg, referees)
//! - **`validation`**: Participant list checks
//!
//! # Example
//!
//! ```
//! use rr_schedule::{LegType, MatchCreator, RefereeType};
//!
//! let mut creator: MatchCreator<&str> = MatchCreator::new();
//! creator.set_participants(["Ajax", "Benfica", "Celtic", "Dynamo"]);
//!
//! let leg = creator.get_combinations(RefereeType::OtherFromRound, LegType::First)?;
//! assert_eq!(leg.len(), 6);
//! assert!(leg.iter().all(|c| c.referee != Some(c.home) && c.referee != Some(c.guest)));
//! # Ok::<(), rr_schedule::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod analysis;
pub mod creator;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod systems;
pub mod validation;

pub use creator::{MatchCreator, MatchCreatorOptions};
pub use error::ScheduleError;
pub use models::{Combination, LegType, Pairing, Participant, RefereeType};
