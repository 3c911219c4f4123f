//! Match creator configuration.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::optimizer::OptimizerOptions;

/// Policy knobs for [`MatchCreator`](super::MatchCreator).
///
/// The defaults select the minimal-break tables whenever they exist and
/// run the optimizer for circle-method legs of 3 to 9 participants, the
/// range where reordering improves the schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchCreatorOptions {
    /// Use the minimal-break tables for 5 to 14 participants.
    pub use_ideal_system: bool,
    /// Smallest participant count the optimizer runs for.
    pub optimizer_min_participants: usize,
    /// Largest participant count the optimizer runs for.
    pub optimizer_max_participants: usize,
    /// Optimizer switches.
    pub optimizer: OptimizerOptions,
}

impl Default for MatchCreatorOptions {
    fn default() -> Self {
        Self {
            use_ideal_system: true,
            optimizer_min_participants: 3,
            optimizer_max_participants: 9,
            optimizer: OptimizerOptions::default(),
        }
    }
}

impl MatchCreatorOptions {
    /// Enables or disables the minimal-break tables.
    pub fn with_ideal_system(mut self, enabled: bool) -> Self {
        self.use_ideal_system = enabled;
        self
    }

    /// Sets the participant counts the optimizer runs for.
    pub fn with_optimizer_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.optimizer_min_participants = *range.start();
        self.optimizer_max_participants = *range.end();
        self
    }

    /// Sets the optimizer switches.
    pub fn with_optimizer(mut self, optimizer: OptimizerOptions) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Whether a circle-method leg of `participant_count` is optimized.
    pub fn optimizes(&self, participant_count: usize) -> bool {
        (self.optimizer_min_participants..=self.optimizer_max_participants)
            .contains(&participant_count)
    }
}
