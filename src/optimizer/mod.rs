//! Turn-reordering optimizer.
//!
//! Reorders whole turns of a generated leg to reduce breaks. Which pairs
//! meet, and in which turn, never changes; only the order of turns does.
//!
//! # Algorithm
//!
//! The first generated turn is placed first. Until every turn is placed,
//! the next one is chosen by a waterfall of tiers, falling through when a
//! tier finds nothing:
//!
//! 1. A turn containing every home participant of the previous turn, none
//!    of them facing each other. Disabled unless
//!    [`OptimizerOptions::home_teams_apart_tier`] is set.
//! 2. The turn where most previous home participants play as guest.
//! 3. The turn that least extends the running same-role streaks of the
//!    previous turn's participants.
//! 4. The first remaining turn in generated order.
//!
//! Turn values are kept from generation; callers renumber if they need
//! contiguous matchdays.
//!
//! # Reference
//! Rasmussen & Trick (2008), "Round robin scheduling – a survey", §4
//! (break minimization by turn permutation)

mod selection;

use serde::{Deserialize, Serialize};

use crate::models::{Pairing, Participant};

use selection::{
    group_turns, turn_of_home_teams_not_playing_each_other, turn_with_most_home_teams_as_guests,
    turn_with_shortest_continuation, Turn,
};

/// Opt-in switches for the optimizer.
///
/// Both are off by default, which reproduces the established schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerOptions {
    /// Enables tier 1 (home participants kept apart).
    pub home_teams_apart_tier: bool,
    /// Runs [`RoundRobinOptimizer::avoid_consecutive_home_guest_matches`]
    /// after reordering.
    pub avoid_consecutive_roles: bool,
}

impl OptimizerOptions {
    /// Enables or disables tier 1.
    pub fn with_home_teams_apart_tier(mut self, enabled: bool) -> Self {
        self.home_teams_apart_tier = enabled;
        self
    }

    /// Enables or disables the role-swap post-step.
    pub fn with_avoid_consecutive_roles(mut self, enabled: bool) -> Self {
        self.avoid_consecutive_roles = enabled;
        self
    }
}

/// Reorders the turns of a leg to reduce breaks.
///
/// # Example
///
/// ```
/// use rr_schedule::optimizer::RoundRobinOptimizer;
/// use rr_schedule::systems::{PairingGenerator, RoundRobinSystem};
///
/// let matches = RoundRobinSystem::new(vec![1, 2, 3]).generate_matches().unwrap();
/// let optimized = RoundRobinOptimizer::new().optimize(&matches);
/// let order: Vec<usize> = optimized.iter().map(|m| m.turn).collect();
/// assert_eq!(order, vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinOptimizer {
    options: OptimizerOptions,
}

impl RoundRobinOptimizer {
    /// Creates an optimizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options.
    pub fn with_options(mut self, options: OptimizerOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// Returns the matches with their turns reordered.
    pub fn optimize<P: Participant>(&self, matches: &[Pairing<P>]) -> Vec<Pairing<P>> {
        let mut remaining = group_turns(matches);
        if remaining.is_empty() {
            return Vec::new();
        }

        let mut placed: Vec<Turn<P>> = vec![remaining.remove(0)];
        let mut history: Vec<Pairing<P>> = placed[0].matches.clone();

        while !remaining.is_empty() {
            let previous = &placed[placed.len() - 1];
            let idx = self.select_next(&history, previous, &remaining);
            let next = remaining.remove(idx);
            history.extend(next.matches.iter().cloned());
            placed.push(next);
        }

        log::debug!(
            "optimized turn order: {:?}",
            placed.iter().map(|t| t.turn).collect::<Vec<_>>()
        );

        if self.options.avoid_consecutive_roles {
            let swaps = self.avoid_consecutive_home_guest_matches(&mut history);
            log::debug!("role swaps after reordering: {swaps}");
        }

        history
    }

    /// Swaps home and guest of every match whose home participant was at
    /// home and whose guest was a guest in the preceding turn.
    ///
    /// Matches must be grouped by turn in play order. Earlier swaps are
    /// visible to later turns. Returns the number of swapped matches.
    pub fn avoid_consecutive_home_guest_matches<P: Participant>(
        &self,
        matches: &mut [Pairing<P>],
    ) -> usize {
        let mut swaps = 0;
        let mut previous: Option<(Vec<P>, Vec<P>)> = None;
        let mut start = 0;

        while start < matches.len() {
            let turn = matches[start].turn;
            let end = start + matches[start..].iter().take_while(|m| m.turn == turn).count();

            if let Some((homes, guests)) = &previous {
                for m in &mut matches[start..end] {
                    if homes.contains(&m.home) && guests.contains(&m.guest) {
                        std::mem::swap(&mut m.home, &mut m.guest);
                        swaps += 1;
                    }
                }
            }

            let group = &matches[start..end];
            previous = Some((
                group.iter().map(|m| m.home.clone()).collect(),
                group.iter().map(|m| m.guest.clone()).collect(),
            ));
            start = end;
        }

        swaps
    }

    fn select_next<P: Participant>(
        &self,
        history: &[Pairing<P>],
        previous: &Turn<P>,
        remaining: &[Turn<P>],
    ) -> usize {
        if self.options.home_teams_apart_tier {
            if let Some(idx) = turn_of_home_teams_not_playing_each_other(previous, remaining) {
                log::trace!(
                    "turn {} after {}: home teams apart",
                    remaining[idx].turn,
                    previous.turn
                );
                return idx;
            }
        }
        if let Some(idx) = turn_with_most_home_teams_as_guests(previous, remaining) {
            log::trace!(
                "turn {} after {}: home teams as guests",
                remaining[idx].turn,
                previous.turn
            );
            return idx;
        }
        if let Some(idx) = turn_with_shortest_continuation(history, previous, remaining) {
            log::trace!(
                "turn {} after {}: shortest continuation",
                remaining[idx].turn,
                previous.turn
            );
            return idx;
        }
        log::trace!(
            "turn {} after {}: first remaining",
            remaining[0].turn,
            previous.turn
        );
        0
    }
}
