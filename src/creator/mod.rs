//! Match creator: generator selection, return leg and referees.
//!
//! # Pipeline
//!
//! 1. Validate the participant list.
//! 2. Generate the first leg with `IdealRoundRobinSystem` (5 to 14
//!    participants) or `RoundRobinSystem` (any other count).
//! 3. Reorder circle-method turns with `RoundRobinOptimizer` when the
//!    participant count lies in the configured range.
//! 4. Renumber turns to contiguous matchdays.
//! 5. For the return leg, mirror the first leg: swap home and guest and
//!    offset turns by the first leg's turn count.
//! 6. Assign referees per [`RefereeType`].
//!
//! # Concurrency
//! A `MatchCreator` holds only its participant list and options. Share
//! one instance per scheduling request; `set_participants` needs `&mut`.

mod options;
mod referee;

pub use options::MatchCreatorOptions;

use std::marker::PhantomData;

use crate::error::ScheduleError;
use crate::models::{Combination, LegType, Pairing, Participant, RefereeType};
use crate::optimizer::RoundRobinOptimizer;
use crate::systems::{turns_per_leg, IdealRoundRobinSystem, PairingGenerator, RoundRobinSystem};
use crate::validation::validate_participants;

use referee::assign_referees;

/// Produces the combinations of a mirrored double round-robin.
///
/// `R` is the referee type. Referees are drawn from the participants, so
/// `R` must be constructible from `P`; an incompatible pairing is rejected
/// when the type is named:
///
/// ```compile_fail
/// use rr_schedule::creator::MatchCreator;
///
/// let creator: MatchCreator<i64, char> = MatchCreator::new();
/// ```
///
/// # Example
///
/// ```
/// use rr_schedule::creator::MatchCreator;
/// use rr_schedule::models::{LegType, RefereeType};
///
/// let mut creator: MatchCreator<i64> = MatchCreator::new();
/// creator.set_participants(vec![1, 2, 3, 4, 5]);
///
/// let first = creator.get_combinations(RefereeType::None, LegType::First).unwrap();
/// assert_eq!(first.len(), 10);
/// assert_eq!(creator.combinations_per_leg(), 4);
///
/// let back = creator.get_combinations(RefereeType::Home, LegType::Return).unwrap();
/// assert_eq!(back[0].turn, 6);
/// assert_eq!((back[0].home, back[0].guest), (first[0].guest, first[0].home));
/// assert_eq!(back[0].referee, Some(back[0].home));
/// ```
#[derive(Debug, Clone)]
pub struct MatchCreator<P: Participant, R: From<P> = P> {
    participants: Vec<P>,
    options: MatchCreatorOptions,
    _referee: PhantomData<fn() -> R>,
}

impl<P: Participant, R: From<P>> MatchCreator<P, R> {
    /// Creates a match creator with default options and no participants.
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
            options: MatchCreatorOptions::default(),
            _referee: PhantomData,
        }
    }

    /// Sets the options.
    pub fn with_options(mut self, options: MatchCreatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &MatchCreatorOptions {
        &self.options
    }

    /// Replaces the participants. Their order shapes the schedule.
    pub fn set_participants(&mut self, participants: impl IntoIterator<Item = P>) {
        self.participants = participants.into_iter().collect();
    }

    /// The participants, in the order given.
    pub fn participants(&self) -> &[P] {
        &self.participants
    }

    /// Combinations each participant plays per leg (`N - 1`).
    pub fn combinations_per_leg(&self) -> usize {
        self.participants.len().saturating_sub(1)
    }

    /// Turns (matchdays) per leg: `N - 1` for even `N`, `N` for odd `N`.
    pub fn turn_count(&self) -> usize {
        turns_per_leg(self.participants.len())
    }

    /// Returns the combinations of one leg.
    ///
    /// `referee_type` accepts a [`RefereeType`] or its numeric code; an
    /// undefined code fails with [`ScheduleError::RefereeTypeOutOfRange`].
    ///
    /// First-leg turns run from 1 to [`turn_count`](Self::turn_count);
    /// return-leg turns continue from there.
    pub fn get_combinations<T>(
        &self,
        referee_type: T,
        leg_type: LegType,
    ) -> Result<Vec<Combination<P, R>>, ScheduleError>
    where
        T: TryInto<RefereeType>,
        ScheduleError: From<T::Error>,
    {
        self.leg(referee_type.try_into()?, leg_type)
    }

    /// Returns both legs, first leg followed by the return leg.
    pub fn get_double_round_robin<T>(
        &self,
        referee_type: T,
    ) -> Result<Vec<Combination<P, R>>, ScheduleError>
    where
        T: TryInto<RefereeType>,
        ScheduleError: From<T::Error>,
    {
        let referee_type = referee_type.try_into()?;
        let mut all = self.leg(referee_type, LegType::First)?;
        all.extend(self.leg(referee_type, LegType::Return)?);
        Ok(all)
    }

    /// Builds one leg for an already converted referee policy.
    fn leg(
        &self,
        referee_type: RefereeType,
        leg_type: LegType,
    ) -> Result<Vec<Combination<P, R>>, ScheduleError> {
        validate_participants(&self.participants).map_err(ScheduleError::InvalidParticipants)?;

        let first_leg = self.first_leg()?;
        let pairings = match leg_type {
            LegType::First => first_leg,
            LegType::Return => {
                let turns = turn_count_of(&first_leg);
                first_leg
                    .into_iter()
                    .map(|m| {
                        let mut mirrored = m.swapped();
                        mirrored.turn += turns;
                        mirrored
                    })
                    .collect()
            }
        };

        let referees = assign_referees(&pairings, &self.participants, referee_type)?;
        Ok(pairings
            .into_iter()
            .zip(referees)
            .map(|(m, referee)| {
                let combination = Combination::new(m.turn + 1, m.home, m.guest);
                match referee {
                    Some(referee) => combination.with_referee(R::from(referee)),
                    None => combination,
                }
            })
            .collect())
    }

    /// Generates, optionally optimizes and renumbers the first leg.
    fn first_leg(&self) -> Result<Vec<Pairing<P>>, ScheduleError> {
        let count = self.participants.len();
        let circle = RoundRobinSystem::new(self.participants.clone());

        let (matches, generator) = if self.options.use_ideal_system {
            let ideal = IdealRoundRobinSystem::new(self.participants.clone());
            match ideal.generate_matches() {
                Ok(matches) => (matches, ideal.name()),
                Err(ScheduleError::ParticipantCountOutOfRange { .. }) => {
                    log::debug!("no ideal table for {count} participants, using circle method");
                    (circle.generate_matches()?, circle.name())
                }
                Err(e) => return Err(e),
            }
        } else {
            (circle.generate_matches()?, circle.name())
        };

        let optimize = generator == circle.name() && self.options.optimizes(count);
        log::debug!("{count} participants: generator={generator}, optimize={optimize}");

        let matches = if optimize {
            RoundRobinOptimizer::new()
                .with_options(self.options.optimizer)
                .optimize(&matches)
        } else {
            matches
        };

        Ok(renumber_turns(matches))
    }
}

impl<P: Participant, R: From<P>> Default for MatchCreator<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps turn values to 0, 1, 2, ... in order of first appearance.
fn renumber_turns<P>(matches: Vec<Pairing<P>>) -> Vec<Pairing<P>> {
    let mut order: Vec<usize> = Vec::new();
    matches
        .into_iter()
        .map(|mut m| {
            let index = match order.iter().position(|&t| t == m.turn) {
                Some(index) => index,
                None => {
                    order.push(m.turn);
                    order.len() - 1
                }
            };
            m.turn = index;
            m
        })
        .collect()
}

/// Number of turns of a renumbered leg.
fn turn_count_of<P>(matches: &[Pairing<P>]) -> usize {
    matches.iter().map(|m| m.turn + 1).max().unwrap_or(0)
}
