//! Referee and leg policies.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// How the referee of each combination is chosen.
///
/// `Home` and `Guest` name one of the two playing participants as its own
/// referee. This is the "no external referee" placeholder convention used
/// by downstream consumers and is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RefereeType {
    /// No referee is assigned.
    #[default]
    None,
    /// The home participant referees its own match.
    Home,
    /// The guest participant referees its own match.
    Guest,
    /// Another participant of the same turn, never one of the two players.
    OtherFromRound,
}

impl RefereeType {
    /// Numeric code used by external configuration.
    pub fn code(self) -> i32 {
        match self {
            RefereeType::None => 0,
            RefereeType::Home => 1,
            RefereeType::Guest => 2,
            RefereeType::OtherFromRound => 3,
        }
    }
}

impl TryFrom<i64> for RefereeType {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RefereeType::None),
            1 => Ok(RefereeType::Home),
            2 => Ok(RefereeType::Guest),
            3 => Ok(RefereeType::OtherFromRound),
            other => Err(ScheduleError::RefereeTypeOutOfRange(other)),
        }
    }
}

impl TryFrom<i32> for RefereeType {
    type Error = ScheduleError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        RefereeType::try_from(i64::from(value))
    }
}

/// Which leg of the double round-robin to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LegType {
    /// The generated leg.
    #[default]
    First,
    /// The mirrored leg: home and guest swapped, turns offset.
    Return,
}
