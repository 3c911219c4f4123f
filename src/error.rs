//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while generating or annotating a schedule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("participant count {count} is outside the supported range {min}..={max}")]
    ParticipantCountOutOfRange { count: usize, min: usize, max: usize },

    #[error("referee type value {0} is out of range")]
    RefereeTypeOutOfRange(i64),

    #[error("invalid participants: {}", format_validation(.0))]
    InvalidParticipants(Vec<ValidationError>),

    #[error("no referee available for turn {turn}")]
    NoRefereeAvailable { turn: usize },
}

impl From<std::convert::Infallible> for ScheduleError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
