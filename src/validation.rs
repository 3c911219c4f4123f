//! Input validation for participant lists.
//!
//! Checks structural integrity of the participant sequence before
//! scheduling. Detects:
//! - Fewer than two participants
//! - Duplicate participants (a participant would be paired with itself)

use std::collections::HashSet;

use crate::models::Participant;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A round-robin needs at least two participants.
    TooFewParticipants,
    /// The same participant appears more than once.
    DuplicateParticipant,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a participant sequence.
///
/// Checks:
/// 1. At least two participants
/// 2. No participant appears twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_participants<P: Participant>(participants: &[P]) -> ValidationResult {
    let mut errors = Vec::new();

    if participants.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewParticipants,
            format!(
                "At least 2 participants are required, got {}",
                participants.len()
            ),
        ));
    }

    let mut seen = HashSet::new();
    for p in participants {
        if !seen.insert(p) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateParticipant,
                format!("Duplicate participant: {p:?}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(validate_participants(&[1, 2, 3, 4, 5]).is_ok());
        assert!(validate_participants(&["A", "B"]).is_ok());
    }

    #[test]
    fn test_too_few_participants() {
        let errors = validate_participants(&[1]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TooFewParticipants);

        let empty: [i64; 0] = [];
        assert!(validate_participants(&empty).is_err());
    }

    #[test]
    fn test_duplicate_participant() {
        let errors = validate_participants(&[1, 2, 3, 2]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateParticipant && e.message.contains('2')));
    }

    #[test]
    fn test_zero_is_a_valid_participant() {
        assert!(validate_participants(&[0, 1, 2]).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_participants(&[7, 7]).unwrap_err();
        assert_eq!(errors.len(), 1);

        let errors = validate_participants(&["X", "X", "X"]).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
