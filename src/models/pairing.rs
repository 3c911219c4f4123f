//! Pairings and combinations.
//!
//! A [`Pairing`] is the raw output of a generator: a 0-based turn index
//! and the two participants in their home/guest roles. A [`Combination`]
//! is what callers receive: a 1-based turn within the whole double
//! round-robin plus the referee chosen by policy.

use serde::{Deserialize, Serialize};

/// A generated match between two participants.
///
/// `turn` is 0-based and is the value assigned at generation time. The
/// optimizer may reorder turns without renumbering them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing<P> {
    /// 0-based turn index as generated.
    pub turn: usize,
    /// Participant playing at home.
    pub home: P,
    /// Participant playing as guest.
    pub guest: P,
}

impl<P> Pairing<P> {
    /// Creates a new pairing.
    pub fn new(turn: usize, home: P, guest: P) -> Self {
        Self { turn, home, guest }
    }

    /// Returns the same pairing with home and guest exchanged.
    pub fn swapped(self) -> Self {
        Self {
            turn: self.turn,
            home: self.guest,
            guest: self.home,
        }
    }
}

impl<P: PartialEq> Pairing<P> {
    /// Whether `participant` plays in this pairing (either role).
    #[inline]
    pub fn involves(&self, participant: &P) -> bool {
        self.home == *participant || self.guest == *participant
    }

    /// Whether this pairing is between `a` and `b`, in either orientation.
    pub fn is_between(&self, a: &P, b: &P) -> bool {
        (self.home == *a && self.guest == *b) || (self.home == *b && self.guest == *a)
    }
}

/// A scheduled match handed to the downstream date/venue scheduler.
///
/// `turn` is 1-based; return-leg turns continue after the first leg's
/// last turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination<P, R = P> {
    /// 1-based turn (matchday).
    pub turn: usize,
    /// Participant playing at home.
    pub home: P,
    /// Participant playing as guest.
    pub guest: P,
    /// Referee, if the policy assigns one.
    pub referee: Option<R>,
}

impl<P, R> Combination<P, R> {
    /// Creates a combination without a referee.
    pub fn new(turn: usize, home: P, guest: P) -> Self {
        Self {
            turn,
            home,
            guest,
            referee: None,
        }
    }

    /// Sets the referee.
    pub fn with_referee(mut self, referee: R) -> Self {
        self.referee = Some(referee);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_swapped() {
        let p = Pairing::new(3, 1, 2).swapped();
        assert_eq!(p.turn, 3);
        assert_eq!(p.home, 2);
        assert_eq!(p.guest, 1);
    }

    #[test]
    fn test_pairing_involves() {
        let p = Pairing::new(0, "A", "B");
        assert!(p.involves(&"A"));
        assert!(p.involves(&"B"));
        assert!(!p.involves(&"C"));
        assert!(p.is_between(&"B", &"A"));
        assert!(!p.is_between(&"A", &"C"));
    }

    #[test]
    fn test_combination_builder() {
        let c: Combination<i64> = Combination::new(1, 4, 5);
        assert_eq!(c.referee, None);
        let c = c.with_referee(4);
        assert_eq!(c.referee, Some(4));
    }

    #[test]
    fn test_combination_serde() {
        let c: Combination<i64> = Combination::new(2, 1, 3).with_referee(5);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"turn":2,"home":1,"guest":3,"referee":5}"#);
        let back: Combination<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
