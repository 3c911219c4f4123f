//! Turn selection tiers.
//!
//! Each tier inspects the turns not placed yet and either picks one (by
//! index into `remaining`) or passes to the next tier.

use crate::analysis::MatchesAnalyzer;
use crate::models::{Pairing, Participant};

/// All matches sharing one generated turn value.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Turn<P> {
    pub turn: usize,
    pub matches: Vec<Pairing<P>>,
}

impl<P: Participant> Turn<P> {
    fn plays(&self, participant: &P) -> bool {
        self.matches.iter().any(|m| m.involves(participant))
    }

    fn homes(&self) -> impl Iterator<Item = &P> {
        self.matches.iter().map(|m| &m.home)
    }
}

/// Groups matches by turn value, in order of first appearance.
pub(super) fn group_turns<P: Participant>(matches: &[Pairing<P>]) -> Vec<Turn<P>> {
    let mut turns: Vec<Turn<P>> = Vec::new();
    for m in matches {
        match turns.iter_mut().find(|t| t.turn == m.turn) {
            Some(t) => t.matches.push(m.clone()),
            None => turns.push(Turn {
                turn: m.turn,
                matches: vec![m.clone()],
            }),
        }
    }
    turns
}

/// Tier 1: a turn containing every home participant of `previous`, none
/// of them facing each other.
pub(super) fn turn_of_home_teams_not_playing_each_other<P: Participant>(
    previous: &Turn<P>,
    remaining: &[Turn<P>],
) -> Option<usize> {
    let homes: Vec<&P> = previous.homes().collect();
    remaining.iter().position(|candidate| {
        homes.iter().all(|h| candidate.plays(h))
            && !candidate
                .matches
                .iter()
                .any(|m| homes.contains(&&m.home) && homes.contains(&&m.guest))
    })
}

/// Tier 2: the turn in which most home participants of `previous` play
/// as guest. Passes when no candidate has any.
pub(super) fn turn_with_most_home_teams_as_guests<P: Participant>(
    previous: &Turn<P>,
    remaining: &[Turn<P>],
) -> Option<usize> {
    let homes: Vec<&P> = previous.homes().collect();
    let mut best: Option<(usize, usize)> = None;

    for (idx, candidate) in remaining.iter().enumerate() {
        let as_guest = candidate
            .matches
            .iter()
            .filter(|m| homes.contains(&&m.guest))
            .count();
        if as_guest > 0 && best.map_or(true, |(_, b)| as_guest > b) {
            best = Some((idx, as_guest));
        }
    }

    best.map(|(idx, _)| idx)
}

/// Tier 3: the turn that least extends the current same-role runs of
/// the participants of `previous`.
///
/// For each candidate the placed matches plus the candidate form a
/// tentative history. Every participant of `previous` who also plays in
/// the candidate contributes the first non-zero value of
/// [`MatchesAnalyzer::last_consecutive_counts`] for the role it takes in
/// the candidate. Passes when no participant of `previous` plays in any
/// candidate.
pub(super) fn turn_with_shortest_continuation<P: Participant>(
    placed: &[Pairing<P>],
    previous: &Turn<P>,
    remaining: &[Turn<P>],
) -> Option<usize> {
    let mut tentative: Vec<Pairing<P>> = placed.to_vec();
    let base = tentative.len();
    let mut best: Option<(usize, usize)> = None;

    for (idx, candidate) in remaining.iter().enumerate() {
        tentative.truncate(base);
        tentative.extend(candidate.matches.iter().cloned());

        let mut scored = false;
        let mut total = 0;
        for p in previous.matches.iter().flat_map(|m| [&m.home, &m.guest]) {
            let Some(m) = candidate.matches.iter().find(|m| m.involves(p)) else {
                continue;
            };
            scored = true;
            total += MatchesAnalyzer::last_consecutive_counts(p, m.home == *p, &tentative)
                .find(|&run| run > 0)
                .unwrap_or(0);
        }

        if scored && best.map_or(true, |(_, b)| total < b) {
            best = Some((idx, total));
        }
    }

    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(turn: usize, pairs: &[(i64, i64)]) -> Turn<i64> {
        Turn {
            turn,
            matches: pairs
                .iter()
                .map(|&(h, g)| Pairing::new(turn, h, g))
                .collect(),
        }
    }

    #[test]
    fn test_group_turns_keeps_first_appearance_order() {
        let matches = vec![
            Pairing::new(2, 1, 2),
            Pairing::new(0, 3, 4),
            Pairing::new(2, 3, 5),
        ];
        let turns = group_turns(&matches);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].turn, 2);
        assert_eq!(turns[0].matches.len(), 2);
        assert_eq!(turns[1].turn, 0);
    }

    #[test]
    fn test_home_teams_not_playing_each_other() {
        let previous = turn(0, &[(1, 2), (3, 4)]);
        let remaining = vec![turn(2, &[(1, 3), (2, 4)]), turn(1, &[(1, 4), (3, 2)])];
        assert_eq!(
            turn_of_home_teams_not_playing_each_other(&previous, &remaining),
            Some(1)
        );
        assert_eq!(
            turn_of_home_teams_not_playing_each_other(&previous, &remaining[..1]),
            None
        );
    }

    #[test]
    fn test_most_home_teams_as_guests() {
        let previous = turn(0, &[(1, 2), (3, 4)]);
        let remaining = vec![
            turn(2, &[(1, 3), (2, 4)]),
            turn(1, &[(1, 4), (3, 2)]),
            turn(3, &[(2, 1), (4, 3)]),
        ];
        assert_eq!(
            turn_with_most_home_teams_as_guests(&previous, &remaining),
            Some(2)
        );
        // Ties keep the first candidate.
        assert_eq!(
            turn_with_most_home_teams_as_guests(&previous, &remaining[..2]),
            Some(0)
        );
        assert_eq!(
            turn_with_most_home_teams_as_guests(&previous, &remaining[1..2]),
            None
        );
    }

    #[test]
    fn test_shortest_continuation() {
        // History: 1 home, 2 guest, then 1 home again (turn 1).
        let placed = vec![
            Pairing::new(0, 1, 2),
            Pairing::new(0, 3, 4),
            Pairing::new(1, 1, 3),
            Pairing::new(1, 2, 4),
        ];
        let previous = turn(1, &[(1, 3), (2, 4)]);
        let remaining = vec![
            // 1 home a third time, 4 guest a second time.
            turn(2, &[(1, 4), (2, 3)]),
            // Every previous role flips.
            turn(3, &[(4, 1), (3, 2)]),
        ];
        assert_eq!(
            turn_with_shortest_continuation(&placed, &previous, &remaining),
            Some(1)
        );
    }

    #[test]
    fn test_shortest_continuation_passes_without_overlap() {
        let previous = turn(0, &[(1, 2)]);
        let remaining = vec![turn(1, &[(3, 4)])];
        assert_eq!(
            turn_with_shortest_continuation(&previous.matches, &previous, &remaining),
            None
        );
    }
}
