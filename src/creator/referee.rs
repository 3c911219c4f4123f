//! Referee assignment.

use std::collections::{HashMap, HashSet};

use crate::error::ScheduleError;
use crate::models::{Pairing, Participant, RefereeType};

/// Picks a referee for every pairing according to `referee_type`.
///
/// For [`RefereeType::OtherFromRound`] the candidates of a match are all
/// participants except its two players. Preference, in order:
/// 1. idle in that turn,
/// 2. not yet refereeing in that turn,
/// 3. fewest referee duties so far,
/// 4. earliest position in `participants`.
///
/// A participant who plays in a turn only referees that turn when nobody
/// else is free. With an odd count the single idle participant therefore
/// referees every match of its bye turn; duties are spread across turns,
/// not within one.
pub(super) fn assign_referees<P: Participant>(
    pairings: &[Pairing<P>],
    participants: &[P],
    referee_type: RefereeType,
) -> Result<Vec<Option<P>>, ScheduleError> {
    match referee_type {
        RefereeType::None => Ok(vec![None; pairings.len()]),
        RefereeType::Home => Ok(pairings.iter().map(|m| Some(m.home.clone())).collect()),
        RefereeType::Guest => Ok(pairings.iter().map(|m| Some(m.guest.clone())).collect()),
        RefereeType::OtherFromRound => other_from_round(pairings, participants),
    }
}

fn other_from_round<P: Participant>(
    pairings: &[Pairing<P>],
    participants: &[P],
) -> Result<Vec<Option<P>>, ScheduleError> {
    let mut playing: HashMap<usize, HashSet<&P>> = HashMap::new();
    for m in pairings {
        let turn = playing.entry(m.turn).or_default();
        turn.insert(&m.home);
        turn.insert(&m.guest);
    }

    let mut duties: HashMap<&P, usize> = HashMap::new();
    let mut refereeing: HashMap<usize, HashSet<&P>> = HashMap::new();
    let mut referees = Vec::with_capacity(pairings.len());

    for m in pairings {
        let busy = &playing[&m.turn];
        let assigned = refereeing.entry(m.turn).or_default();

        let referee = participants
            .iter()
            .enumerate()
            .filter(|(_, p)| !m.involves(p))
            .min_by_key(|&(position, p)| {
                (
                    busy.contains(p),
                    assigned.contains(p),
                    duties.get(p).copied().unwrap_or(0),
                    position,
                )
            })
            .map(|(_, p)| p)
            .ok_or(ScheduleError::NoRefereeAvailable { turn: m.turn + 1 })?;

        assigned.insert(referee);
        *duties.entry(referee).or_insert(0) += 1;
        referees.push(Some(referee.clone()));
    }

    Ok(referees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(turn: usize, home: i64, guest: i64) -> Pairing<i64> {
        Pairing::new(turn, home, guest)
    }

    #[test]
    fn test_none_home_guest() {
        let pairings = vec![p(0, 1, 2), p(1, 2, 3)];
        let participants = [1, 2, 3];
        assert_eq!(
            assign_referees(&pairings, &participants, RefereeType::None).unwrap(),
            vec![None, None]
        );
        assert_eq!(
            assign_referees(&pairings, &participants, RefereeType::Home).unwrap(),
            vec![Some(1), Some(2)]
        );
        assert_eq!(
            assign_referees(&pairings, &participants, RefereeType::Guest).unwrap(),
            vec![Some(2), Some(3)]
        );
    }

    #[test]
    fn test_idle_participant_preferred() {
        let pairings = vec![p(0, 2, 5), p(0, 4, 3), p(1, 3, 1), p(1, 5, 4)];
        let referees =
            assign_referees(&pairings, &[1, 2, 3, 4, 5], RefereeType::OtherFromRound).unwrap();
        assert_eq!(referees, vec![Some(1), Some(1), Some(2), Some(2)]);
    }

    #[test]
    fn test_idle_participant_takes_whole_turn() {
        // Turn 0 of seven participants: 7 is idle and outranks 1, who plays
        // but has not refereed yet.
        let pairings = vec![p(0, 2, 3), p(0, 4, 5), p(0, 6, 1)];
        let referees =
            assign_referees(&pairings, &[1, 2, 3, 4, 5, 6, 7], RefereeType::OtherFromRound)
                .unwrap();
        assert_eq!(referees, vec![Some(7), Some(7), Some(7)]);
    }

    #[test]
    fn test_duties_spread_without_idle_participants() {
        let pairings = vec![p(0, 2, 1), p(0, 3, 4), p(1, 1, 3), p(1, 4, 2)];
        let referees =
            assign_referees(&pairings, &[1, 2, 3, 4], RefereeType::OtherFromRound).unwrap();
        assert_eq!(referees, vec![Some(3), Some(1), Some(2), Some(1)]);
    }

    #[test]
    fn test_two_participants_have_no_referee() {
        let err = assign_referees(&[p(0, 1, 2)], &[1, 2], RefereeType::OtherFromRound).unwrap_err();
        assert_eq!(err, ScheduleError::NoRefereeAvailable { turn: 1 });
    }
}
