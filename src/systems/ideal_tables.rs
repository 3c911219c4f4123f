//! Minimal-break single round-robin tables.
//!
//! Each entry is `(turn, home, guest)` with all three values 1-based; the
//! participant values are positions in the caller's participant list.
//! Even counts reach the lower bound of `N - 2` breaks, odd counts have no
//! breaks and every participant plays exactly `(N - 1) / 2` home matches.
//!
//! The tables are the canonical 1-factorizations of de Werra (1981) with
//! alternating orientation; odd counts use the `N + 1` table with the last
//! position acting as the bye.

/// `(turn, home position, guest position)`, all 1-based.
pub(super) type IdealEntry = (u8, u8, u8);

/// Smallest participant count with a table.
pub(super) const MIN_PARTICIPANTS: usize = 5;
/// Largest participant count with a table.
pub(super) const MAX_PARTICIPANTS: usize = 14;

/// Looks up the table for `participant_count`.
pub(super) fn table(participant_count: usize) -> Option<&'static [IdealEntry]> {
    let table = match participant_count {
        5 => SCHEDULE_5,
        6 => SCHEDULE_6,
        7 => SCHEDULE_7,
        8 => SCHEDULE_8,
        9 => SCHEDULE_9,
        10 => SCHEDULE_10,
        11 => SCHEDULE_11,
        12 => SCHEDULE_12,
        13 => SCHEDULE_13,
        14 => SCHEDULE_14,
        _ => return None,
    };
    Some(table)
}

// 5 participants, 5 turns, 0 breaks.
#[rustfmt::skip]
const SCHEDULE_5: &[IdealEntry] = &[
    (1, 2, 5), (1, 4, 3),
    (2, 3, 1), (2, 5, 4),
    (3, 4, 2), (3, 1, 5),
    (4, 5, 3), (4, 2, 1),
    (5, 1, 4), (5, 3, 2),
];

// 6 participants, 5 turns, 4 breaks.
#[rustfmt::skip]
const SCHEDULE_6: &[IdealEntry] = &[
    (1, 1, 6), (1, 2, 5), (1, 4, 3),
    (2, 6, 2), (2, 3, 1), (2, 5, 4),
    (3, 3, 6), (3, 4, 2), (3, 1, 5),
    (4, 6, 4), (4, 5, 3), (4, 2, 1),
    (5, 5, 6), (5, 1, 4), (5, 3, 2),
];

// 7 participants, 7 turns, 0 breaks.
#[rustfmt::skip]
const SCHEDULE_7: &[IdealEntry] = &[
    (1, 2, 7), (1, 6, 3), (1, 4, 5),
    (2, 3, 1), (2, 7, 4), (2, 5, 6),
    (3, 4, 2), (3, 1, 5), (3, 6, 7),
    (4, 5, 3), (4, 2, 6), (4, 7, 1),
    (5, 6, 4), (5, 3, 7), (5, 1, 2),
    (6, 7, 5), (6, 4, 1), (6, 2, 3),
    (7, 1, 6), (7, 5, 2), (7, 3, 4),
];

// 8 participants, 7 turns, 6 breaks.
#[rustfmt::skip]
const SCHEDULE_8: &[IdealEntry] = &[
    (1, 1, 8), (1, 2, 7), (1, 6, 3), (1, 4, 5),
    (2, 8, 2), (2, 3, 1), (2, 7, 4), (2, 5, 6),
    (3, 3, 8), (3, 4, 2), (3, 1, 5), (3, 6, 7),
    (4, 8, 4), (4, 5, 3), (4, 2, 6), (4, 7, 1),
    (5, 5, 8), (5, 6, 4), (5, 3, 7), (5, 1, 2),
    (6, 8, 6), (6, 7, 5), (6, 4, 1), (6, 2, 3),
    (7, 7, 8), (7, 1, 6), (7, 5, 2), (7, 3, 4),
];

// 9 participants, 9 turns, 0 breaks.
#[rustfmt::skip]
const SCHEDULE_9: &[IdealEntry] = &[
    (1, 2, 9), (1, 8, 3), (1, 4, 7), (1, 6, 5),
    (2, 3, 1), (2, 9, 4), (2, 5, 8), (2, 7, 6),
    (3, 4, 2), (3, 1, 5), (3, 6, 9), (3, 8, 7),
    (4, 5, 3), (4, 2, 6), (4, 7, 1), (4, 9, 8),
    (5, 6, 4), (5, 3, 7), (5, 8, 2), (5, 1, 9),
    (6, 7, 5), (6, 4, 8), (6, 9, 3), (6, 2, 1),
    (7, 8, 6), (7, 5, 9), (7, 1, 4), (7, 3, 2),
    (8, 9, 7), (8, 6, 1), (8, 2, 5), (8, 4, 3),
    (9, 1, 8), (9, 7, 2), (9, 3, 6), (9, 5, 4),
];

// 10 participants, 9 turns, 8 breaks.
#[rustfmt::skip]
const SCHEDULE_10: &[IdealEntry] = &[
    (1, 1, 10), (1, 2, 9), (1, 8, 3), (1, 4, 7), (1, 6, 5),
    (2, 10, 2), (2, 3, 1), (2, 9, 4), (2, 5, 8), (2, 7, 6),
    (3, 3, 10), (3, 4, 2), (3, 1, 5), (3, 6, 9), (3, 8, 7),
    (4, 10, 4), (4, 5, 3), (4, 2, 6), (4, 7, 1), (4, 9, 8),
    (5, 5, 10), (5, 6, 4), (5, 3, 7), (5, 8, 2), (5, 1, 9),
    (6, 10, 6), (6, 7, 5), (6, 4, 8), (6, 9, 3), (6, 2, 1),
    (7, 7, 10), (7, 8, 6), (7, 5, 9), (7, 1, 4), (7, 3, 2),
    (8, 10, 8), (8, 9, 7), (8, 6, 1), (8, 2, 5), (8, 4, 3),
    (9, 9, 10), (9, 1, 8), (9, 7, 2), (9, 3, 6), (9, 5, 4),
];

// 11 participants, 11 turns, 0 breaks.
#[rustfmt::skip]
const SCHEDULE_11: &[IdealEntry] = &[
    (1, 2, 11), (1, 10, 3), (1, 4, 9), (1, 8, 5), (1, 6, 7),
    (2, 3, 1), (2, 11, 4), (2, 5, 10), (2, 9, 6), (2, 7, 8),
    (3, 4, 2), (3, 1, 5), (3, 6, 11), (3, 10, 7), (3, 8, 9),
    (4, 5, 3), (4, 2, 6), (4, 7, 1), (4, 11, 8), (4, 9, 10),
    (5, 6, 4), (5, 3, 7), (5, 8, 2), (5, 1, 9), (5, 10, 11),
    (6, 7, 5), (6, 4, 8), (6, 9, 3), (6, 2, 10), (6, 11, 1),
    (7, 8, 6), (7, 5, 9), (7, 10, 4), (7, 3, 11), (7, 1, 2),
    (8, 9, 7), (8, 6, 10), (8, 11, 5), (8, 4, 1), (8, 2, 3),
    (9, 10, 8), (9, 7, 11), (9, 1, 6), (9, 5, 2), (9, 3, 4),
    (10, 11, 9), (10, 8, 1), (10, 2, 7), (10, 6, 3), (10, 4, 5),
    (11, 1, 10), (11, 9, 2), (11, 3, 8), (11, 7, 4), (11, 5, 6),
];

// 12 participants, 11 turns, 10 breaks.
#[rustfmt::skip]
const SCHEDULE_12: &[IdealEntry] = &[
    (1, 1, 12), (1, 2, 11), (1, 10, 3), (1, 4, 9), (1, 8, 5), (1, 6, 7),
    (2, 12, 2), (2, 3, 1), (2, 11, 4), (2, 5, 10), (2, 9, 6), (2, 7, 8),
    (3, 3, 12), (3, 4, 2), (3, 1, 5), (3, 6, 11), (3, 10, 7), (3, 8, 9),
    (4, 12, 4), (4, 5, 3), (4, 2, 6), (4, 7, 1), (4, 11, 8), (4, 9, 10),
    (5, 5, 12), (5, 6, 4), (5, 3, 7), (5, 8, 2), (5, 1, 9), (5, 10, 11),
    (6, 12, 6), (6, 7, 5), (6, 4, 8), (6, 9, 3), (6, 2, 10), (6, 11, 1),
    (7, 7, 12), (7, 8, 6), (7, 5, 9), (7, 10, 4), (7, 3, 11), (7, 1, 2),
    (8, 12, 8), (8, 9, 7), (8, 6, 10), (8, 11, 5), (8, 4, 1), (8, 2, 3),
    (9, 9, 12), (9, 10, 8), (9, 7, 11), (9, 1, 6), (9, 5, 2), (9, 3, 4),
    (10, 12, 10), (10, 11, 9), (10, 8, 1), (10, 2, 7), (10, 6, 3), (10, 4, 5),
    (11, 11, 12), (11, 1, 10), (11, 9, 2), (11, 3, 8), (11, 7, 4), (11, 5, 6),
];

// 13 participants, 13 turns, 0 breaks.
#[rustfmt::skip]
const SCHEDULE_13: &[IdealEntry] = &[
    (1, 2, 13), (1, 12, 3), (1, 4, 11), (1, 10, 5), (1, 6, 9), (1, 8, 7),
    (2, 3, 1), (2, 13, 4), (2, 5, 12), (2, 11, 6), (2, 7, 10), (2, 9, 8),
    (3, 4, 2), (3, 1, 5), (3, 6, 13), (3, 12, 7), (3, 8, 11), (3, 10, 9),
    (4, 5, 3), (4, 2, 6), (4, 7, 1), (4, 13, 8), (4, 9, 12), (4, 11, 10),
    (5, 6, 4), (5, 3, 7), (5, 8, 2), (5, 1, 9), (5, 10, 13), (5, 12, 11),
    (6, 7, 5), (6, 4, 8), (6, 9, 3), (6, 2, 10), (6, 11, 1), (6, 13, 12),
    (7, 8, 6), (7, 5, 9), (7, 10, 4), (7, 3, 11), (7, 12, 2), (7, 1, 13),
    (8, 9, 7), (8, 6, 10), (8, 11, 5), (8, 4, 12), (8, 13, 3), (8, 2, 1),
    (9, 10, 8), (9, 7, 11), (9, 12, 6), (9, 5, 13), (9, 1, 4), (9, 3, 2),
    (10, 11, 9), (10, 8, 12), (10, 13, 7), (10, 6, 1), (10, 2, 5), (10, 4, 3),
    (11, 12, 10), (11, 9, 13), (11, 1, 8), (11, 7, 2), (11, 3, 6), (11, 5, 4),
    (12, 13, 11), (12, 10, 1), (12, 2, 9), (12, 8, 3), (12, 4, 7), (12, 6, 5),
    (13, 1, 12), (13, 11, 2), (13, 3, 10), (13, 9, 4), (13, 5, 8), (13, 7, 6),
];

// 14 participants, 13 turns, 12 breaks.
#[rustfmt::skip]
const SCHEDULE_14: &[IdealEntry] = &[
    (1, 1, 14), (1, 2, 13), (1, 12, 3), (1, 4, 11), (1, 10, 5), (1, 6, 9), (1, 8, 7),
    (2, 14, 2), (2, 3, 1), (2, 13, 4), (2, 5, 12), (2, 11, 6), (2, 7, 10), (2, 9, 8),
    (3, 3, 14), (3, 4, 2), (3, 1, 5), (3, 6, 13), (3, 12, 7), (3, 8, 11), (3, 10, 9),
    (4, 14, 4), (4, 5, 3), (4, 2, 6), (4, 7, 1), (4, 13, 8), (4, 9, 12), (4, 11, 10),
    (5, 5, 14), (5, 6, 4), (5, 3, 7), (5, 8, 2), (5, 1, 9), (5, 10, 13), (5, 12, 11),
    (6, 14, 6), (6, 7, 5), (6, 4, 8), (6, 9, 3), (6, 2, 10), (6, 11, 1), (6, 13, 12),
    (7, 7, 14), (7, 8, 6), (7, 5, 9), (7, 10, 4), (7, 3, 11), (7, 12, 2), (7, 1, 13),
    (8, 14, 8), (8, 9, 7), (8, 6, 10), (8, 11, 5), (8, 4, 12), (8, 13, 3), (8, 2, 1),
    (9, 9, 14), (9, 10, 8), (9, 7, 11), (9, 12, 6), (9, 5, 13), (9, 1, 4), (9, 3, 2),
    (10, 14, 10), (10, 11, 9), (10, 8, 12), (10, 13, 7), (10, 6, 1), (10, 2, 5), (10, 4, 3),
    (11, 11, 14), (11, 12, 10), (11, 9, 13), (11, 1, 8), (11, 7, 2), (11, 3, 6), (11, 5, 4),
    (12, 14, 12), (12, 13, 11), (12, 10, 1), (12, 2, 9), (12, 8, 3), (12, 4, 7), (12, 6, 5),
    (13, 13, 14), (13, 1, 12), (13, 11, 2), (13, 3, 10), (13, 9, 4), (13, 5, 8), (13, 7, 6),
];
