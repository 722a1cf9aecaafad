//! Iteration over the full Calendar Round cycle.

use crate::calendar_round::{CalendarRound, CALENDAR_ROUND_DAYS};

/// Iterator over all 18,980 Calendar Round positions, starting at the
/// origin 4 Ajaw 8 Kumk'u.
///
/// Construct a fresh iterator per scan; there is no shared cursor state
/// to reset.
#[derive(Debug, Clone)]
pub struct CalendarRoundIter {
    next_ordinal: u32,
}

/// Returns an iterator over the full Calendar Round cycle, anchored at
/// the origin.
pub fn cycle() -> CalendarRoundIter {
    CalendarRoundIter { next_ordinal: 0 }
}

impl Iterator for CalendarRoundIter {
    type Item = CalendarRound;

    fn next(&mut self) -> Option<CalendarRound> {
        if self.next_ordinal >= CALENDAR_ROUND_DAYS {
            return None;
        }
        let cr = CalendarRound::from_ordinal(i64::from(self.next_ordinal));
        self.next_ordinal += 1;
        Some(cr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (CALENDAR_ROUND_DAYS - self.next_ordinal) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CalendarRoundIter {}
