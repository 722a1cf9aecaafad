//! Long Counts paired with their Calendar Round.

use std::fmt;

use baktun_round::CalendarRound;

use crate::long_count::LongCount;

/// A Long Count together with a Calendar Round.
///
/// The pair is not required to be consistent: solver patterns carry
/// partial counts next to partial rounds. [`LongCount::build_full_date`]
/// produces consistent pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullDate {
    long_count: LongCount,
    round: CalendarRound,
}

impl FullDate {
    /// Pairs a Long Count with a Calendar Round.
    pub fn new(long_count: LongCount, round: CalendarRound) -> Self {
        Self { long_count, round }
    }

    /// Returns the Long Count half.
    pub fn long_count(&self) -> &LongCount {
        &self.long_count
    }

    /// Returns the Calendar Round half.
    pub fn round(&self) -> CalendarRound {
        self.round
    }

    /// Returns `true` if either half contains a wildcard.
    pub fn is_partial(&self) -> bool {
        self.long_count.is_partial() || self.round.is_partial()
    }

    /// Wildcard-aware comparison: both halves must match.
    pub fn matches(&self, other: &Self) -> bool {
        self.long_count.matches(&other.long_count) && self.round.matches(other.round)
    }
}

impl fmt::Display for FullDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.long_count, self.round)
    }
}
