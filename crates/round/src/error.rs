//! Error types for the baktun-round crate.

use crate::component::Component;
use crate::haab_month::HaabMonth;
use crate::tzolkin_day::TzolkinDay;

/// Error type for all fallible operations in the baktun-round crate.
///
/// This enum covers validation failures for Tzolkin and Haab
/// coefficients, day and month names, the Calendar Round cross-validity
/// constraint, and operations that require a fully specified date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoundError {
    /// Returned when a Tzolkin coefficient is outside the valid range 1..=13.
    #[error("tzolkin coefficient must be 1..=13, got {coefficient}")]
    InvalidTzolkinCoefficient {
        /// The invalid coefficient that was provided.
        coefficient: u8,
    },

    /// Returned when a Haab coefficient exceeds the day count of its month.
    #[error("haab coefficient must be 0..={max} for {month}, got {coefficient}")]
    InvalidHaabCoefficient {
        /// The invalid coefficient that was provided.
        coefficient: u8,
        /// The month for which the coefficient is invalid (a wildcard
        /// month admits the widest range).
        month: Component<HaabMonth>,
        /// The maximum valid coefficient for the given month.
        max: u8,
    },

    /// Returned when a Haab coefficient falls outside the residue class
    /// permitted by the Tzolkin day of the same Calendar Round.
    #[error("haab coefficient {coefficient} cannot fall on tzolkin day {day}")]
    ForbiddenHaabCoefficient {
        /// The Tzolkin day of the rejected pairing.
        day: TzolkinDay,
        /// The Haab coefficient of the rejected pairing.
        coefficient: u8,
    },

    /// Returned when a day position is outside the valid range 1..=20.
    #[error("tzolkin day position must be 1..=20, got {position}")]
    InvalidDayPosition {
        /// The invalid position that was provided.
        position: u8,
    },

    /// Returned when a month position is outside the valid range 1..=19.
    #[error("haab month position must be 1..=19, got {position}")]
    InvalidMonthPosition {
        /// The invalid position that was provided.
        position: u8,
    },

    /// Returned when a day name is not one of the 20 canonical spellings.
    #[error("unknown tzolkin day name: {name:?}")]
    UnknownDayName {
        /// The unrecognized name.
        name: String,
    },

    /// Returned when a month name is not one of the 19 canonical spellings.
    #[error("unknown haab month name: {name:?}")]
    UnknownMonthName {
        /// The unrecognized name.
        name: String,
    },

    /// Returned when a day count is requested for a date containing wildcards.
    #[error("cannot compute a day count for a date containing wildcards")]
    WildcardDate,

    /// Returned when a Tzolkin date string cannot be parsed.
    #[error("malformed tzolkin date: {input:?} (expected \"<coefficient> <day>\")")]
    MalformedTzolkin {
        /// The rejected input.
        input: String,
    },

    /// Returned when a Haab date string cannot be parsed.
    #[error("malformed haab date: {input:?} (expected \"<coefficient> <month>\")")]
    MalformedHaab {
        /// The rejected input.
        input: String,
    },

    /// Returned when a Calendar Round string cannot be parsed.
    #[error("malformed calendar round: {input:?} (expected \"<tzolkin> <haab>\")")]
    MalformedCalendarRound {
        /// The rejected input.
        input: String,
    },
}
