//! Error types for the baktun-longcount crate.

use baktun_round::RoundError;

/// Error type for all fallible operations in the baktun-longcount crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LongCountError {
    /// Returned when a position or day count is requested for a number
    /// containing wildcard digits.
    #[error("cannot compute the position of a number containing wildcards")]
    WildcardPosition,

    /// Returned when arithmetic is attempted on a number containing
    /// wildcard digits.
    #[error("cannot perform arithmetic on a number containing wildcards")]
    WildcardArithmetic,

    /// Returned when a day count exceeds the representable range.
    #[error("distance number exceeds the representable day range")]
    PositionOverflow,

    /// Returned when a negative Maya day number is passed to a
    /// from-days constructor.
    #[error("maya day number must be non-negative, got {days}")]
    NegativeDays {
        /// The rejected day count.
        days: i64,
    },

    /// Returned when a correlation constant name is not in the registry.
    #[error("unknown correlation constant: {name:?}")]
    UnknownCorrelation {
        /// The unrecognized name.
        name: String,
    },

    /// Returned when a Long Count string cannot be parsed.
    #[error("malformed long count: {input:?} (expected period-separated digits, e.g. \"9.17.0.0.0\")")]
    MalformedLongCount {
        /// The rejected input.
        input: String,
    },

    /// A Calendar Round operation failed while deriving or matching the
    /// round for a Long Count.
    #[error(transparent)]
    Round(#[from] RoundError),
}
