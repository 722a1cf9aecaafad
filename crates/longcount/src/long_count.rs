//! Epoch-anchored Long Count dates.

use std::fmt;
use std::str::FromStr;

use baktun_round::{CalendarRound, Component};

use crate::correlation::CorrelationConstant;
use crate::distance::{Digit, DistanceNumber};
use crate::error::LongCountError;
use crate::full_date::FullDate;
use crate::western::{jdn_to_gregorian, jdn_to_julian, WesternDate};

/// One of the nine Lords of the Night, the auxiliary glyph cycle
/// attached to each Long Count position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LordOfNight(u8);

impl LordOfNight {
    /// Returns the glyph number (1..=9).
    pub fn number(self) -> u8 {
        self.0
    }

    fn from_position(position: i64) -> Self {
        Self(((position - 1).rem_euclid(9) + 1) as u8)
    }
}

impl fmt::Display for LordOfNight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

/// A Long Count date: a distance number read as days since the era
/// origin 4 Ajaw 8 Kumk'u, anchored to the Julian Day Number line by a
/// correlation constant.
///
/// The correlation is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LongCount {
    number: DistanceNumber,
    correlation: CorrelationConstant,
}

impl LongCount {
    /// Creates a Long Count from a distance number with the default
    /// (GMT) correlation.
    pub fn new(number: DistanceNumber) -> Self {
        Self::with_correlation(number, CorrelationConstant::default())
    }

    /// Creates a Long Count anchored to the given correlation constant.
    pub fn with_correlation(number: DistanceNumber, correlation: CorrelationConstant) -> Self {
        Self {
            number,
            correlation,
        }
    }

    /// Creates a Long Count from concrete digit values, least
    /// significant (k'in) first, with the default correlation.
    pub fn from_values(values: &[u32]) -> Self {
        Self::new(DistanceNumber::from_values(values))
    }

    /// Creates the canonical Long Count for a Maya day number.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::NegativeDays`] if `days` is negative.
    pub fn from_days(days: i64) -> Result<Self, LongCountError> {
        if days < 0 {
            return Err(LongCountError::NegativeDays { days });
        }
        Ok(Self::new(DistanceNumber::from_days(days)))
    }

    /// Returns the underlying distance number.
    pub fn number(&self) -> &DistanceNumber {
        &self.number
    }

    /// Returns the correlation constant.
    pub fn correlation(&self) -> CorrelationConstant {
        self.correlation
    }

    /// Returns `true` if any digit is a wildcard.
    pub fn is_partial(&self) -> bool {
        self.number.is_partial()
    }

    /// Returns the Maya day number: days since 4 Ajaw 8 Kumk'u.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard.
    pub fn position(&self) -> Result<i64, LongCountError> {
        self.number.position()
    }

    /// Returns the Julian Day Number under this date's correlation.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard, or [`LongCountError::PositionOverflow`] if the shifted
    /// day count exceeds the `i64` range.
    pub fn julian_day(&self) -> Result<i64, LongCountError> {
        self.correlation
            .value()
            .checked_add(self.position()?)
            .ok_or(LongCountError::PositionOverflow)
    }

    /// Returns the proleptic Gregorian date of this position.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard.
    pub fn gregorian(&self) -> Result<WesternDate, LongCountError> {
        Ok(jdn_to_gregorian(self.julian_day()?))
    }

    /// Returns the proleptic Julian calendar date of this position.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard.
    pub fn julian(&self) -> Result<WesternDate, LongCountError> {
        Ok(jdn_to_julian(self.julian_day()?))
    }

    /// Returns the Calendar Round reached by advancing the origin
    /// 4 Ajaw 8 Kumk'u by this position.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard.
    pub fn build_calendar_round(&self) -> Result<CalendarRound, LongCountError> {
        Ok(CalendarRound::from_ordinal(self.position()?))
    }

    /// Returns this Long Count paired with its Calendar Round.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard.
    pub fn build_full_date(&self) -> Result<FullDate, LongCountError> {
        Ok(FullDate::new(self.clone(), self.build_calendar_round()?))
    }

    /// Returns the Lord of the Night glyph for this position.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard.
    pub fn lord_of_night(&self) -> Result<LordOfNight, LongCountError> {
        Ok(LordOfNight::from_position(self.position()?))
    }

    /// Returns the sum of this date and `other`, keeping this date's
    /// correlation.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardArithmetic`] if either operand
    /// contains a wildcard digit.
    pub fn plus(&self, other: &Self) -> Result<Self, LongCountError> {
        Ok(Self::with_correlation(
            self.number.plus(&other.number)?,
            self.correlation,
        ))
    }

    /// Returns the difference of this date and `other`, keeping this
    /// date's correlation.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardArithmetic`] if either operand
    /// contains a wildcard digit.
    pub fn minus(&self, other: &Self) -> Result<Self, LongCountError> {
        Ok(Self::with_correlation(
            self.number.minus(&other.number)?,
            self.correlation,
        ))
    }

    /// Wildcard-aware comparison of the underlying numbers.
    pub fn matches(&self, other: &Self) -> bool {
        self.number.matches(&other.number)
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.number.fmt(f)
    }
}

impl FromStr for LongCount {
    type Err = LongCountError;

    /// Parses a period-separated Long Count, most significant digit
    /// first, with `*` for wildcard digits: `"9.17.0.0.0"` or
    /// `"9.17.*.0.0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LongCountError::MalformedLongCount {
            input: s.to_string(),
        };
        let mut digits: Vec<Digit> = s
            .split('.')
            .map(|token| match token.trim() {
                "*" => Ok(Component::Wildcard),
                t => t
                    .parse::<u32>()
                    .map(Component::Value)
                    .map_err(|_| malformed()),
            })
            .collect::<Result<_, _>>()?;
        digits.reverse();
        Ok(Self::new(DistanceNumber::new(digits)))
    }
}
