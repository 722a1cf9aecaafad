//! The 260-day Tzolkin counter.

use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::error::RoundError;
use crate::tzolkin_day::TzolkinDay;

/// Number of days in the full Tzolkin cycle (13 coefficients x 20 days,
/// coprime).
pub const TZOLKIN_DAYS: u16 = 260;

/// A Tzolkin date: a coefficient in 1..=13 paired with one of the 20
/// named days. Either side may be a wildcard.
///
/// The coefficient and the day name advance simultaneously, one step per
/// calendar day, so the compound cycle closes after 260 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tzolkin {
    coefficient: Component<u8>,
    day: Component<TzolkinDay>,
}

impl Tzolkin {
    /// Creates a Tzolkin date, validating the coefficient range.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidTzolkinCoefficient`] if a concrete
    /// coefficient is outside 1..=13.
    pub fn new(
        coefficient: Component<u8>,
        day: Component<TzolkinDay>,
    ) -> Result<Self, RoundError> {
        if let Component::Value(c) = coefficient {
            if !(1..=13).contains(&c) {
                return Err(RoundError::InvalidTzolkinCoefficient { coefficient: c });
            }
        }
        Ok(Self { coefficient, day })
    }

    /// Creates a fully concrete Tzolkin date.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidTzolkinCoefficient`] if `coefficient`
    /// is outside 1..=13.
    pub fn of(coefficient: u8, day: TzolkinDay) -> Result<Self, RoundError> {
        Self::new(Component::Value(coefficient), Component::Value(day))
    }

    /// Creates the Tzolkin date at the given index of the 260-day cycle,
    /// taken modulo 260. Index 0 is 1 Imix.
    pub fn from_index(index: i64) -> Self {
        let i = index.rem_euclid(i64::from(TZOLKIN_DAYS));
        let coefficient = (i % 13) as u8 + 1;
        let day = TzolkinDay::Imix.shift(i);
        Self {
            coefficient: Component::Value(coefficient),
            day: Component::Value(day),
        }
    }

    /// Returns the index of this date within the 260-day cycle, with
    /// 1 Imix at index 0.
    ///
    /// Solved by the Chinese remainder theorem over the coprime moduli
    /// 13 and 20 (17 is the inverse of 13 modulo 20).
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if either side is a wildcard.
    pub fn index(self) -> Result<u16, RoundError> {
        let c = self.coefficient.value().ok_or(RoundError::WildcardDate)?;
        let day = self.day.value().ok_or(RoundError::WildcardDate)?;
        let a = i64::from(c) - 1;
        let b = day.index() as i64;
        let index = a + 13 * ((17 * (b - a)).rem_euclid(20));
        Ok(index as u16)
    }

    /// Returns the date `n` days forward in the cycle (backward for
    /// negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if either side is a wildcard.
    pub fn shift(self, n: i64) -> Result<Self, RoundError> {
        Ok(Self::from_index(i64::from(self.index()?) + n))
    }

    /// Returns the next day of the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if either side is a wildcard.
    pub fn next(self) -> Result<Self, RoundError> {
        self.shift(1)
    }

    /// Returns the coefficient component.
    pub fn coefficient(self) -> Component<u8> {
        self.coefficient
    }

    /// Returns the day component.
    pub fn day(self) -> Component<TzolkinDay> {
        self.day
    }

    /// Returns `true` if either side is a wildcard.
    pub fn is_partial(self) -> bool {
        self.coefficient.is_wildcard() || self.day.is_wildcard()
    }

    /// Wildcard-aware comparison: wildcards match anything.
    pub fn matches(self, other: Self) -> bool {
        self.coefficient.matches(other.coefficient) && self.day.matches(other.day)
    }
}

impl fmt::Display for Tzolkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coefficient, self.day)
    }
}

impl FromStr for Tzolkin {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RoundError::MalformedTzolkin {
            input: s.to_string(),
        };
        let mut parts = s.split_whitespace();
        let coefficient = parts.next().ok_or_else(malformed)?;
        let day = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }
        let coefficient = match coefficient {
            "*" => Component::Wildcard,
            c => Component::Value(c.parse::<u8>().map_err(|_| malformed())?),
        };
        let day = match day {
            "*" => Component::Wildcard,
            name => Component::Value(TzolkinDay::from_name(name)?),
        };
        Self::new(coefficient, day)
    }
}
