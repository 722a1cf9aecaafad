//! The 365-day Haab counter.

use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::error::RoundError;
use crate::haab_month::HaabMonth;

/// Number of days in the full Haab cycle (18 months of 20 days plus the
/// 5-day Wayeb).
pub const HAAB_DAYS: u16 = 365;

/// A Haab date: a day coefficient paired with one of the 19 named
/// months. Either side may be a wildcard.
///
/// Coefficients run 0..=19 in the regular months and 0..=4 in Wayeb.
/// Advancing past the last day of a month rolls the coefficient back to
/// 0 in the next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Haab {
    coefficient: Component<u8>,
    month: Component<HaabMonth>,
}

impl Haab {
    /// Creates a Haab date, validating the coefficient against the
    /// month's day count.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidHaabCoefficient`] if a concrete
    /// coefficient is out of range for the month (0..=19, or 0..=4 when
    /// the month is Wayeb; 0..=19 when the month is a wildcard).
    pub fn new(
        coefficient: Component<u8>,
        month: Component<HaabMonth>,
    ) -> Result<Self, RoundError> {
        if let Component::Value(c) = coefficient {
            // With an unknown month only the widest range can be checked.
            let max = match month {
                Component::Value(m) => m.days() - 1,
                Component::Wildcard => 19,
            };
            if c > max {
                return Err(RoundError::InvalidHaabCoefficient {
                    coefficient: c,
                    month,
                    max,
                });
            }
        }
        Ok(Self { coefficient, month })
    }

    /// Creates a fully concrete Haab date.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidHaabCoefficient`] if `coefficient`
    /// is out of range for `month`.
    pub fn of(coefficient: u8, month: HaabMonth) -> Result<Self, RoundError> {
        Self::new(Component::Value(coefficient), Component::Value(month))
    }

    /// Creates the Haab date at the given day of the 365-day year, taken
    /// modulo 365. Day 0 is 0 Pop.
    pub fn from_day_of_year(day: i64) -> Self {
        let d = day.rem_euclid(i64::from(HAAB_DAYS)) as u16;
        let (month, coefficient) = if d < 360 {
            let month = HaabMonth::Pop.shift(i64::from(d / 20));
            (month, (d % 20) as u8)
        } else {
            (HaabMonth::Wayeb, (d - 360) as u8)
        };
        Self {
            coefficient: Component::Value(coefficient),
            month: Component::Value(month),
        }
    }

    /// Returns the day of the 365-day year for this date, with 0 Pop at
    /// day 0.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if either side is a wildcard.
    pub fn day_of_year(self) -> Result<u16, RoundError> {
        let c = self.coefficient.value().ok_or(RoundError::WildcardDate)?;
        let month = self.month.value().ok_or(RoundError::WildcardDate)?;
        Ok(month.start_day() + u16::from(c))
    }

    /// Returns the date `n` days forward in the year (backward for
    /// negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if either side is a wildcard.
    pub fn shift(self, n: i64) -> Result<Self, RoundError> {
        Ok(Self::from_day_of_year(i64::from(self.day_of_year()?) + n))
    }

    /// Returns the next day of the year.
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

    /// Returns the month component.
    pub fn month(self) -> Component<HaabMonth> {
        self.month
    }

    /// Returns `true` if either side is a wildcard.
    pub fn is_partial(self) -> bool {
        self.coefficient.is_wildcard() || self.month.is_wildcard()
    }

    /// Wildcard-aware comparison: wildcards match anything.
    pub fn matches(self, other: Self) -> bool {
        self.coefficient.matches(other.coefficient) && self.month.matches(other.month)
    }
}

impl fmt::Display for Haab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coefficient, self.month)
    }
}

impl FromStr for Haab {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RoundError::MalformedHaab {
            input: s.to_string(),
        };
        let mut parts = s.split_whitespace();
        let coefficient = parts.next().ok_or_else(malformed)?;
        let month = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }
        let coefficient = match coefficient {
            "*" => Component::Wildcard,
            c => Component::Value(c.parse::<u8>().map_err(|_| malformed())?),
        };
        let month = match month {
            "*" => Component::Wildcard,
            name => Component::Value(HaabMonth::from_name(name)?),
        };
        Self::new(coefficient, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let haab = Haab::of(8, HaabMonth::Kumku).unwrap();
        assert_eq!(haab.coefficient(), Component::Value(8));
        assert_eq!(haab.month(), Component::Value(HaabMonth::Kumku));
    }

    #[test]
    fn new_invalid_coefficient() {
        assert_eq!(
            Haab::of(20, HaabMonth::Pop).unwrap_err(),
            RoundError::InvalidHaabCoefficient {
                coefficient: 20,
                month: Component::Value(HaabMonth::Pop),
                max: 19,
            }
        );
    }

    #[test]
    fn new_wayeb_range_is_short() {
        assert!(Haab::of(4, HaabMonth::Wayeb).is_ok());
        assert_eq!(
            Haab::of(5, HaabMonth::Wayeb).unwrap_err(),
            RoundError::InvalidHaabCoefficient {
                coefficient: 5,
                month: Component::Value(HaabMonth::Wayeb),
                max: 4,
            }
        );
    }

    #[test]
    fn new_wildcard_month_checks_widest_range() {
        assert!(Haab::new(Component::Value(19), Component::Wildcard).is_ok());
        assert!(Haab::new(Component::Value(20), Component::Wildcard).is_err());
    }

    #[test]
    fn day_of_year_zero_pop() {
        assert_eq!(Haab::of(0, HaabMonth::Pop).unwrap().day_of_year().unwrap(), 0);
    }

    #[test]
    fn day_of_year_eight_kumku() {
        // Kumk'u is the 18th month, starting at day 340.
        let haab = Haab::of(8, HaabMonth::Kumku).unwrap();
        assert_eq!(haab.day_of_year().unwrap(), 348);
    }

    #[test]
    fn day_of_year_roundtrip_full_year() {
        for d in 0..i64::from(HAAB_DAYS) {
            let haab = Haab::from_day_of_year(d);
            assert_eq!(i64::from(haab.day_of_year().unwrap()), d, "day {d}");
        }
    }

    #[test]
    fn day_of_year_on_wildcard_fails() {
        let haab = Haab::new(Component::Wildcard, Component::Value(HaabMonth::Pop)).unwrap();
        assert_eq!(haab.day_of_year().unwrap_err(), RoundError::WildcardDate);
    }

    #[test]
    fn shift_rolls_month_boundary() {
        let haab = Haab::of(19, HaabMonth::Pop).unwrap();
        assert_eq!(haab.next().unwrap(), Haab::of(0, HaabMonth::Wo).unwrap());
    }

    #[test]
    fn shift_rolls_wayeb_to_pop() {
        let haab = Haab::of(4, HaabMonth::Wayeb).unwrap();
        assert_eq!(haab.next().unwrap(), Haab::of(0, HaabMonth::Pop).unwrap());
    }

    #[test]
    fn shift_365_is_identity() {
        let haab = Haab::of(13, HaabMonth::Mol).unwrap();
        assert_eq!(haab.shift(365).unwrap(), haab);
        assert_eq!(haab.shift(-365).unwrap(), haab);
    }

    #[test]
    fn shift_into_wayeb() {
        let haab = Haab::of(19, HaabMonth::Kumku).unwrap();
        assert_eq!(haab.next().unwrap(), Haab::of(0, HaabMonth::Wayeb).unwrap());
    }

    #[test]
    fn matches_wildcard_month() {
        let pattern = Haab::new(Component::Value(8), Component::Wildcard).unwrap();
        assert!(pattern.matches(Haab::of(8, HaabMonth::Kumku).unwrap()));
        assert!(!pattern.matches(Haab::of(9, HaabMonth::Kumku).unwrap()));
    }

    #[test]
    fn display() {
        assert_eq!(Haab::of(8, HaabMonth::Kumku).unwrap().to_string(), "8 Kumk'u");
        let partial = Haab::new(Component::Wildcard, Component::Value(HaabMonth::Pop)).unwrap();
        assert_eq!(partial.to_string(), "* Pop");
    }

    #[test]
    fn parse_concrete() {
        let haab: Haab = "8 Kumk'u".parse().unwrap();
        assert_eq!(haab, Haab::of(8, HaabMonth::Kumku).unwrap());
    }

    #[test]
    fn parse_wildcards() {
        let haab: Haab = "* Pop".parse().unwrap();
        assert!(haab.coefficient().is_wildcard());
        let haab: Haab = "3 *".parse().unwrap();
        assert!(haab.month().is_wildcard());
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("Kumk'u".parse::<Haab>().is_err());
        assert!("8".parse::<Haab>().is_err());
        assert!("8 Kumk'u 9".parse::<Haab>().is_err());
    }
}
