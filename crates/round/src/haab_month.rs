//! The 19-month Haab name ring.

use std::fmt;
use std::str::FromStr;

use crate::error::RoundError;

/// One of the 19 named Haab months, in cycle order.
///
/// The first 18 months hold 20 days each (coefficients 0..=19); the
/// closing Wayeb holds only 5 (coefficients 0..=4). Positions are
/// 1-based (Pop = 1, Wayeb = 19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaabMonth {
    Pop,
    Wo,
    Sip,
    Sotz,
    Sek,
    Xul,
    Yaxkin,
    Mol,
    Chen,
    Yax,
    Sak,
    Keh,
    Mak,
    Kankin,
    Muwan,
    Pax,
    Kayab,
    Kumku,
    Wayeb,
}

/// Canonical month name spellings, indexed by 0-based cycle position.
#[rustfmt::skip]
pub(crate) const MONTH_NAMES: [&str; 19] = [
    "Pop", "Wo'", "Sip", "Sotz'", "Sek",
    "Xul", "Yaxk'in", "Mol", "Ch'en", "Yax",
    "Sak'", "Keh", "Mak", "K'ank'in", "Muwan",
    "Pax", "K'ayab", "Kumk'u", "Wayeb",
];

/// All months in cycle order, for position-indexed lookup.
#[rustfmt::skip]
const MONTHS: [HaabMonth; 19] = [
    HaabMonth::Pop, HaabMonth::Wo, HaabMonth::Sip, HaabMonth::Sotz,
    HaabMonth::Sek, HaabMonth::Xul, HaabMonth::Yaxkin, HaabMonth::Mol,
    HaabMonth::Chen, HaabMonth::Yax, HaabMonth::Sak, HaabMonth::Keh,
    HaabMonth::Mak, HaabMonth::Kankin, HaabMonth::Muwan, HaabMonth::Pax,
    HaabMonth::Kayab, HaabMonth::Kumku, HaabMonth::Wayeb,
];

impl HaabMonth {
    /// Creates a month from its 1-based cycle position.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidMonthPosition`] if `position` is not
    /// in 1..=19.
    pub fn from_position(position: u8) -> Result<Self, RoundError> {
        if !(1..=19).contains(&position) {
            return Err(RoundError::InvalidMonthPosition { position });
        }
        Ok(MONTHS[position as usize - 1])
    }

    /// Creates a month from its canonical name spelling.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::UnknownMonthName`] if `name` is not one of
    /// the 19 canonical spellings.
    pub fn from_name(name: &str) -> Result<Self, RoundError> {
        MONTH_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| MONTHS[i])
            .ok_or_else(|| RoundError::UnknownMonthName {
                name: name.to_string(),
            })
    }

    /// Returns the 1-based cycle position (Pop = 1, Wayeb = 19).
    pub fn position(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the 0-based index suitable for array indexing.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Returns the canonical name spelling.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Returns the number of days in this month: 20, or 5 for Wayeb.
    pub fn days(self) -> u8 {
        match self {
            HaabMonth::Wayeb => 5,
            _ => 20,
        }
    }

    /// Returns the Haab day-of-year on which this month starts (0..=360).
    ///
    /// Every regular month spans 20 days, so month `i` starts at day
    /// `20 * i`; Wayeb starts at day 360.
    pub(crate) fn start_day(self) -> u16 {
        self.index() as u16 * 20
    }

    /// Returns the month `n` steps forward in the cycle (backward for
    /// negative `n`), wrapping modulo 19.
    pub fn shift(self, n: i64) -> Self {
        let index = (self.index() as i64 + n).rem_euclid(19) as usize;
        MONTHS[index]
    }

    /// Returns the cyclic successor of this month.
    pub fn next(self) -> Self {
        self.shift(1)
    }
}

impl fmt::Display for HaabMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HaabMonth {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_position_valid() {
        assert_eq!(HaabMonth::from_position(1).unwrap(), HaabMonth::Pop);
        assert_eq!(HaabMonth::from_position(18).unwrap(), HaabMonth::Kumku);
        assert_eq!(HaabMonth::from_position(19).unwrap(), HaabMonth::Wayeb);
    }

    #[test]
    fn from_position_invalid() {
        assert_eq!(
            HaabMonth::from_position(0).unwrap_err(),
            RoundError::InvalidMonthPosition { position: 0 }
        );
        assert_eq!(
            HaabMonth::from_position(20).unwrap_err(),
            RoundError::InvalidMonthPosition { position: 20 }
        );
    }

    #[test]
    fn from_name_valid() {
        assert_eq!(HaabMonth::from_name("Pop").unwrap(), HaabMonth::Pop);
        assert_eq!(HaabMonth::from_name("Kumk'u").unwrap(), HaabMonth::Kumku);
        assert_eq!(HaabMonth::from_name("Wayeb").unwrap(), HaabMonth::Wayeb);
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(
            HaabMonth::from_name("Cumku").unwrap_err(),
            RoundError::UnknownMonthName {
                name: "Cumku".to_string(),
            }
        );
    }

    #[test]
    fn position_roundtrip() {
        for p in 1..=19u8 {
            let month = HaabMonth::from_position(p).unwrap();
            assert_eq!(month.position(), p);
            assert_eq!(HaabMonth::from_name(month.name()).unwrap(), month);
        }
    }

    #[test]
    fn wayeb_is_short() {
        assert_eq!(HaabMonth::Wayeb.days(), 5);
        for p in 1..=18u8 {
            assert_eq!(HaabMonth::from_position(p).unwrap().days(), 20);
        }
    }

    #[test]
    fn month_lengths_sum_to_365() {
        let total: u16 = MONTHS.iter().map(|m| u16::from(m.days())).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn start_day_table_integrity() {
        for w in MONTHS.windows(2) {
            assert_eq!(
                w[0].start_day() + u16::from(w[0].days()),
                w[1].start_day(),
                "start_day mismatch after {}",
                w[0]
            );
        }
        assert_eq!(HaabMonth::Wayeb.start_day(), 360);
    }

    #[test]
    fn shift_wraps() {
        assert_eq!(HaabMonth::Kumku.shift(1), HaabMonth::Wayeb);
        assert_eq!(HaabMonth::Wayeb.shift(1), HaabMonth::Pop);
        assert_eq!(HaabMonth::Pop.shift(-1), HaabMonth::Wayeb);
        assert_eq!(HaabMonth::Pop.shift(19), HaabMonth::Pop);
    }

    #[test]
    fn next_is_shift_one() {
        assert_eq!(HaabMonth::Pax.next(), HaabMonth::Kayab);
    }

    #[test]
    fn display_uses_canonical_spelling() {
        assert_eq!(HaabMonth::Yaxkin.to_string(), "Yaxk'in");
        assert_eq!(HaabMonth::Kumku.to_string(), "Kumk'u");
    }

    #[test]
    fn parse_from_str() {
        let month: HaabMonth = "Ch'en".parse().unwrap();
        assert_eq!(month, HaabMonth::Chen);
        assert!("chen".parse::<HaabMonth>().is_err());
    }
}
