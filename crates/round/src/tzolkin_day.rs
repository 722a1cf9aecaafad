//! The 20-day Tzolkin name ring.

use std::fmt;
use std::str::FromStr;

use crate::error::RoundError;

/// One of the 20 named Tzolkin days, in cycle order.
///
/// Positions are 1-based (Imix = 1, Ajaw = 20) to match the
/// conventional day tables; `shift` wraps from Ajaw back to Imix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TzolkinDay {
    Imix,
    Ik,
    Akbal,
    Kan,
    Chikchan,
    Kimi,
    Manik,
    Lamat,
    Muluk,
    Ok,
    Chuwen,
    Eb,
    Ben,
    Ix,
    Men,
    Kib,
    Kaban,
    Etznab,
    Kawak,
    Ajaw,
}

/// Canonical day name spellings, indexed by 0-based cycle position.
#[rustfmt::skip]
pub(crate) const DAY_NAMES: [&str; 20] = [
    "Imix", "Ik'", "Ak'bal", "K'an", "Chikchan",
    "Kimi", "Manik'", "Lamat", "Muluk", "Ok",
    "Chuwen", "Eb", "Ben", "Ix", "Men",
    "Kib", "Kaban", "Etz'nab", "Kawak", "Ajaw",
];

/// All days in cycle order, for position-indexed lookup.
#[rustfmt::skip]
const DAYS: [TzolkinDay; 20] = [
    TzolkinDay::Imix, TzolkinDay::Ik, TzolkinDay::Akbal, TzolkinDay::Kan,
    TzolkinDay::Chikchan, TzolkinDay::Kimi, TzolkinDay::Manik, TzolkinDay::Lamat,
    TzolkinDay::Muluk, TzolkinDay::Ok, TzolkinDay::Chuwen, TzolkinDay::Eb,
    TzolkinDay::Ben, TzolkinDay::Ix, TzolkinDay::Men, TzolkinDay::Kib,
    TzolkinDay::Kaban, TzolkinDay::Etznab, TzolkinDay::Kawak, TzolkinDay::Ajaw,
];

impl TzolkinDay {
    /// Creates a day from its 1-based cycle position.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidDayPosition`] if `position` is not
    /// in 1..=20.
    pub fn from_position(position: u8) -> Result<Self, RoundError> {
        if !(1..=20).contains(&position) {
            return Err(RoundError::InvalidDayPosition { position });
        }
        Ok(DAYS[position as usize - 1])
    }

    /// Creates a day from its canonical name spelling.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::UnknownDayName`] if `name` is not one of
    /// the 20 canonical spellings.
    pub fn from_name(name: &str) -> Result<Self, RoundError> {
        DAY_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| DAYS[i])
            .ok_or_else(|| RoundError::UnknownDayName {
                name: name.to_string(),
            })
    }

    /// Returns the 1-based cycle position (Imix = 1, Ajaw = 20).
    pub fn position(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the 0-based index suitable for array indexing.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Returns the canonical name spelling.
    pub fn name(self) -> &'static str {
        DAY_NAMES[self.index()]
    }

    /// Returns the day `n` steps forward in the cycle (backward for
    /// negative `n`), wrapping modulo 20.
    pub fn shift(self, n: i64) -> Self {
        let index = (self.index() as i64 + n).rem_euclid(20) as usize;
        DAYS[index]
    }

    /// Returns the cyclic successor of this day.
    pub fn next(self) -> Self {
        self.shift(1)
    }
}

impl fmt::Display for TzolkinDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TzolkinDay {
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
        assert_eq!(TzolkinDay::from_position(1).unwrap(), TzolkinDay::Imix);
        assert_eq!(TzolkinDay::from_position(20).unwrap(), TzolkinDay::Ajaw);
        assert_eq!(TzolkinDay::from_position(17).unwrap(), TzolkinDay::Kaban);
    }

    #[test]
    fn from_position_invalid() {
        assert_eq!(
            TzolkinDay::from_position(0).unwrap_err(),
            RoundError::InvalidDayPosition { position: 0 }
        );
        assert_eq!(
            TzolkinDay::from_position(21).unwrap_err(),
            RoundError::InvalidDayPosition { position: 21 }
        );
    }

    #[test]
    fn from_name_valid() {
        assert_eq!(TzolkinDay::from_name("Imix").unwrap(), TzolkinDay::Imix);
        assert_eq!(TzolkinDay::from_name("Etz'nab").unwrap(), TzolkinDay::Etznab);
        assert_eq!(TzolkinDay::from_name("Ajaw").unwrap(), TzolkinDay::Ajaw);
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(
            TzolkinDay::from_name("Ahau").unwrap_err(),
            RoundError::UnknownDayName {
                name: "Ahau".to_string(),
            }
        );
    }

    #[test]
    fn position_roundtrip() {
        for p in 1..=20u8 {
            let day = TzolkinDay::from_position(p).unwrap();
            assert_eq!(day.position(), p);
            assert_eq!(TzolkinDay::from_name(day.name()).unwrap(), day);
        }
    }

    #[test]
    fn shift_forward() {
        assert_eq!(TzolkinDay::Imix.shift(1), TzolkinDay::Ik);
        assert_eq!(TzolkinDay::Imix.shift(19), TzolkinDay::Ajaw);
        assert_eq!(TzolkinDay::Ajaw.shift(1), TzolkinDay::Imix);
    }

    #[test]
    fn shift_wraps_modulo_20() {
        assert_eq!(TzolkinDay::Kaban.shift(20), TzolkinDay::Kaban);
        assert_eq!(TzolkinDay::Kaban.shift(45), TzolkinDay::Kaban.shift(5));
    }

    #[test]
    fn shift_negative() {
        assert_eq!(TzolkinDay::Imix.shift(-1), TzolkinDay::Ajaw);
        assert_eq!(TzolkinDay::Ik.shift(-2), TzolkinDay::Ajaw);
    }

    #[test]
    fn next_is_shift_one() {
        assert_eq!(TzolkinDay::Kawak.next(), TzolkinDay::Ajaw);
        assert_eq!(TzolkinDay::Ajaw.next(), TzolkinDay::Imix);
    }

    #[test]
    fn display_uses_canonical_spelling() {
        assert_eq!(TzolkinDay::Ik.to_string(), "Ik'");
        assert_eq!(TzolkinDay::Manik.to_string(), "Manik'");
        assert_eq!(TzolkinDay::Ajaw.to_string(), "Ajaw");
    }

    #[test]
    fn parse_from_str() {
        let day: TzolkinDay = "Chikchan".parse().unwrap();
        assert_eq!(day, TzolkinDay::Chikchan);
        assert!("chikchan".parse::<TzolkinDay>().is_err());
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<TzolkinDay>();
    }
}
