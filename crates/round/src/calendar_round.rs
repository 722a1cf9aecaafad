//! The 18,980-day Calendar Round.

use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::error::RoundError;
use crate::haab::{Haab, HAAB_DAYS};
use crate::haab_month::HaabMonth;
use crate::tzolkin::{Tzolkin, TZOLKIN_DAYS};
use crate::tzolkin_day::TzolkinDay;

/// Number of days in the full Calendar Round supercycle
/// (lcm(260, 365)).
pub const CALENDAR_ROUND_DAYS: u32 = 18_980;

/// Tzolkin index of the origin 4 Ajaw within the 260-day cycle.
pub(crate) const ORIGIN_TZOLKIN_INDEX: i64 = 159;

/// Haab day-of-year of the origin 8 Kumk'u.
pub(crate) const ORIGIN_HAAB_DAY: i64 = 348;

/// A Calendar Round position: a Tzolkin date paired with a Haab date.
///
/// Both counters advance one step per day, so only one Haab coefficient
/// out of every five can co-occur with a given Tzolkin day; pairs
/// outside that residue class are rejected at construction. The
/// compound cycle closes after 18,980 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarRound {
    tzolkin: Tzolkin,
    haab: Haab,
}

impl CalendarRound {
    /// Creates a Calendar Round, enforcing the cross-validity
    /// constraint between the Tzolkin day and the Haab coefficient.
    ///
    /// The Haab coefficient and the Tzolkin day position both advance by
    /// one per day, so their difference modulo 5 is fixed across the
    /// whole cycle; the anchor 4 Ajaw 8 Kumk'u pins it to
    /// `haab_coeff = position + 3 (mod 5)`. The check is skipped when
    /// the Tzolkin day or the Haab coefficient is a wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ForbiddenHaabCoefficient`] if the pair
    /// violates the residue-class constraint.
    pub fn new(tzolkin: Tzolkin, haab: Haab) -> Result<Self, RoundError> {
        if let (Component::Value(day), Component::Value(coefficient)) =
            (tzolkin.day(), haab.coefficient())
        {
            if u16::from(coefficient) % 5 != (u16::from(day.position()) + 3) % 5 {
                return Err(RoundError::ForbiddenHaabCoefficient { day, coefficient });
            }
        }
        Ok(Self { tzolkin, haab })
    }

    /// Returns the canonical reference date 4 Ajaw 8 Kumk'u, the origin
    /// of the Long Count era.
    pub fn origin() -> Self {
        let tzolkin = Tzolkin::of(4, TzolkinDay::Ajaw).expect("4 Ajaw is a valid tzolkin date");
        let haab = Haab::of(8, HaabMonth::Kumku).expect("8 Kumk'u is a valid haab date");
        Self::new(tzolkin, haab).expect("4 Ajaw 8 Kumk'u is a valid calendar round")
    }

    /// Creates the Calendar Round at the given number of days past the
    /// origin, taken modulo 18,980.
    pub fn from_ordinal(ordinal: i64) -> Self {
        let d = ordinal.rem_euclid(i64::from(CALENDAR_ROUND_DAYS));
        let tzolkin = Tzolkin::from_index(ORIGIN_TZOLKIN_INDEX + d);
        let haab = Haab::from_day_of_year(ORIGIN_HAAB_DAY + d);
        // Both counters were advanced by the same amount from a valid
        // anchor, so the residue-class constraint holds.
        Self { tzolkin, haab }
    }

    /// Returns the number of days from the origin to this date, in
    /// 0..18980.
    ///
    /// Solved by the Chinese remainder theorem over the cycle lengths
    /// 260 and 365 (gcd 5): with `t` and `h` the day counts relative to
    /// the origin in each cycle, the validity constraint makes `h - t`
    /// divisible by 5, and 66 is the inverse of 52 = 260/5 modulo
    /// 73 = 365/5.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if any side is a wildcard.
    pub fn ordinal(self) -> Result<u32, RoundError> {
        let t = (i64::from(self.tzolkin.index()?) - ORIGIN_TZOLKIN_INDEX)
            .rem_euclid(i64::from(TZOLKIN_DAYS));
        let h = (i64::from(self.haab.day_of_year()?) - ORIGIN_HAAB_DAY)
            .rem_euclid(i64::from(HAAB_DAYS));
        let r = (h - t).rem_euclid(i64::from(HAAB_DAYS));
        debug_assert_eq!(r % 5, 0, "cross-validity violated for {self}");
        let k = (66 * (r / 5)).rem_euclid(73);
        Ok((t + 260 * k) as u32)
    }

    /// Returns the date `n` days forward in the supercycle (backward
    /// for negative `n`).
    ///
    /// Shifts the Tzolkin and Haab sides independently by the same
    /// amount, which preserves the residue-class constraint.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if any side is a wildcard.
    pub fn shift(self, n: i64) -> Result<Self, RoundError> {
        Ok(Self::from_ordinal(i64::from(self.ordinal()?) + n))
    }

    /// Returns the next day of the supercycle.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if any side is a wildcard.
    pub fn next(self) -> Result<Self, RoundError> {
        self.shift(1)
    }

    /// Returns the signed number of days from `self` forward to
    /// `other`.
    ///
    /// The result is the step count of a forward walk from `self` to
    /// `other`, reduced by the full 18,980-day cycle whenever that walk
    /// passes the origin; both cases collapse to the difference of the
    /// two ordinals, so the result lies in -18979..=18979 and is
    /// negative exactly when `other` sits closer to the origin than
    /// `self`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::WildcardDate`] if either date contains a
    /// wildcard.
    pub fn minus(self, other: Self) -> Result<i32, RoundError> {
        Ok(other.ordinal()? as i32 - self.ordinal()? as i32)
    }

    /// Returns the Tzolkin side.
    pub fn tzolkin(self) -> Tzolkin {
        self.tzolkin
    }

    /// Returns the Haab side.
    pub fn haab(self) -> Haab {
        self.haab
    }

    /// Returns `true` if any of the four components is a wildcard.
    pub fn is_partial(self) -> bool {
        self.tzolkin.is_partial() || self.haab.is_partial()
    }

    /// Wildcard-aware comparison: wildcards match anything.
    pub fn matches(self, other: Self) -> bool {
        self.tzolkin.matches(other.tzolkin) && self.haab.matches(other.haab)
    }
}

impl fmt::Display for CalendarRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tzolkin, self.haab)
    }
}

impl FromStr for CalendarRound {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 4 {
            return Err(RoundError::MalformedCalendarRound {
                input: s.to_string(),
            });
        }
        let tzolkin: Tzolkin = tokens[..2].join(" ").parse()?;
        let haab: Haab = tokens[2..].join(" ").parse()?;
        Self::new(tzolkin, haab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(s: &str) -> CalendarRound {
        s.parse().unwrap()
    }

    #[test]
    fn origin_is_four_ajaw_eight_kumku() {
        let origin = CalendarRound::origin();
        assert_eq!(origin.to_string(), "4 Ajaw 8 Kumk'u");
        assert_eq!(origin.ordinal().unwrap(), 0);
    }

    #[test]
    fn new_rejects_forbidden_coefficient() {
        // Kaban permits haab coefficients {0, 5, 10, 15}.
        let tzolkin = Tzolkin::of(4, TzolkinDay::Kaban).unwrap();
        let haab = Haab::of(3, HaabMonth::Pop).unwrap();
        assert_eq!(
            CalendarRound::new(tzolkin, haab).unwrap_err(),
            RoundError::ForbiddenHaabCoefficient {
                day: TzolkinDay::Kaban,
                coefficient: 3,
            }
        );
    }

    #[test]
    fn new_accepts_permitted_coefficients() {
        let tzolkin = Tzolkin::of(4, TzolkinDay::Kaban).unwrap();
        for c in [0u8, 5, 10, 15] {
            let haab = Haab::of(c, HaabMonth::Pop).unwrap();
            assert!(CalendarRound::new(tzolkin, haab).is_ok(), "coefficient {c}");
        }
    }

    #[test]
    fn new_skips_validation_on_wildcard() {
        let tzolkin = Tzolkin::new(Component::Value(4), Component::Wildcard).unwrap();
        let haab = Haab::of(3, HaabMonth::Pop).unwrap();
        assert!(CalendarRound::new(tzolkin, haab).is_ok());

        let tzolkin = Tzolkin::of(4, TzolkinDay::Kaban).unwrap();
        let haab = Haab::new(Component::Wildcard, Component::Value(HaabMonth::Pop)).unwrap();
        assert!(CalendarRound::new(tzolkin, haab).is_ok());
    }

    #[test]
    fn next_of_origin() {
        let next = CalendarRound::origin().next().unwrap();
        assert_eq!(next, round("5 Imix 9 Kumk'u"));
    }

    #[test]
    fn ordinal_roundtrip_sampled() {
        // Every 7th day samples all residues of both subcycles.
        for d in (0..i64::from(CALENDAR_ROUND_DAYS)).step_by(7) {
            let cr = CalendarRound::from_ordinal(d);
            assert_eq!(i64::from(cr.ordinal().unwrap()), d, "ordinal {d}");
        }
    }

    #[test]
    fn from_ordinal_wraps() {
        let cr = CalendarRound::from_ordinal(i64::from(CALENDAR_ROUND_DAYS) + 1);
        assert_eq!(cr.ordinal().unwrap(), 1);
        let cr = CalendarRound::from_ordinal(-1);
        assert_eq!(cr.ordinal().unwrap(), CALENDAR_ROUND_DAYS - 1);
    }

    #[test]
    fn shift_full_cycle_is_identity() {
        let cr = round("13 Ajaw 18 Kumk'u");
        assert_eq!(cr.shift(i64::from(CALENDAR_ROUND_DAYS)).unwrap(), cr);
        assert_eq!(cr.shift(-i64::from(CALENDAR_ROUND_DAYS)).unwrap(), cr);
    }

    #[test]
    fn shift_advances_both_cycles() {
        let cr = CalendarRound::origin().shift(365).unwrap();
        // One haab year later the haab side is back at 8 Kumk'u.
        assert_eq!(cr.haab(), Haab::of(8, HaabMonth::Kumku).unwrap());
        // 365 = 260 + 105 days into the tzolkin.
        assert_eq!(cr.tzolkin(), Tzolkin::from_index(ORIGIN_TZOLKIN_INDEX + 105));
    }

    #[test]
    fn minus_forward() {
        let a = CalendarRound::from_ordinal(100);
        let b = CalendarRound::from_ordinal(4000);
        assert_eq!(a.minus(b).unwrap(), 3900);
    }

    #[test]
    fn minus_passes_origin() {
        let a = CalendarRound::from_ordinal(18_970);
        let b = CalendarRound::from_ordinal(10);
        // The forward walk (40 steps) passes the origin, so the
        // distance is reduced by the full cycle.
        assert_eq!(a.minus(b).unwrap(), 40 - 18_980);
    }

    #[test]
    fn minus_self_is_zero() {
        let cr = round("4 Ajaw 8 Kumk'u");
        assert_eq!(cr.minus(cr).unwrap(), 0);
    }

    #[test]
    fn minus_agrees_with_shift() {
        let a = CalendarRound::from_ordinal(123);
        let b = CalendarRound::from_ordinal(456);
        let d = a.minus(b).unwrap();
        assert_eq!(a.shift(i64::from(d)).unwrap(), b);
    }

    #[test]
    fn matches_partial_pattern() {
        let pattern = round("* Ajaw 8 *");
        assert!(pattern.matches(CalendarRound::origin()));
        assert!(!pattern.matches(round("5 Imix 9 Kumk'u")));
    }

    #[test]
    fn parse_and_display_roundtrip() {
        for s in ["4 Ajaw 8 Kumk'u", "13 Etz'nab 1 Sak'", "* Ajaw * *"] {
            assert_eq!(round(s).to_string(), s);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("4 Ajaw 8".parse::<CalendarRound>().is_err());
        assert!("".parse::<CalendarRound>().is_err());
        assert!("4 Ajaw 8 Kumk'u extra".parse::<CalendarRound>().is_err());
    }

    #[test]
    fn parse_rejects_forbidden_pair() {
        assert_eq!(
            "4 Kaban 3 Pop".parse::<CalendarRound>().unwrap_err(),
            RoundError::ForbiddenHaabCoefficient {
                day: TzolkinDay::Kaban,
                coefficient: 3,
            }
        );
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarRound>();
    }
}
