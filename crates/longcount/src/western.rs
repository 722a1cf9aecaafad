//! Conversion from Julian Day Numbers to western calendar dates.

use std::fmt;

/// Month names shared by the Gregorian and Julian renderings (index 0
/// unused).
#[rustfmt::skip]
const MONTH_NAMES: [&str; 13] = [
    "", "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A proleptic western calendar date.
///
/// Years use astronomical numbering: year 0 is 1 BCE, year -1 is 2 BCE,
/// and so on. Whether the date is Gregorian or Julian depends on which
/// conversion produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WesternDate {
    year: i64,
    month: u8,
    day: u8,
}

impl WesternDate {
    /// Returns the astronomical year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the era-adjusted year and era label: astronomical year 0
    /// is 1 BCE.
    pub fn era_year(self) -> (i64, &'static str) {
        if self.year <= 0 {
            (1 - self.year, "BCE")
        } else {
            (self.year, "CE")
        }
    }
}

impl fmt::Display for WesternDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, era) = self.era_year();
        write!(
            f,
            "{} {} {} {}",
            self.day, MONTH_NAMES[self.month as usize], year, era
        )
    }
}

/// Converts a Julian Day Number to a proleptic Gregorian date.
///
/// Fliegel-Van Flandern style integer arithmetic with floor division,
/// valid for the full JDN range used here (the Maya era onward).
pub fn jdn_to_gregorian(jdn: i64) -> WesternDate {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    civil_from_cycle(c, 100 * b - 4800)
}

/// Converts a Julian Day Number to a proleptic Julian calendar date.
pub fn jdn_to_julian(jdn: i64) -> WesternDate {
    let c = jdn + 32_082;
    civil_from_cycle(c, -4800)
}

/// Resolves a day count within a 4-year cycle block to a civil date.
///
/// `c` is the day offset into the block and `year_base` the year of the
/// block's start; both calendars share the same final step because the
/// Julian leap rule is exactly the 1461-day cycle.
fn civil_from_cycle(c: i64, year_base: i64) -> WesternDate {
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = (e - (153 * m + 2).div_euclid(5) + 1) as u8;
    let month = (m + 3 - 12 * m.div_euclid(10)) as u8;
    let year = year_base + d + m.div_euclid(10);
    WesternDate { year, month, day }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_epoch_of_gmt_correlation() {
        // JDN 584283 (the GMT epoch) is 11 August 3114 BCE proleptic
        // Gregorian.
        let date = jdn_to_gregorian(584_283);
        assert_eq!((date.year(), date.month(), date.day()), (-3113, 8, 11));
        assert_eq!(date.to_string(), "11 August 3114 BCE");
    }

    #[test]
    fn julian_epoch_of_gmt_correlation() {
        // The same JDN falls on 6 September in the proleptic Julian
        // calendar.
        let date = jdn_to_julian(584_283);
        assert_eq!((date.year(), date.month(), date.day()), (-3113, 9, 6));
        assert_eq!(date.to_string(), "6 September 3114 BCE");
    }

    #[test]
    fn gregorian_j2000() {
        let date = jdn_to_gregorian(2_451_545);
        assert_eq!((date.year(), date.month(), date.day()), (2000, 1, 1));
        assert_eq!(date.to_string(), "1 January 2000 CE");
    }

    #[test]
    fn julian_gregorian_agreement_drifts() {
        // Around J2000 the Julian calendar runs 13 days behind.
        let julian = jdn_to_julian(2_451_545);
        assert_eq!((julian.year(), julian.month(), julian.day()), (1999, 12, 19));
    }

    #[test]
    fn gregorian_leap_day() {
        // JDN 2451604 is 29 February 2000.
        let date = jdn_to_gregorian(2_451_604);
        assert_eq!((date.year(), date.month(), date.day()), (2000, 2, 29));
    }

    #[test]
    fn consecutive_jdns_are_consecutive_dates() {
        let a = jdn_to_gregorian(2_451_544); // 31 December 1999
        let b = jdn_to_gregorian(2_451_545); // 1 January 2000
        assert_eq!((a.year(), a.month(), a.day()), (1999, 12, 31));
        assert_eq!((b.year(), b.month(), b.day()), (2000, 1, 1));
    }

    #[test]
    fn era_year_boundary() {
        let date = jdn_to_gregorian(1_721_060); // 1 January of year 0
        assert_eq!(date.year(), 0);
        assert_eq!(date.era_year(), (1, "BCE"));
    }

    #[test]
    fn gregorian_century_rule() {
        // 1900 is not a Gregorian leap year: JDN 2415079 is 28 February,
        // 2415080 is 1 March.
        let a = jdn_to_gregorian(2_415_079);
        let b = jdn_to_gregorian(2_415_080);
        assert_eq!((a.month(), a.day()), (2, 28));
        assert_eq!((b.month(), b.day()), (3, 1));
    }
}
