//! Signed mixed-radix distance numbers.

use std::fmt;

use baktun_round::Component;

use crate::error::LongCountError;
use crate::ops;

/// A single Long Count digit: a concrete magnitude or a wildcard.
pub type Digit = Component<u32>;

/// Place values of the named periods, least significant first: k'in,
/// winal, tun, k'atun, bak'tun, piktun, kalabtun, kinchiltun. The winal
/// is base 18 (18 winal = 1 tun); every other position is base 20.
#[rustfmt::skip]
pub(crate) const PLACE_VALUES: [i64; 8] = [
    1, 20, 360, 7_200, 144_000, 2_880_000, 57_600_000, 1_152_000_000,
];

/// Returns the day value of one unit at the given digit position, or
/// `None` when the value exceeds the `i64` range.
pub(crate) fn place_value(position: usize) -> Option<i64> {
    if position < PLACE_VALUES.len() {
        Some(PLACE_VALUES[position])
    } else {
        let exponent = (position - PLACE_VALUES.len() + 1) as u32;
        20_i64
            .checked_pow(exponent)
            .and_then(|scale| PLACE_VALUES[PLACE_VALUES.len() - 1].checked_mul(scale))
    }
}

/// Returns the radix of the given digit position: 18 at the winal
/// position, 20 everywhere else.
pub(crate) fn radix(position: usize) -> i64 {
    if position == 1 {
        18
    } else {
        20
    }
}

/// A signed mixed-radix day count: digit magnitudes stored least
/// significant (k'in) first, with one sign flag for the whole number
/// (sign-magnitude, not complement).
///
/// Digits may be wildcards; any operation that needs the numeric value
/// of the whole number fails on a wildcard digit. Digits are not
/// required to be in canonical range until [`DistanceNumber::normalise`]
/// or an arithmetic operation reduces them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistanceNumber {
    digits: Vec<Digit>,
    negative: bool,
}

impl DistanceNumber {
    /// Creates a non-negative distance number from digits, least
    /// significant first. An empty digit list is treated as zero.
    pub fn new(digits: Vec<Digit>) -> Self {
        let digits = if digits.is_empty() {
            vec![Component::Value(0)]
        } else {
            digits
        };
        Self {
            digits,
            negative: false,
        }
    }

    /// Creates a non-negative distance number from concrete digit
    /// values, least significant first.
    pub fn from_values(values: &[u32]) -> Self {
        Self::new(values.iter().map(|&v| Component::Value(v)).collect())
    }

    /// Creates the canonical distance number for a signed day count.
    pub fn from_days(days: i64) -> Self {
        let negative = days < 0;
        let mut n = days.unsigned_abs() as i64;
        let mut digits = vec![Component::Value((n % 20) as u32)];
        n /= 20;
        if n > 0 {
            digits.push(Component::Value((n % 18) as u32));
            n /= 18;
        }
        while n > 0 {
            digits.push(Component::Value((n % 20) as u32));
            n /= 20;
        }
        Self { digits, negative }
    }

    /// Internal constructor for arithmetic results.
    pub(crate) fn from_parts(digits: Vec<Digit>, negative: bool) -> Self {
        Self { digits, negative }
    }

    /// Returns this number with the opposite sign. Zero stays
    /// non-negative.
    pub fn negated(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        Self {
            digits: self.digits.clone(),
            negative: !self.negative,
        }
    }

    /// Returns `true` if the sign flag is set.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if every digit is a concrete zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == Component::Value(0))
    }

    /// Returns the digits, least significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the digit at the given position, or a concrete zero
    /// beyond the stored length.
    pub fn digit(&self, position: usize) -> Digit {
        self.digits
            .get(position)
            .copied()
            .unwrap_or(Component::Value(0))
    }

    /// Returns the k'in (position 0) digit.
    pub fn kin(&self) -> Digit {
        self.digit(0)
    }

    /// Returns the winal (position 1) digit.
    pub fn winal(&self) -> Digit {
        self.digit(1)
    }

    /// Returns the tun (position 2) digit.
    pub fn tun(&self) -> Digit {
        self.digit(2)
    }

    /// Returns the k'atun (position 3) digit.
    pub fn katun(&self) -> Digit {
        self.digit(3)
    }

    /// Returns the bak'tun (position 4) digit.
    pub fn baktun(&self) -> Digit {
        self.digit(4)
    }

    /// Returns `true` if any digit is a wildcard.
    pub fn is_partial(&self) -> bool {
        self.digits.iter().any(|d| d.is_wildcard())
    }

    /// Returns `true` if every concrete digit is within its canonical
    /// range: k'in, tun, and k'atun in 0..=19, winal in 0..=17.
    /// Positions above the k'atun are unbounded; wildcards pass.
    pub fn is_valid(&self) -> bool {
        self.digits.iter().enumerate().all(|(i, d)| match d.value() {
            Some(v) if i <= 3 => i64::from(v) < radix(i),
            _ => true,
        })
    }

    /// Returns the signed day count of this number.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard, or [`LongCountError::PositionOverflow`] if the weighted
    /// sum exceeds the `i64` range.
    pub fn position(&self) -> Result<i64, LongCountError> {
        let mut total = 0i64;
        for (i, digit) in self.digits.iter().enumerate() {
            let v = digit.value().ok_or(LongCountError::WildcardPosition)?;
            if v == 0 {
                continue;
            }
            let weight = place_value(i).ok_or(LongCountError::PositionOverflow)?;
            let term = i64::from(v)
                .checked_mul(weight)
                .ok_or(LongCountError::PositionOverflow)?;
            total = total
                .checked_add(term)
                .ok_or(LongCountError::PositionOverflow)?;
        }
        Ok(if self.negative { -total } else { total })
    }

    /// Returns the canonical form of this number: same day count, every
    /// digit within range.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardPosition`] if any digit is a
    /// wildcard.
    pub fn normalise(&self) -> Result<Self, LongCountError> {
        Ok(Self::from_days(self.position()?))
    }

    /// Returns the digits with high-order concrete zeros trimmed,
    /// keeping at least one digit.
    pub fn significant(&self) -> &[Digit] {
        let mut len = self.digits.len();
        while len > 1 && self.digits[len - 1] == Component::Value(0) {
            len -= 1;
        }
        &self.digits[..len]
    }

    /// Wildcard-aware comparison of significant digits and sign.
    ///
    /// Digits are compared position by position with wildcards matching
    /// anything; digits beyond either number's length count as zero.
    /// Signs must agree unless both numbers are zero.
    pub fn matches(&self, other: &Self) -> bool {
        let len = self.digits.len().max(other.digits.len());
        let digits_match = (0..len).all(|i| self.digit(i).matches(other.digit(i)));
        let signs_match =
            self.negative == other.negative || (self.is_zero() && other.is_zero());
        digits_match && signs_match
    }

    /// Returns the sum of this number and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardArithmetic`] if either operand
    /// contains a wildcard digit, or [`LongCountError::PositionOverflow`]
    /// if the combined day count exceeds the `i64` range.
    pub fn plus(&self, other: &Self) -> Result<Self, LongCountError> {
        ops::add(self, other)
    }

    /// Returns the difference of this number and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::WildcardArithmetic`] if either operand
    /// contains a wildcard digit, or [`LongCountError::PositionOverflow`]
    /// if the combined day count exceeds the `i64` range.
    pub fn minus(&self, other: &Self) -> Result<Self, LongCountError> {
        ops::subtract(self, other)
    }
}

impl fmt::Display for DistanceNumber {
    /// Renders most significant digit first, each right-aligned to
    /// width 2, period-separated, padded to at least 5 positions:
    /// `" 9.17. 0. 0. 0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let len = self.digits.len().max(5);
        for position in (0..len).rev() {
            write!(f, "{:>2}", self.digit(position).to_string())?;
            if position > 0 {
                f.write_str(".")?;
            }
        }
        Ok(())
    }
}
