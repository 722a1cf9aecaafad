//! Digit-wise addition and subtraction of distance numbers.

use baktun_round::Component;
use tracing::debug;

use crate::distance::{place_value, radix, Digit, DistanceNumber};
use crate::error::LongCountError;

/// Extracts concrete signed digit values from an operand.
///
/// # Errors
///
/// Returns [`LongCountError::WildcardArithmetic`] if any digit is a
/// wildcard.
fn signed_digits(n: &DistanceNumber, len: usize) -> Result<Vec<i64>, LongCountError> {
    let sign = if n.is_negative() { -1 } else { 1 };
    (0..len)
        .map(|i| {
            n.digit(i)
                .value()
                .map(|v| sign * i64::from(v))
                .ok_or(LongCountError::WildcardArithmetic)
        })
        .collect()
}

/// Adds two distance numbers digit-wise.
///
/// Both operands are padded to a common length and combined position by
/// position; a single carry/borrow pass then reduces every position
/// against its radix (18 at the winal, 20 elsewhere), propagating until
/// no carry remains. When the operands have opposite signs and the
/// subtrahend's magnitude dominates, the digit differences come out
/// negative and the result's sign flips; the borrow pass then restores
/// canonical non-negative digits. High-order zero digits are trimmed
/// from the result.
///
/// # Errors
///
/// Returns [`LongCountError::WildcardArithmetic`] if either operand
/// contains a wildcard digit, or [`LongCountError::PositionOverflow`]
/// if the combined day count exceeds the `i64` range.
pub fn add(a: &DistanceNumber, b: &DistanceNumber) -> Result<DistanceNumber, LongCountError> {
    let len = a.digits().len().max(b.digits().len());
    let da = signed_digits(a, len)?;
    let db = signed_digits(b, len)?;

    let mut combined: Vec<i64> = da.iter().zip(&db).map(|(x, y)| x + y).collect();
    let total = combined
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .try_fold(0i64, |acc, (i, &v)| {
            place_value(i)
                .and_then(|weight| v.checked_mul(weight))
                .and_then(|term| acc.checked_add(term))
                .ok_or(LongCountError::PositionOverflow)
        })?;
    let negative = total < 0;
    if negative {
        for v in &mut combined {
            *v = -*v;
        }
    }

    let mut digits: Vec<Digit> = Vec::with_capacity(combined.len() + 1);
    let mut carry = 0i64;
    for (i, &v) in combined.iter().enumerate() {
        let v = v + carry;
        let base = radix(i);
        digits.push(Component::Value(v.rem_euclid(base) as u32));
        carry = v.div_euclid(base);
    }
    let mut position = combined.len();
    while carry > 0 {
        let base = radix(position);
        digits.push(Component::Value((carry % base) as u32));
        carry /= base;
        position += 1;
    }
    debug_assert!(carry == 0, "unresolved borrow after carry pass");

    while digits.len() > 1 && *digits.last().expect("non-empty") == Component::Value(0) {
        digits.pop();
    }
    debug!(total, negative, "combined distance numbers");
    Ok(DistanceNumber::from_parts(digits, negative))
}

/// Subtracts `b` from `a` digit-wise.
///
/// Implemented as addition of the negated subtrahend; see [`add`] for
/// the carry/borrow behavior.
///
/// # Errors
///
/// Returns [`LongCountError::WildcardArithmetic`] if either operand
/// contains a wildcard digit.
pub fn subtract(a: &DistanceNumber, b: &DistanceNumber) -> Result<DistanceNumber, LongCountError> {
    add(a, &b.negated())
}
