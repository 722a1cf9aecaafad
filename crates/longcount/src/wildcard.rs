//! Wildcard expansion for Long Counts and full dates.

use baktun_round::Component;
use tracing::debug;

use crate::distance::{radix, Digit, DistanceNumber};
use crate::error::LongCountError;
use crate::full_date::FullDate;
use crate::long_count::LongCount;

/// Expands a Long Count pattern into every concrete date matching it.
///
/// Each wildcard digit ranges over the full radix of its position, 0..18
/// at the winal and 0..20 elsewhere. Results are in ascending day order
/// and keep the pattern's correlation. A concrete pattern expands to
/// itself.
pub fn expand_long_count(pattern: &LongCount) -> Vec<LongCount> {
    let digits = pattern.number().digits();
    // Branch most significant position first so the product comes out
    // in ascending day order.
    let mut partials: Vec<Vec<Digit>> = vec![Vec::with_capacity(digits.len())];
    for (position, digit) in digits.iter().enumerate().rev() {
        partials = partials
            .into_iter()
            .flat_map(|prefix| -> Vec<Vec<Digit>> {
                match digit {
                    Component::Value(_) => {
                        let mut next = prefix;
                        next.push(*digit);
                        vec![next]
                    }
                    Component::Wildcard => (0..radix(position))
                        .map(|v| {
                            let mut next = prefix.clone();
                            next.push(Component::Value(v as u32));
                            next
                        })
                        .collect(),
                }
            })
            .collect();
    }
    let matches: Vec<LongCount> = partials
        .into_iter()
        .map(|mut digits| {
            digits.reverse();
            LongCount::with_correlation(DistanceNumber::new(digits), pattern.correlation())
        })
        .collect();
    debug!(pattern = %pattern, matches = matches.len(), "expanded long count pattern");
    matches
}

/// Expands a full-date pattern into every consistent concrete date.
///
/// Every concrete Long Count the count half matches is paired with the
/// Calendar Round its position implies; the pair survives only if that
/// round also matches the round half of the pattern. A fully concrete
/// but inconsistent pattern therefore expands to nothing.
///
/// # Errors
///
/// Returns [`LongCountError::WildcardPosition`] if a Calendar Round
/// cannot be derived for an expanded count. This cannot happen for
/// patterns built from parsed input.
pub fn expand_full_date(pattern: &FullDate) -> Result<Vec<FullDate>, LongCountError> {
    let mut matches = Vec::new();
    for long_count in expand_long_count(pattern.long_count()) {
        let candidate = long_count.build_full_date()?;
        if candidate.round().matches(pattern.round()) {
            matches.push(candidate);
        }
    }
    debug!(pattern = %pattern, matches = matches.len(), "expanded full date pattern");
    Ok(matches)
}
