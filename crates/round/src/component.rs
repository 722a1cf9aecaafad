//! Wildcard-capable date component.

use std::fmt;

/// A single date component: either a concrete value or a wildcard
/// standing in for an unknown value.
///
/// Equality (via `PartialEq`) is strict: a wildcard is equal only to
/// another wildcard. [`Component::matches`] is the permissive comparison
/// used by the wildcard solvers, where a wildcard matches anything.
///
/// Range validation of concrete values happens at the construction site
/// of the containing type (Tzolkin, Haab, distance number), since the
/// legal range depends on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component<T> {
    /// A concrete, known value.
    Value(T),
    /// An unknown value.
    Wildcard,
}

impl<T: Copy + PartialEq> Component<T> {
    /// Returns `true` if this component is a wildcard.
    pub fn is_wildcard(self) -> bool {
        matches!(self, Component::Wildcard)
    }

    /// Returns the concrete value, or `None` for a wildcard.
    pub fn value(self) -> Option<T> {
        match self {
            Component::Value(v) => Some(v),
            Component::Wildcard => None,
        }
    }

    /// Permissive comparison: a wildcard on either side matches anything;
    /// two concrete values match only when equal.
    pub fn matches(self, other: Self) -> bool {
        match (self, other) {
            (Component::Wildcard, _) | (_, Component::Wildcard) => true,
            (Component::Value(a), Component::Value(b)) => a == b,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Component<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Value(v) => v.fmt(f),
            Component::Wildcard => f.write_str("*"),
        }
    }
}
