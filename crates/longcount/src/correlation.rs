//! Correlation constants anchoring the Long Count to the Julian Day
//! Number line.

use std::fmt;

use crate::error::LongCountError;

/// A named offset aligning Long Count position 0 (4 Ajaw 8 Kumk'u) to a
/// Julian Day Number epoch.
///
/// The registry carries the constants in common scholarly use; no claim
/// is made about their historical correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationConstant {
    value: i64,
    name: &'static str,
}

impl CorrelationConstant {
    /// Bowditch's correlation.
    pub const BOWDITCH: Self = Self {
        value: 394_483,
        name: "Bowditch",
    };

    /// Smiley's correlation.
    pub const SMILEY: Self = Self {
        value: 482_699,
        name: "Smiley",
    };

    /// The Goodman-Martinez-Thompson correlation, the common default.
    pub const GMT: Self = Self {
        value: 584_283,
        name: "GMT",
    };

    /// The astronomical (Lounsbury) variant of the GMT correlation.
    pub const ASTRONOMICAL: Self = Self {
        value: 584_285,
        name: "Astronomical",
    };

    /// The Martin-Skidmore correlation.
    pub const MARTIN_SKIDMORE: Self = Self {
        value: 584_286,
        name: "Martin-Skidmore",
    };

    /// All registered constants.
    pub const REGISTRY: [Self; 5] = [
        Self::BOWDITCH,
        Self::SMILEY,
        Self::GMT,
        Self::ASTRONOMICAL,
        Self::MARTIN_SKIDMORE,
    ];

    /// Looks a constant up by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LongCountError::UnknownCorrelation`] if `name` is not
    /// in the registry.
    pub fn from_name(name: &str) -> Result<Self, LongCountError> {
        Self::REGISTRY
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LongCountError::UnknownCorrelation {
                name: name.to_string(),
            })
    }

    /// Returns the Julian Day Number of Long Count position 0.
    pub fn value(self) -> i64 {
        self.value
    }

    /// Returns the registered name.
    pub fn name(self) -> &'static str {
        self.name
    }
}

impl Default for CorrelationConstant {
    fn default() -> Self {
        Self::GMT
    }
}

impl fmt::Display for CorrelationConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}
