//! Session-local weight unit.

use std::fmt;

/// Unit used to *display* set weights.
///
/// The unit is a view preference held for the session only. Set weights are
/// persisted as bare numbers and are never converted when the unit flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUnit {
    #[default]
    Lb,
    Kg,
}

impl WeightUnit {
    /// Whether this is the metric unit (the source's `isKg` flag).
    pub fn is_kg(&self) -> bool {
        matches!(self, WeightUnit::Kg)
    }

    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            WeightUnit::Lb => WeightUnit::Kg,
            WeightUnit::Kg => WeightUnit::Lb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Lb => "lb",
            WeightUnit::Kg => "kg",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
