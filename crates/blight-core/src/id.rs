//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing step counter.
///
/// `StepId(0)` is the seeded initial state; each successful integration
/// step increments the counter by one. The terminal step is
/// `StepId(time_points - 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The identifier of the step after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
