//! Field identification.

use std::fmt;

/// Identifies one of the two densities evolved by the solver.
///
/// Both fields live on the same spatial grid and are updated in lockstep;
/// the kind is carried in errors and recorder output so a failure can
/// name the offending field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Density of active infections (`z`).
    Infected,
    /// Density of recovered individuals (`r`).
    Recovered,
}

impl FieldKind {
    /// Short lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Infected => "infected",
            Self::Recovered => "recovered",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(FieldKind::Infected.to_string(), "infected");
        assert_eq!(FieldKind::Recovered.to_string(), "recovered");
    }
}
