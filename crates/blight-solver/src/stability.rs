//! Post-step sane-value envelope checking.

use blight_core::{FieldKind, StepError, StepId};

/// The closed interval of acceptable field values.
///
/// Densities are conceptually in `[0, 1]`; the default envelope allows
/// a small slack for floating-point rounding. Non-finite values fail
/// the check regardless of the bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    /// Smallest acceptable value.
    pub min: f64,
    /// Largest acceptable value.
    pub max: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            min: -1e-6,
            max: 1.0 + 1e-6,
        }
    }
}

impl Envelope {
    /// Whether a single value is finite and inside the envelope.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Check that the bounds themselves are finite and ordered.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err("envelope bounds must be finite with min < max");
        }
        Ok(())
    }
}

/// Scan a freshly-computed field and fail on the first value outside
/// the envelope.
///
/// `step` is the step being computed, carried into the error so the
/// caller can report where the run diverged. The explicit Euler scheme
/// has no stability guarantee for arbitrary parameters; this check is
/// what turns divergence into a diagnosable failure instead of a
/// silently corrupted sequence.
pub fn check(
    values: &[f64],
    kind: FieldKind,
    step: StepId,
    envelope: &Envelope,
) -> Result<(), StepError> {
    for (cell_index, &value) in values.iter().enumerate() {
        if !envelope.contains(value) {
            return Err(StepError::Instability {
                step,
                field: kind,
                cell_index,
                value,
            });
        }
    }
    Ok(())
}
