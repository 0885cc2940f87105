//! Runtime error taxonomy for the integration loop.
//!
//! Configuration errors are defined next to the configs that produce
//! them (`blight-grid`, `blight-solver`); this module holds the errors
//! a correctly-configured solver can still raise while stepping.

use std::error::Error;
use std::fmt;

use crate::field::FieldKind;
use crate::id::StepId;

/// Errors raised by the integrator during or immediately before stepping.
///
/// Stepping is deterministic, so none of these are retryable: the same
/// inputs fail the same way every time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepError {
    /// A post-step field value was non-finite or left the sane-value
    /// envelope. The failed step does not advance the simulation state.
    Instability {
        /// Step that produced the bad value (the step being computed).
        step: StepId,
        /// Which field held the bad value.
        field: FieldKind,
        /// Flat row-major index of the first offending cell.
        cell_index: usize,
        /// The offending value itself.
        value: f64,
    },
    /// Kernel and spatial grid were built from different resolutions.
    ///
    /// Detected at the integrator's setup boundary, before any stepping.
    DimensionMismatch {
        /// Resolution the kernel was built for.
        kernel: usize,
        /// Resolution of the spatial grid.
        grid: usize,
    },
    /// A step was requested past the end of the time grid.
    HorizonExhausted {
        /// The terminal step already reached.
        last: StepId,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instability {
                step,
                field,
                cell_index,
                value,
            } => write!(
                f,
                "numerical instability at step {step}: {field} field value {value} \
                 at cell {cell_index} is outside the stability envelope"
            ),
            Self::DimensionMismatch { kernel, grid } => write!(
                f,
                "kernel resolution {kernel} does not match grid resolution {grid}"
            ),
            Self::HorizonExhausted { last } => write!(
                f,
                "simulation already reached the terminal step {last}"
            ),
        }
    }
}

impl Error for StepError {}
