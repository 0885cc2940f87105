//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors detected while building the spatial or temporal grid.
///
/// All variants are configuration failures: they are reported before any
/// computation starts and are fatal to the run.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Spatial resolution is below the minimum of 2 points per axis.
    ResolutionTooSmall {
        /// The configured resolution.
        resolution: usize,
    },
    /// A domain bounds pair is non-increasing or non-finite.
    InvalidBounds {
        /// Which axis the bounds belong to (`"x"` or `"y"`).
        axis: &'static str,
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
    /// Time step is zero, negative, or non-finite.
    InvalidTimeStep {
        /// The configured step.
        tau: f64,
    },
    /// Time horizon is non-positive, non-finite, or yields fewer than
    /// two time points.
    InvalidHorizon {
        /// The configured horizon end.
        t_end: f64,
        /// The configured step.
        tau: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolutionTooSmall { resolution } => {
                write!(f, "resolution {resolution} is below the minimum of 2")
            }
            Self::InvalidBounds { axis, lo, hi } => {
                write!(f, "{axis} bounds [{lo}, {hi}] must be finite and increasing")
            }
            Self::InvalidTimeStep { tau } => {
                write!(f, "time step {tau} must be finite and positive")
            }
            Self::InvalidHorizon { t_end, tau } => {
                write!(
                    f,
                    "horizon [0, {t_end}) with step {tau} must yield at least 2 time points"
                )
            }
        }
    }
}

impl Error for GridError {}
