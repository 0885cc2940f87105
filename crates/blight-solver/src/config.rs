//! Solver configuration, validation, and configuration errors.

use std::error::Error;
use std::fmt;

use crate::history::HistoryPolicy;
use crate::stability::Envelope;
use blight_core::ModelParams;
use blight_grid::{GridConfig, GridError};
use blight_kernel::{KernelConfig, KernelError};

/// The centered initial-infection block.
///
/// A square of side `2 * half_width + 1` cells around the grid
/// midpoint, clipped to the grid, seeded at `value`; everything else
/// starts at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedConfig {
    /// Half-width of the block in cells. 0 seeds a single cell.
    pub half_width: usize,
    /// Infected density inside the block.
    pub value: f64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            half_width: 4,
            value: 0.1,
        }
    }
}

/// Complete configuration for a solver run.
///
/// Defaults reproduce the reference setup end to end; `validate()`
/// checks every structural invariant before any computation starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Spatial and temporal discretization.
    pub grid: GridConfig,
    /// Interaction kernel shape.
    pub kernel: KernelConfig,
    /// Model rates.
    pub params: ModelParams,
    /// Initial condition.
    pub seed: SeedConfig,
    /// Post-step sane-value envelope.
    pub envelope: Envelope,
    /// Frame retention policy.
    pub history: HistoryPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            kernel: KernelConfig::default(),
            params: ModelParams::default(),
            seed: SeedConfig::default(),
            envelope: Envelope::default(),
            history: HistoryPolicy::default(),
        }
    }
}

impl SolverConfig {
    /// Validate all structural invariants.
    ///
    /// Grid and kernel parameters are checked by their own builders as
    /// well; running the whole pass here means a malformed configuration
    /// is rejected before the O(N⁴) kernel build starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.build()?;
        self.kernel.validate()?;
        if let Err(name) = self.params.validate() {
            let value = match name {
                "beta" => self.params.beta,
                _ => self.params.gamma,
            };
            return Err(ConfigError::InvalidRate { name, value });
        }
        if !self.seed.value.is_finite() || self.seed.value < 0.0 {
            return Err(ConfigError::InvalidSeed {
                value: self.seed.value,
            });
        }
        if self.envelope.validate().is_err() {
            return Err(ConfigError::InvalidEnvelope {
                min: self.envelope.min,
                max: self.envelope.max,
            });
        }
        if !self.envelope.contains(self.seed.value) {
            return Err(ConfigError::SeedOutsideEnvelope {
                value: self.seed.value,
            });
        }
        if self.history == HistoryPolicy::LastK(0) {
            return Err(ConfigError::EmptyHistoryWindow);
        }
        Ok(())
    }
}

/// Errors detected during [`SolverConfig::validate`].
///
/// All are fatal to the run and reported before computation starts.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Spatial or temporal grid configuration is invalid.
    Grid(GridError),
    /// Kernel configuration is invalid.
    Kernel(KernelError),
    /// A model rate is negative or non-finite.
    InvalidRate {
        /// Which rate failed.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Seed value is negative or non-finite.
    InvalidSeed {
        /// The offending value.
        value: f64,
    },
    /// Envelope bounds are non-finite or inverted.
    InvalidEnvelope {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The seed value would fail the stability check at step 0.
    SeedOutsideEnvelope {
        /// The offending value.
        value: f64,
    },
    /// `LastK(0)` would retain nothing.
    EmptyHistoryWindow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Kernel(e) => write!(f, "kernel: {e}"),
            Self::InvalidRate { name, value } => {
                write!(f, "{name} must be finite and >= 0, got {value}")
            }
            Self::InvalidSeed { value } => {
                write!(f, "seed value must be finite and >= 0, got {value}")
            }
            Self::InvalidEnvelope { min, max } => {
                write!(f, "envelope [{min}, {max}] must be finite with min < max")
            }
            Self::SeedOutsideEnvelope { value } => {
                write!(f, "seed value {value} lies outside the stability envelope")
            }
            Self::EmptyHistoryWindow => write!(f, "history window must retain at least 1 frame"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Kernel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<KernelError> for ConfigError {
    fn from(e: KernelError) -> Self {
        Self::Kernel(e)
    }
}
