//! Kernel configuration and validation.

use std::error::Error;
use std::fmt;

/// Shape parameters of the interaction kernel.
///
/// The weight between points at distance `d` is
/// `amplitude * exp(-decay * d)`: largest (exactly `amplitude`) at zero
/// distance, falling off exponentially with range. Defaults reproduce
/// the reference setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelConfig {
    /// Weight at zero distance.
    pub amplitude: f64,
    /// Exponential decay rate per unit distance.
    pub decay: f64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            amplitude: 500.0,
            decay: 100.0,
        }
    }
}

impl KernelConfig {
    /// Check that both parameters are finite and non-negative.
    pub fn validate(&self) -> Result<(), KernelError> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(KernelError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(KernelError::InvalidDecay { decay: self.decay });
        }
        Ok(())
    }
}

/// Errors detected while validating a [`KernelConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KernelError {
    /// Amplitude is negative or non-finite.
    InvalidAmplitude {
        /// The offending value.
        amplitude: f64,
    },
    /// Decay rate is negative or non-finite.
    InvalidDecay {
        /// The offending value.
        decay: f64,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmplitude { amplitude } => {
                write!(f, "kernel amplitude {amplitude} must be finite and >= 0")
            }
            Self::InvalidDecay { decay } => {
                write!(f, "kernel decay {decay} must be finite and >= 0")
            }
        }
    }
}

impl Error for KernelError {}
