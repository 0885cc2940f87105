//! Combined grid configuration.

use crate::error::GridError;
use crate::spatial::SpatialGrid;
use crate::time::TimeGrid;

/// Configuration for the spatial and temporal discretization.
///
/// Defaults reproduce the reference setup: the unit square at 30 points
/// per axis, stepped at `tau = 0.5` over `[0, 200)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Domain bounds along x, `(lo, hi)` with `lo < hi`.
    pub x_bounds: (f64, f64),
    /// Domain bounds along y, `(lo, hi)` with `lo < hi`.
    pub y_bounds: (f64, f64),
    /// Points per axis. Minimum 2. Kernel construction and per-step cost
    /// grow with the fourth power of this value.
    pub resolution: usize,
    /// Time step.
    pub tau: f64,
    /// Horizon end; time points cover `[0, t_end)`.
    pub t_end: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_bounds: (0.0, 1.0),
            y_bounds: (0.0, 1.0),
            resolution: 30,
            tau: 0.5,
            t_end: 200.0,
        }
    }
}

impl GridConfig {
    /// Build the spatial and temporal grids, validating every invariant.
    pub fn build(&self) -> Result<(SpatialGrid, TimeGrid), GridError> {
        let spatial = SpatialGrid::new(self.x_bounds, self.y_bounds, self.resolution)?;
        let time = TimeGrid::new(self.tau, self.t_end)?;
        Ok((spatial, time))
    }
}
