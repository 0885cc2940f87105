//! Benchmark profiles for the Blight epidemic solver.
//!
//! Provides pre-built [`SolverConfig`] profiles at several resolutions.
//! Kernel construction and the per-step sweep both scale as the fourth
//! power of the resolution, so the profiles stay well below the
//! reference N = 30 by default; [`reference_profile`] is the full-size
//! setup for machines with time to spare.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blight_core::ModelParams;
use blight_grid::GridConfig;
use blight_solver::{SeedConfig, SolverConfig};

/// A profile at the given resolution with a short, stable horizon.
///
/// `beta` is scaled down with the quadrature self-weight
/// (`amplitude / (resolution - 1)²`) so coarse grids stay inside the
/// stability envelope for the whole horizon.
pub fn profile(resolution: usize) -> SolverConfig {
    let cell_area = 1.0 / ((resolution - 1) as f64).powi(2);
    let self_weight = 500.0 * cell_area;
    SolverConfig {
        grid: GridConfig {
            resolution,
            tau: 0.5,
            t_end: 5.0,
            ..GridConfig::default()
        },
        params: ModelParams {
            beta: 0.1 / self_weight,
            gamma: 0.1,
        },
        seed: SeedConfig {
            half_width: 1,
            value: 0.1,
        },
        ..SolverConfig::default()
    }
}

/// The full-size reference setup: 30x30 grid, `[0, 200)` at `tau = 0.5`.
pub fn reference_profile() -> SolverConfig {
    SolverConfig::default()
}
