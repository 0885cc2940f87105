//! Reusable solver configurations for tests and benchmarks.
//!
//! All fixtures use a 5x5 grid stepped at `tau = 0.5` over `[0, 2)`
//! (4 time points, 3 transitions) so whole runs stay cheap even with
//! the O(N⁴) kernel.
//!
//! On that grid the quadrature self-weight is `amplitude * dx * dy`
//! (~31 at the default amplitude), which makes the stable fixtures
//! need a small `beta` and makes instability trivial to trigger.

use blight_core::ModelParams;
use blight_grid::GridConfig;
use blight_solver::{SeedConfig, SolverConfig};

fn base_grid() -> GridConfig {
    GridConfig {
        resolution: 5,
        tau: 0.5,
        t_end: 2.0,
        ..GridConfig::default()
    }
}

/// Pure recovery: `beta = 0` turns off the nonlocal term entirely, so
/// the single seeded cell decays geometrically by `1 - gamma * tau`
/// per step and every other cell stays exactly zero.
pub fn decay_only_config() -> SolverConfig {
    SolverConfig {
        grid: base_grid(),
        params: ModelParams {
            beta: 0.0,
            gamma: 0.1,
        },
        seed: SeedConfig {
            half_width: 0,
            value: 0.1,
        },
        ..SolverConfig::default()
    }
}

/// A spreading run that stays inside the stability envelope for the
/// whole 3-transition horizon.
pub fn small_stable_config() -> SolverConfig {
    SolverConfig {
        grid: base_grid(),
        params: ModelParams {
            beta: 0.05,
            gamma: 0.1,
        },
        seed: SeedConfig {
            half_width: 1,
            value: 0.1,
        },
        ..SolverConfig::default()
    }
}

/// Blows the envelope on the very first transition: `beta = 1` against
/// the default amplitude pushes the seeded cells past 1 in one step.
pub fn unstable_config() -> SolverConfig {
    SolverConfig {
        grid: base_grid(),
        params: ModelParams {
            beta: 1.0,
            gamma: 0.1,
        },
        seed: SeedConfig {
            half_width: 1,
            value: 0.1,
        },
        ..SolverConfig::default()
    }
}
