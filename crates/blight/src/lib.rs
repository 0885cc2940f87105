//! Blight: a nonlocal spatial epidemic solver.
//!
//! Two densities evolve over a uniform 2D grid: infections spread
//! through a long-range, exponentially-decaying interaction kernel and
//! drain into a recovered field through local first-order recovery.
//! The solver marches the coupled system forward with explicit Euler
//! steps under zero-Dirichlet boundaries and hands the retained time
//! series to an external visualizer.
//!
//! This is the top-level facade crate re-exporting the public API of
//! the Blight sub-crates; for most users a single `blight` dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use blight::prelude::*;
//!
//! // A cheap 5x5 run: three transitions of pure recovery.
//! let config = SolverConfig {
//!     grid: GridConfig {
//!         resolution: 5,
//!         tau: 0.5,
//!         t_end: 2.0,
//!         ..GridConfig::default()
//!     },
//!     params: ModelParams { beta: 0.0, gamma: 0.1 },
//!     seed: SeedConfig { half_width: 0, value: 0.1 },
//!     ..SolverConfig::default()
//! };
//!
//! let result = blight::solver::run(&config).unwrap();
//! assert_eq!(result.history.len(), result.time.len());
//! let last = result.history.last().unwrap();
//! assert!(last.fields.at(FieldKind::Infected, 2, 2) < 0.1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blight-core` | IDs, field kinds, model rates, step errors |
//! | [`grid`] | `blight-grid` | Spatial and temporal discretization |
//! | [`kernel`] | `blight-kernel` | The pairwise interaction kernel |
//! | [`solver`] | `blight-solver` | Integrator, boundary, history, run entry point |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the step error taxonomy (`blight-core`).
pub use blight_core as types;

/// Spatial and temporal grids (`blight-grid`).
pub use blight_grid as grid;

/// The pairwise interaction kernel (`blight-kernel`).
pub use blight_kernel as kernel;

/// The explicit-Euler integrator and run driver (`blight-solver`).
pub use blight_solver as solver;

/// Common imports for typical Blight usage.
///
/// ```rust
/// use blight::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use blight_core::{FieldKind, ModelParams, StepError, StepId};

    // Grids
    pub use blight_grid::{GridConfig, GridError, SpatialGrid, TimeGrid};

    // Kernel
    pub use blight_kernel::{ContactKernel, KernelConfig, KernelError};

    // Solver
    pub use blight_solver::{
        ConfigError, Envelope, FieldPair, Frame, History, HistoryPolicy, RunError, SeedConfig,
        SimRun, Simulation, SolverConfig,
    };
}
