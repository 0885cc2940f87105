//! Explicit-Euler integrator for the Blight nonlocal epidemic model.
//!
//! The model evolves two densities over a uniform 2D grid: an infected
//! field `z` driven by a nonlocal, kernel-weighted infection pressure,
//! and a recovered field `r` fed by local first-order recovery. Each
//! step reads only the frozen previous state (Jacobi-style), evaluates
//! the nonlocal double integral by nested trapezoidal quadrature for
//! every target point, applies the explicit Euler update, pins the
//! domain edges to zero, and checks the result against a sane-value
//! envelope before the state is allowed to advance.
//!
//! Entry points: [`run`] for a full configured run, or [`Simulation`]
//! for step-at-a-time control with an external recorder.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod config;
pub mod fields;
pub mod history;
pub mod quadrature;
pub mod simulation;
pub mod stability;

pub use config::{ConfigError, SeedConfig, SolverConfig};
pub use fields::FieldPair;
pub use history::{Frame, History, HistoryPolicy, HistoryRecorder};
pub use simulation::{run, RunError, SimRun, Simulation};
pub use stability::Envelope;
