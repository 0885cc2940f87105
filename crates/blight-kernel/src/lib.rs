//! Pairwise spatial interaction kernel for Blight simulations.
//!
//! The [`ContactKernel`] assigns every ordered pair of grid points a
//! weight that decays exponentially with their Euclidean distance. It is
//! built once per run and read on every integration step.
//!
//! # Cost
//!
//! The kernel stores one weight per *pair* of grid points: O(N⁴) time
//! and memory for an N×N grid. This is the dominant resource cost of the
//! whole system and the practical ceiling on feasible resolution — at
//! the default N = 30 the table holds 810 000 weights; doubling N
//! multiplies that by 16.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod kernel;

pub use config::{KernelConfig, KernelError};
pub use kernel::ContactKernel;
