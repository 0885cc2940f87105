//! Spatial and temporal discretization for Blight simulations.
//!
//! [`SpatialGrid`] is a uniform 2D grid over a rectangular domain;
//! [`TimeGrid`] is a uniform sequence of time points over a half-open
//! horizon. Both are immutable once built and are constructed together
//! through [`GridConfig::build`], which validates every structural
//! invariant before any computation starts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod spatial;
pub mod time;

pub use config::GridConfig;
pub use error::GridError;
pub use spatial::SpatialGrid;
pub use time::TimeGrid;
