//! Core types for the Blight epidemic solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental types shared across the Blight workspace: the step
//! counter, field identifiers, model parameters, and the runtime error
//! taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod params;

pub use error::StepError;
pub use field::FieldKind;
pub use id::StepId;
pub use params::ModelParams;
