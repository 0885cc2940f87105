//! Test fixtures for Blight development.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{decay_only_config, small_stable_config, unstable_config};
