//! Trestle Core
//!
//! Domain types and error handling for the Trestle configuration layer.
//! This crate has minimal dependencies and defines the shared vocabulary
//! used across all other crates: workers, platforms, stages, steps, and
//! the derived builder/scheduler definitions handed to the CI engine.

pub mod builder;
pub mod error;
pub mod platform;
pub mod scheduler;
pub mod stage;
pub mod step;
pub mod worker;

pub use error::{Error, Result};
