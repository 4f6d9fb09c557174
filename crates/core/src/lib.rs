//! # Sphere Pack Core
//!
//! Core traits and abstractions for the sphere-pack engine.
//!
//! This crate provides the types shared between packers and their front ends:
//!
//! - **Errors**: the [`Error`] taxonomy raised by input validation
//! - **Geometry traits**: [`Boundary`] and [`Shape`]
//! - **Solver trait**: common interface for packers, with [`Config`] and
//!   progress reporting
//! - **Results**: [`SolveResult`] and [`SolveSummary`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Boundary, Shape};
pub use result::{SolveResult, SolveSummary};
pub use solver::{
    Config, ProgressCallback, ProgressInfo, Solver, DEFAULT_ATTEMPTS_PER_SPHERE,
    DEFAULT_MAX_SPHERES,
};
