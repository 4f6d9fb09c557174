//! # Sphere Pack
//!
//! Randomized packing of non-overlapping spheres into a box.
//!
//! This crate provides:
//! - **Core types**: configuration, the solver trait, errors and results
//! - **3D packing**: rejection-sampling placement of spheres of random radius
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sphere_pack::d3::{SpherePacker, Volume};
//! use sphere_pack::{Config, Solver};
//!
//! let volume = Volume::try_new(100.0, 50.0, 30.0)?;
//! let packer = SpherePacker::new(Config::default().with_max_spheres(100));
//! let result = packer.solve(&volume)?;
//!
//! for sphere in &result.placements {
//!     let (x, y, z, r) = sphere.to_tuple();
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): 3D sphere packing
//! - `serde`: Serialization support

/// Core traits and abstractions.
pub use sphere_pack_core as core;

/// 3D sphere packing.
#[cfg(feature = "d3")]
pub use sphere_pack_d3 as d3;

// Re-export commonly used types at root level
pub use sphere_pack_core::{Config, Error, Result, SolveResult, Solver};

#[cfg(feature = "d3")]
pub use sphere_pack_d3::{pack, Sphere, Volume};
