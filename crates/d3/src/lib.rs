//! # Sphere Pack 3D
//!
//! Randomized packing of non-overlapping spheres into an axis-aligned box.
//!
//! Spheres are placed one slot at a time by rejection sampling: a candidate
//! radius and center are drawn, and the candidate is kept if it is fully
//! contained in the box and overlaps no sphere accepted so far. The result is
//! an ordered list of sphere descriptors; turning them into scene geometry is
//! left to the caller.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sphere_pack_d3::{validate_packing, SpherePacker, Volume};
//! use sphere_pack_d3::Config;
//!
//! let volume = Volume::try_new(100.0, 50.0, 30.0).unwrap();
//! let packer = SpherePacker::new(Config::default().with_max_spheres(40));
//! let result = packer
//!     .solve_with_rng(&volume, &mut StdRng::seed_from_u64(1))
//!     .unwrap();
//!
//! assert!(validate_packing(&volume, &result.placements).is_ok());
//! ```

pub mod packer;
pub mod sphere;
pub mod validation;
pub mod volume;

// Re-exports
pub use packer::{pack, pack_with_rng, try_place, AttemptCounters, RadiusRange, SpherePacker};
pub use sphere::{is_contained, overlaps, Sphere};
pub use sphere_pack_core::{Config, Error, Result, SolveResult, SolveSummary, Solver};
pub use validation::validate_packing;
pub use volume::Volume;
