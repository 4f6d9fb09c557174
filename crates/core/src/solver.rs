//! Solver traits and configuration.

use crate::geometry::{Boundary, Shape};
use crate::result::SolveResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of placement attempts per slot used when none is configured.
pub const DEFAULT_ATTEMPTS_PER_SPHERE: usize = 200;

/// Upper bound on output length used when none is configured.
pub const DEFAULT_MAX_SPHERES: usize = 100;

/// Common configuration for packers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of placement slots (upper bound on the number of spheres).
    pub max_spheres: usize,

    /// Candidate placements tried per slot before the slot is given up.
    pub attempts_per_sphere: usize,

    /// The largest radius is `min(width, height, depth) / grid_divisor`.
    pub grid_divisor: f64,

    /// The smallest radius as a fraction of the largest (0.0 - 1.0].
    pub min_radius_ratio: f64,

    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,

    /// Number of independent packings to run (the densest one wins).
    pub restarts: usize,

    /// Seed for the random source (None = seeded from entropy).
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_spheres: DEFAULT_MAX_SPHERES,
            attempts_per_sphere: DEFAULT_ATTEMPTS_PER_SPHERE,
            grid_divisor: 10.0,
            min_radius_ratio: 0.5,
            time_limit_ms: 0,
            restarts: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of spheres.
    pub fn with_max_spheres(mut self, n: usize) -> Self {
        self.max_spheres = n;
        self
    }

    /// Sets the attempt budget per slot.
    pub fn with_attempts_per_sphere(mut self, n: usize) -> Self {
        self.attempts_per_sphere = n;
        self
    }

    /// Sets the grid divisor.
    pub fn with_grid_divisor(mut self, divisor: f64) -> Self {
        self.grid_divisor = divisor;
        self
    }

    /// Sets the minimum radius ratio.
    pub fn with_min_radius_ratio(mut self, ratio: f64) -> Self {
        self.min_radius_ratio = ratio;
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the number of independent restarts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets a fixed seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.attempts_per_sphere == 0 {
            return Err(Error::InvalidCount(
                "attempts_per_sphere must be at least 1".into(),
            ));
        }

        if !self.grid_divisor.is_finite() || self.grid_divisor <= 0.0 {
            return Err(Error::ConfigError(format!(
                "grid_divisor must be positive and finite, got {}",
                self.grid_divisor
            )));
        }

        if !(self.min_radius_ratio > 0.0 && self.min_radius_ratio <= 1.0) {
            return Err(Error::ConfigError(format!(
                "min_radius_ratio must be in (0, 1], got {}",
                self.min_radius_ratio
            )));
        }

        if self.restarts == 0 {
            return Err(Error::ConfigError("restarts must be at least 1".into()));
        }

        Ok(())
    }
}

/// Progress callback for long-running operations.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information during packing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressInfo {
    /// Number of slots processed so far.
    pub slot: usize,
    /// Total number of slots.
    pub total_slots: usize,
    /// Number of spheres placed so far.
    pub placed: usize,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Whether the packer is still running.
    pub running: bool,
}

/// Trait for packers that generate items inside a boundary.
pub trait Solver {
    /// The boundary type this solver fills.
    type Boundary: Boundary;
    /// The item type this solver places.
    type Item: Shape;

    /// Packs the boundary.
    fn solve(&self, boundary: &Self::Boundary) -> Result<SolveResult<Self::Item>>;

    /// Packs the boundary, reporting progress after every slot.
    fn solve_with_progress(
        &self,
        boundary: &Self::Boundary,
        callback: ProgressCallback,
    ) -> Result<SolveResult<Self::Item>>;

    /// Cancels an ongoing solve operation.
    fn cancel(&self);
}
