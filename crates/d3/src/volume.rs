//! Box-shaped packing volume.

use nalgebra::Vector3;
use sphere_pack_core::geometry::Boundary;
use sphere_pack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The axis-aligned box `[0, width] x [0, height] x [0, depth]`.
///
/// Width runs along x, height along y and depth along z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Volume {
    /// Dimensions (width, height, depth).
    dimensions: Vector3<f64>,
}

impl Volume {
    /// Creates a new volume with the given dimensions.
    ///
    /// The dimensions are not checked; call [`Boundary::validate`] or use
    /// [`Volume::try_new`].
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, height, depth),
        }
    }

    /// Creates a new volume, rejecting non-positive or non-finite dimensions.
    pub fn try_new(width: f64, height: f64, depth: f64) -> Result<Self> {
        let volume = Self::new(width, height, depth);
        volume.validate()?;
        Ok(volume)
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the width (x extent).
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height (y extent).
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the depth (z extent).
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the smallest of the three dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.dimensions.min()
    }

    /// Returns true if a sphere of the given radius fits along every axis.
    pub fn admits_radius(&self, radius: f64) -> bool {
        radius <= self.min_dimension() - radius
    }
}

impl Boundary for Volume {
    type Scalar = f64;

    fn measure(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    fn aabb_vec(&self) -> (Vec<f64>, Vec<f64>) {
        (
            vec![0.0, 0.0, 0.0],
            vec![self.dimensions.x, self.dimensions.y, self.dimensions.z],
        )
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.dimensions.x),
            ("height", self.dimensions.y),
            ("depth", self.dimensions.z),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidDimension(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    fn contains_point(&self, point: &[f64]) -> bool {
        if point.len() < 3 {
            return false;
        }
        point[0] >= 0.0
            && point[0] <= self.dimensions.x
            && point[1] >= 0.0
            && point[1] <= self.dimensions.y
            && point[2] >= 0.0
            && point[2] <= self.dimensions.z
    }
}
