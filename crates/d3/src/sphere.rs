//! Sphere descriptors and the two placement predicates.

use crate::volume::Volume;
use nalgebra::Point3;
use sphere_pack_core::geometry::Shape;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A placed sphere: center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere {
    center: Point3<f64>,
    radius: f64,
}

impl Sphere {
    /// Creates a sphere centered at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::from_center(Point3::new(x, y, z), radius)
    }

    /// Creates a sphere from a center point.
    pub fn from_center(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center.
    pub fn center(&self) -> &Point3<f64> {
        &self.center
    }

    /// Returns the radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the x coordinate of the center.
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Returns the y coordinate of the center.
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Returns the z coordinate of the center.
    pub fn z(&self) -> f64 {
        self.center.z
    }

    /// Returns the sphere as an `(x, y, z, radius)` tuple.
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.center.x, self.center.y, self.center.z, self.radius)
    }

    /// Returns true if this sphere intersects `other`. See [`overlaps`].
    pub fn overlaps(&self, other: &Sphere) -> bool {
        overlaps(self, other)
    }

    /// Returns true if this sphere lies entirely inside `volume`.
    /// See [`is_contained`].
    pub fn is_contained_in(&self, volume: &Volume) -> bool {
        is_contained(self, volume)
    }

    /// Returns the share of `volume` this sphere occupies.
    ///
    /// Computed per axis so that boxes whose volume overflows `f64` still
    /// give a finite fraction.
    pub fn volume_fraction(&self, volume: &Volume) -> f64 {
        let r = self.radius;
        4.0 / 3.0 * PI * (r / volume.width()) * (r / volume.height()) * (r / volume.depth())
    }
}

impl Shape for Sphere {
    type Scalar = f64;

    fn measure(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    fn centroid(&self) -> Vec<f64> {
        vec![self.center.x, self.center.y, self.center.z]
    }
}

impl From<Sphere> for (f64, f64, f64, f64) {
    fn from(sphere: Sphere) -> Self {
        sphere.to_tuple()
    }
}

/// Returns true if the two spheres intersect.
///
/// The test is strict: tangent spheres, whose center distance equals the sum
/// of their radii, do not overlap.
pub fn overlaps(a: &Sphere, b: &Sphere) -> bool {
    center_distance(a, b) < a.radius + b.radius
}

fn center_distance(a: &Sphere, b: &Sphere) -> f64 {
    let distance = nalgebra::distance(&a.center, &b.center);
    if distance.is_finite() {
        return distance;
    }
    // Squared components overflowed; rescale by the largest one.
    let delta = a.center - b.center;
    let scale = delta.amax();
    scale * (delta / scale).norm()
}

/// Returns true if `sphere` lies entirely inside `volume`, i.e. every face of
/// the box is at least one radius away from the center.
pub fn is_contained(sphere: &Sphere, volume: &Volume) -> bool {
    let r = sphere.radius;
    let c = &sphere.center;
    (r <= c.x && c.x <= volume.width() - r)
        && (r <= c.y && c.y <= volume.height() - r)
        && (r <= c.z && c.z <= volume.depth() - r)
}
