//! Invariant checks for finished packings.

use crate::sphere::Sphere;
use crate::volume::Volume;
use sphere_pack_core::geometry::Boundary;
use sphere_pack_core::{Error, Result};

/// Verifies that `spheres` is a valid packing of `volume`.
///
/// Every sphere must have a positive finite radius and lie entirely inside the
/// volume, and no two spheres may overlap (tangency is allowed). The first
/// violation found is reported as [`Error::InvalidPacking`].
pub fn validate_packing(volume: &Volume, spheres: &[Sphere]) -> Result<()> {
    volume.validate()?;

    for (i, sphere) in spheres.iter().enumerate() {
        if !sphere.radius().is_finite() || sphere.radius() <= 0.0 {
            return Err(Error::InvalidPacking(format!(
                "sphere {} has non-positive radius {}",
                i,
                sphere.radius()
            )));
        }

        if !sphere.is_contained_in(volume) {
            return Err(Error::InvalidPacking(format!(
                "sphere {} at ({}, {}, {}) with radius {} is not contained in the volume",
                i,
                sphere.x(),
                sphere.y(),
                sphere.z(),
                sphere.radius()
            )));
        }
    }

    for (i, a) in spheres.iter().enumerate() {
        for (j, b) in spheres.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                return Err(Error::InvalidPacking(format!(
                    "spheres {} and {} overlap",
                    i, j
                )));
            }
        }
    }

    Ok(())
}
