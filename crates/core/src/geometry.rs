//! Geometry traits shared by packers.

use crate::Result;

/// A closed region that placed items must stay inside.
pub trait Boundary {
    /// The scalar type for coordinates.
    type Scalar;

    /// Returns the measure (volume in 3D) of the boundary.
    fn measure(&self) -> Self::Scalar;

    /// Returns the axis-aligned bounding box as (min, max) corner vectors.
    fn aabb_vec(&self) -> (Vec<Self::Scalar>, Vec<Self::Scalar>);

    /// Validates the boundary, returning an error for degenerate input.
    fn validate(&self) -> Result<()>;

    /// Returns true if the point lies inside or on the boundary.
    fn contains_point(&self, point: &[Self::Scalar]) -> bool;
}

/// An item produced by a packer.
pub trait Shape {
    /// The scalar type for coordinates.
    type Scalar;

    /// Returns the measure (volume in 3D) of the shape.
    fn measure(&self) -> Self::Scalar;

    /// Returns the centroid coordinates.
    fn centroid(&self) -> Vec<Self::Scalar>;
}
