//! Error types for sphere-pack.

use thiserror::Error;

/// Result type alias for sphere-pack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during packing.
///
/// Input validation failures are raised before any sampling starts. Once a
/// packing run is underway it cannot fail: placing fewer spheres than
/// requested is a normal outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// A volume dimension is zero, negative or not finite.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A sphere count or attempt budget is out of range.
    #[error("Invalid count: {0}")]
    InvalidCount(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A set of spheres violates the packing invariants.
    #[error("Invalid packing: {0}")]
    InvalidPacking(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
