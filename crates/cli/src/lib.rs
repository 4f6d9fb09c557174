//! Command-line support for sphere-pack.
//!
//! Provides the report format the `sphere-pack` binary writes and reads.

mod report;

pub use report::{OutputFormat, PackReport, SphereRecord};
