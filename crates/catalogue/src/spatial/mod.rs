//! Geographic distance utilities.

pub mod queries;

pub use queries::{compute_distance, EARTH_RADIUS_M};
