//! Catalogue data models, types, and traits.

pub mod traits;
pub mod types;

pub use traits::CatalogueQuery;
pub use types::{Bus, CatalogueError, Coordinates, Result, RouteInfo, Stop};
