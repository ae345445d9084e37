//! # transport-catalogue
//!
//! In-memory catalogue of bus stops and routes.
//!
//! ## Features
//!
//! - **Route statistics**: stop counts, measured length and curvature
//! - **Stop lookups**: which buses serve a stop
//! - **Text requests**: reads `Stop`/`Bus` base requests and answers
//!   statistics requests line by line
//!
//! ## Example
//!
//! ```
//! use transport_catalogue::prelude::*;
//!
//! let mut catalogue = TransportCatalogue::new();
//! let a = catalogue.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
//! let b = catalogue.add_stop("B", Coordinates::new(55.1, 37.1)).unwrap();
//! catalogue.add_distance("A", "B", 1000);
//!
//! catalogue.add_bus("1", vec![Some(a), Some(b), Some(a)]).unwrap();
//!
//! let bus = catalogue.find_bus("1").unwrap();
//! let info = catalogue.route_info(bus);
//! assert_eq!(info.stop_count, 3);
//! assert_eq!(info.unique_stop_count, 2);
//! assert_eq!(info.route_length, 2000);
//! ```

pub mod catalogue;
pub mod identifiers;
pub mod input;
pub mod models;
pub mod spatial;
pub mod stats;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalogue::TransportCatalogue;
    pub use crate::identifiers::*;
    pub use crate::input::{read_base_requests, InputReader, ParseError};
    pub use crate::models::{traits::*, types::*};
    pub use crate::spatial::compute_distance;
    pub use crate::stats::{print_stat, process_stat_requests};
}

pub use prelude::*;
