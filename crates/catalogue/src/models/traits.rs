//! Read-side interface of the catalogue.
//!
//! Result formatting only needs lookups and the two queries, so it is
//! written against this trait rather than the concrete catalogue.

use std::collections::BTreeSet;

use crate::identifiers::*;
use crate::models::types::*;

pub trait CatalogueQuery {
    // ---- Lookups ----
    fn find_stop(&self, name: &str) -> Option<&Stop>;
    fn find_bus(&self, name: &str) -> Option<&Bus>;

    // ---- Queries ----

    /// Aggregate statistics for a route.
    fn route_info(&self, bus: &Bus) -> RouteInfo;

    /// Buses serving a stop, in ascending name order. Empty if none do.
    fn stop_routes(&self, stop: &Stop) -> &BTreeSet<BusName>;
}
