//! Catalogue storage and queries.

pub mod transport_catalogue;

pub use transport_catalogue::TransportCatalogue;
