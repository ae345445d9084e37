//! Core data types for the catalogue.

use std::fmt;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// Geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

// geo uses (x, y) = (longitude, latitude)
impl From<Coordinates> for Point {
    fn from(c: Coordinates) -> Self {
        Point::new(c.lng, c.lat)
    }
}

impl From<Point> for Coordinates {
    fn from(p: Point) -> Self {
        Self::new(p.y(), p.x())
    }
}

/// A named stop. Immutable once added to a catalogue.
#[derive(Clone, Debug)]
pub struct Stop {
    pub id: StopId,
    pub name: StopName,
    pub coordinates: Coordinates,
}

/// A bus route: an ordered sequence of stop handles.
///
/// `None` entries are references to stops that did not exist when the bus
/// was added. Circular routes end on their first stop; linear routes are
/// stored already expanded there and back.
#[derive(Clone, Debug)]
pub struct Bus {
    pub id: BusId,
    pub name: BusName,
    pub stops: Vec<Option<StopId>>,
}

impl Bus {
    /// Number of stop references that could not be resolved.
    pub fn unresolved_count(&self) -> usize {
        self.stops.iter().filter(|s| s.is_none()).count()
    }
}

/// Aggregate statistics for a single route.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteInfo {
    /// Length of the stop sequence, repeats included.
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Sum of measured road distances, in meters.
    pub route_length: u64,
    /// Sum of great-circle distances, in meters.
    pub geo_length: f64,
    /// `route_length / geo_length`. Non-finite when `geo_length` is zero.
    pub curvature: f64,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("Stop {name} already exists at ({existing}), refusing to move it to ({requested})")]
    ConflictingStop {
        name: StopName,
        existing: Coordinates,
        requested: Coordinates,
    },

    #[error("Bus {0} already exists with a different stop sequence")]
    ConflictingBus(BusName),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
