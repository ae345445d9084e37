//! In-memory catalogue of stops, buses and measured distances.
//!
//! Stops and buses live in append-only arenas and are referenced by
//! [`StopId`] / [`BusId`] handles, so references never dangle.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, trace, warn};

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::spatial::compute_distance;

type DistanceKey = (Option<StopId>, Option<StopId>);

#[derive(Clone, Debug, Default)]
pub struct TransportCatalogue {
    // Arenas
    stops: Vec<Stop>,
    buses: Vec<Bus>,

    // Lookup maps
    stop_map: HashMap<StopName, StopId>,
    bus_map: HashMap<BusName, BusId>,

    /// Indexed by `StopId`, kept in step with `buses`.
    stop_buses: Vec<BTreeSet<BusName>>,
    distances: HashMap<DistanceKey, u32>,
}

impl TransportCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, or return the existing one if name and coordinates match.
    pub fn add_stop(&mut self, name: impl AsRef<str>, coordinates: Coordinates) -> Result<StopId> {
        let name = name.as_ref();

        if let Some(existing) = self.find_stop(name) {
            if existing.coordinates == coordinates {
                trace!("stop {name} already present");
                return Ok(existing.id);
            }
            return Err(CatalogueError::ConflictingStop {
                name: existing.name.clone(),
                existing: existing.coordinates,
                requested: coordinates,
            });
        }

        let id = StopId::from_index(self.stops.len());
        let name = StopName::new(name);
        debug!("adding stop {name} at ({coordinates})");

        self.stop_map.insert(name.clone(), id);
        self.stops.push(Stop {
            id,
            name,
            coordinates,
        });
        self.stop_buses.push(BTreeSet::new());

        Ok(id)
    }

    /// Add a bus, or return the existing one if the stop sequence matches.
    ///
    /// Every resolved stop in `stops` gains this bus in its route set.
    pub fn add_bus(&mut self, name: impl AsRef<str>, stops: Vec<Option<StopId>>) -> Result<BusId> {
        let name = name.as_ref();

        if let Some(existing) = self.find_bus(name) {
            if existing.stops == stops {
                trace!("bus {name} already present");
                return Ok(existing.id);
            }
            return Err(CatalogueError::ConflictingBus(existing.name.clone()));
        }

        let id = BusId::from_index(self.buses.len());
        let name = BusName::new(name);

        let bus = Bus {
            id,
            name: name.clone(),
            stops,
        };
        let unresolved = bus.unresolved_count();
        if unresolved > 0 {
            warn!("bus {name} references {unresolved} unknown stop(s)");
        }
        debug!("adding bus {name} with {} stops", bus.stops.len());

        for stop in bus.stops.iter().flatten() {
            if let Some(routes) = self.stop_buses.get_mut(stop.index()) {
                routes.insert(name.clone());
            }
        }

        self.bus_map.insert(name, id);
        self.buses.push(bus);

        Ok(id)
    }

    /// Record the measured road distance from one stop to another.
    ///
    /// Only the exact ordered pair is overwritten. Names that do not resolve
    /// are stored as unresolved keys and can never be looked up by name.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) {
        let key = (self.stop_id(from), self.stop_id(to));
        if key.0.is_none() || key.1.is_none() {
            warn!("distance {from} -> {to} references an unknown stop");
        }
        debug!("distance {from} -> {to}: {meters}m");

        self.distances.insert(key, meters);
    }

    /// Measured distance between two stops.
    ///
    /// Falls back to the reverse direction, then to zero. Unresolved stops
    /// always measure zero, so records stored against them stay dead.
    pub fn get_distance(&self, from: Option<StopId>, to: Option<StopId>) -> u32 {
        if from.is_none() || to.is_none() {
            return 0;
        }

        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// [`get_distance`](Self::get_distance) by stop name.
    pub fn distance_between(&self, from: &str, to: &str) -> u32 {
        self.get_distance(self.stop_id(from), self.stop_id(to))
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_map.get(name).copied()
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.index())
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    fn coordinates(&self, id: Option<StopId>) -> Option<Coordinates> {
        id.and_then(|id| self.stop(id)).map(|s| s.coordinates)
    }
}

impl CatalogueQuery for TransportCatalogue {
    fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).and_then(|id| self.stop(id))
    }

    fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_map.get(name).and_then(|&id| self.bus(id))
    }

    fn route_info(&self, bus: &Bus) -> RouteInfo {
        let unique: HashSet<Option<StopId>> = bus.stops.iter().copied().collect();

        let mut route_length = 0u64;
        let mut geo_length = 0.0;
        for pair in bus.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);

            route_length += u64::from(self.get_distance(from, to));
            if let (Some(a), Some(b)) = (self.coordinates(from), self.coordinates(to)) {
                geo_length += compute_distance(a, b);
            }
        }

        RouteInfo {
            stop_count: bus.stops.len(),
            unique_stop_count: unique.len(),
            route_length,
            geo_length,
            curvature: route_length as f64 / geo_length,
        }
    }

    fn stop_routes(&self, stop: &Stop) -> &BTreeSet<BusName> {
        static NO_ROUTES: BTreeSet<BusName> = BTreeSet::new();

        self.stop_buses.get(stop.id.index()).unwrap_or(&NO_ROUTES)
    }
}
