use std::collections::HashMap;
use graph::DiGraph;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

pub type LocationId = usize;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Location {
    name: String,
    /// Display coordinates
    x: f64,
    y: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// One direction of a road.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Road {
    /// km
    distance: f64,
    /// minutes
    time: f64,
}

impl Road {
    /// A `time` of zero means "unknown" and is estimated as twice the distance.
    pub fn new(distance: f64, time: f64) -> Self {
        let time = if time == 0.0 { distance * 2.0 } else { time };
        Self { distance, time }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

/// A fixed set of locations joined by two-way roads.
///
/// Built once, then only read: route queries take `&CityGraph` and keep
/// their working state to themselves.
#[derive(Debug, Clone)]
pub struct CityGraph {
    graph: DiGraph<Location, Road>,
    name_to_id: HashMap<String, LocationId>,
}

impl CityGraph {
    pub fn new(node_count: usize) -> Self {
        Self {
            graph: DiGraph::with_nodes(node_count, Location::default()),
            name_to_id: HashMap::new(),
        }
    }

    /// Builds a city whose location ids are positions in `locations`.
    /// Each road is `(u, v, distance, time)`.
    pub fn from_parts(locations: &[Location], roads: &[(LocationId, LocationId, f64, f64)]) -> Result<Self> {
        let mut city = Self::new(locations.len());
        for (id, loc) in locations.iter().enumerate() {
            city.add_location(id, loc.name(), loc.x, loc.y)?;
        }
        for &(u, v, distance, time) in roads {
            city.add_road(u, v, distance, time)?;
        }
        Ok(city)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.graph.contains_node(id)
    }

    fn check(&self, id: LocationId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::InvalidLocation(id))
        }
    }

    /// Places a location at `id`, replacing whatever was there.
    /// On a name collision the latest registration wins.
    pub fn add_location(&mut self, id: LocationId, name: &str, x: f64, y: f64) -> Result<()> {
        self.check(id)?;
        debug!(id, location = name, "add location");
        *self.graph.node_weight_mut(id) = Location::new(name, x, y);
        self.name_to_id.insert(name.to_string(), id);
        Ok(())
    }

    /// Adds the two directed halves of a road between `u` and `v`.
    pub fn add_road(&mut self, u: LocationId, v: LocationId, distance: f64, time: f64) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        for weight in [distance, time] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidWeight { from: u, to: v, weight });
            }
        }
        let road = Road::new(distance, time);
        debug!(u, v, distance = road.distance(), time = road.time(), "add road");
        self.graph.add_edge_pair(u, v, road);
        Ok(())
    }

    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    pub fn location(&self, id: LocationId) -> &Location {
        self.graph.node(id).weight()
    }

    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.graph.nodes().iter().map(|n| n.weight()).enumerate()
    }

    pub fn name(&self, id: LocationId) -> &str {
        self.location(id).name()
    }

    /// `(destination, road)` pairs leaving `id`, in insertion order.
    pub fn roads_from(&self, id: LocationId) -> impl Iterator<Item = (LocationId, &Road)> + '_ {
        self.graph.edges_from(id).map(|e| (e.target(), e.weight()))
    }

    /// The first road `u -> v`, if any.
    pub fn road(&self, u: LocationId, v: LocationId) -> Option<&Road> {
        self.graph.find_edge(u, v).map(|e| e.weight())
    }

    pub fn graph(&self) -> &DiGraph<Location, Road> {
        &self.graph
    }
}
