use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use citymap::{CityGraph, Location, LocationId};
use serde::{
    Deserialize,
    Deserializer,
};

#[derive(Deserialize, Debug, Clone)]
pub struct LocationInfo {
    name: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadInfo {
    u: LocationId,
    v: LocationId,
    distance: f64,
    /// minutes; 0 means "estimate from distance"
    time: f64,
}

/// City map read from JSON:
///
/// ```json
/// {
///   "locations": [{"name": "Paldi", "x": 2, "y": 4}, ...],
///   "roads": [[0, 1, 5.2, 12], [1, 2, 3.0], ...]
/// }
/// ```
///
/// Location ids are positions in `locations`.
#[derive(Deserialize, Debug)]
pub struct CityConfig {
    locations: Vec<LocationInfo>,
    #[serde(deserialize_with = "from_roads")]
    roads: Vec<RoadInfo>,
}

impl LocationInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl RoadInfo {
    pub fn endpoints(&self) -> (LocationId, LocationId) {
        (self.u, self.v)
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

impl CityConfig {
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json_str = fs::read_to_string(path)
            .with_context(|| format!("cannot read city file {}", path.display()))?;
        Self::from_json_str(&json_str)
            .with_context(|| format!("invalid city file {}", path.display()))
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn locations(&self) -> &[LocationInfo] {
        &self.locations
    }

    pub fn roads(&self) -> &[RoadInfo] {
        &self.roads
    }

    /// Builds the city, rejecting out-of-range ids and bad weights.
    pub fn into_city(self) -> Result<CityGraph> {
        let locations: Vec<_> = self.locations.iter()
            .map(|l| Location::new(l.name.clone(), l.x, l.y))
            .collect();
        let roads: Vec<_> = self.roads.iter()
            .map(|r| (r.u, r.v, r.distance, r.time))
            .collect();
        Ok(CityGraph::from_parts(&locations, &roads)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRoad {
    Timed(LocationId, LocationId, f64, f64),
    Untimed(LocationId, LocationId, f64),
}

fn from_roads<'de, D>(deserializer: D) -> Result<Vec<RoadInfo>, D::Error>
where
    D: Deserializer<'de>
{
    let roads: Vec<RawRoad> = Deserialize::deserialize(deserializer)?;
    Ok(roads.into_iter().map(|r| match r {
        RawRoad::Timed(u, v, distance, time) => RoadInfo { u, v, distance, time },
        RawRoad::Untimed(u, v, distance) => RoadInfo { u, v, distance, time: 0.0 },
    }).collect())
}
