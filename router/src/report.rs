use std::fmt;
use citymap::{CityGraph, Route};
use itertools::Itertools;
use serde::Serialize;

use crate::planner::Comparison;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Leg {
    from: String,
    to: String,
    distance: f64,
    time: f64,
}

/// A route with names resolved, ready to print or serialize.
#[derive(Serialize, Debug, Clone)]
pub struct RouteReport {
    algorithm: String,
    stops: Vec<String>,
    legs: Vec<Leg>,
    total_distance: f64,
    total_time: f64,
}

impl RouteReport {
    pub fn new(city: &CityGraph, algorithm: impl Into<String>, route: &Route) -> Self {
        let legs = route.path.iter()
            .tuple_windows()
            .map(|(&a, &b)| {
                let road = city.road(a, b)
                    .unwrap_or_else(|| panic!("no road {} -> {} on route {:?}", a, b, route.path));
                let (distance, time) = (road.distance(), road.time());
                Leg {
                    from: city.name(a).to_string(),
                    to: city.name(b).to_string(),
                    distance,
                    time,
                }
            })
            .collect();
        Self {
            algorithm: algorithm.into(),
            stops: route.path.iter().map(|&v| city.name(v).to_string()).collect(),
            legs,
            total_distance: route.metrics.distance,
            total_time: route.metrics.time,
        }
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "{}", rule)?;
        writeln!(f, "ROUTE FOUND USING {}", self.algorithm)?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        for (i, stop) in self.stops.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, stop)?;
            if let Some(leg) = self.legs.get(i) {
                writeln!(f, "     ↓ {:.1} km ({:.1} min)", leg.distance, leg.time)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "ROUTE SUMMARY")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "  Total Distance: {:.2} km", self.total_distance)?;
        writeln!(f, "  Estimated Time: {:.2} minutes", self.total_time)?;
        writeln!(f, "  Number of Stops: {} locations", self.num_stops())?;
        write!(f, "{}", rule)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ComparisonReport {
    dijkstra: RouteReport,
    bfs: RouteReport,
    saved_distance: f64,
    saved_percent: f64,
}

impl ComparisonReport {
    pub fn new(city: &CityGraph, cmp: &Comparison) -> Self {
        Self {
            dijkstra: RouteReport::new(city, "Dijkstra (distance)", cmp.dijkstra()),
            bfs: RouteReport::new(city, "BFS (fewest stops)", cmp.bfs()),
            saved_distance: cmp.saved_distance(),
            saved_percent: cmp.saved_percent(),
        }
    }

    pub fn saved_distance(&self) -> f64 {
        self.saved_distance
    }
}

fn summary(f: &mut fmt::Formatter<'_>, r: &RouteReport) -> fmt::Result {
    writeln!(f, "{}:", r.algorithm)?;
    writeln!(f, "   Distance: {:.2} km", r.total_distance)?;
    writeln!(f, "   Time: {:.2} min", r.total_time)?;
    writeln!(f, "   Stops: {} locations", r.num_stops())?;
    writeln!(f, "   Path: {}", r.stops.join(" → "))
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "{}", rule)?;
        writeln!(f, "ALGORITHM COMPARISON")?;
        writeln!(f, "{}", rule)?;
        summary(f, &self.dijkstra)?;
        writeln!(f)?;
        summary(f, &self.bfs)?;
        writeln!(f)?;
        if self.saved_distance > 0.0 {
            writeln!(f, "Dijkstra saves {:.1}% distance ({:.2} km shorter)", self.saved_percent, self.saved_distance)?;
        } else if self.saved_distance < 0.0 {
            writeln!(f, "BFS found a shorter path")?;
        } else {
            writeln!(f, "Both algorithms found equally short paths")?;
        }
        write!(f, "{}", rule)
    }
}

/// `[id] name (x, y)` per location.
pub fn locations_table(city: &CityGraph) -> String {
    city.locations()
        .map(|(id, loc)| {
            let (x, y) = loc.coordinates();
            format!("  [{:>2}] {} ({}, {})", id, loc.name(), x, y)
        })
        .join("\n")
}
