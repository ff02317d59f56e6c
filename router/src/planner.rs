use citymap::{
    CityGraph,
    Error,
    LocationId,
    Metric,
    PathMetrics,
    Result,
    Route,
    engine,
};
use tracing::{debug, info};

/// Optimal route between two distinct locations.
pub fn find_route(city: &CityGraph, from: LocationId, to: LocationId, metric: Metric) -> Result<Route> {
    if from == to {
        return Err(Error::SameEndpoints(city.name(from).to_string()));
    }
    let route = engine::shortest_route(city, from, to, metric).ok_or_else(|| no_route(city, from, to))?;
    info!(from, to, ?metric, stops = route.path.len(), "route found");
    Ok(route)
}

fn no_route(city: &CityGraph, from: LocationId, to: LocationId) -> Error {
    Error::NoRoute {
        from: city.name(from).to_string(),
        to: city.name(to).to_string(),
    }
}

/// Distance-optimal Dijkstra route next to the fewest-stops BFS route.
#[derive(Debug, Clone)]
pub struct Comparison {
    dijkstra: Route,
    bfs: Route,
}

impl Comparison {
    pub fn dijkstra(&self) -> &Route {
        &self.dijkstra
    }

    pub fn bfs(&self) -> &Route {
        &self.bfs
    }

    /// Kilometres saved by taking the Dijkstra route.
    pub fn saved_distance(&self) -> f64 {
        self.bfs.metrics.distance - self.dijkstra.metrics.distance
    }

    /// Saving as a percentage of the BFS route's distance.
    pub fn saved_percent(&self) -> f64 {
        if self.bfs.metrics.distance > 0.0 {
            self.saved_distance() / self.bfs.metrics.distance * 100.0
        } else {
            0.0
        }
    }

    pub fn same_path(&self) -> bool {
        self.dijkstra.path == self.bfs.path
    }
}

pub fn compare(city: &CityGraph, from: LocationId, to: LocationId) -> Result<Comparison> {
    let dijkstra = find_route(city, from, to, Metric::Distance)?;
    let bfs = engine::fewest_stops(city, from, to).ok_or_else(|| no_route(city, from, to))?;
    Ok(Comparison { dijkstra, bfs })
}

/// Visits `waypoints` in order, taking the optimal route for each leg.
///
/// A waypoint may repeat its predecessor; that leg is empty.
pub fn plan_stops(city: &CityGraph, waypoints: &[LocationId], metric: Metric) -> Result<Route> {
    if waypoints.len() < 2 {
        return Err(Error::TooFewStops(waypoints.len()));
    }
    let mut path = vec![waypoints[0]];
    let mut metrics = PathMetrics::default();
    for leg in waypoints.windows(2) {
        let (from, to) = (leg[0], leg[1]);
        let segment = engine::compute_shortest_paths(city, from, metric).path_to(to);
        if segment.is_empty() {
            return Err(Error::UnreachableLeg {
                from: city.name(from).to_string(),
                to: city.name(to).to_string(),
            });
        }
        debug!(from, to, hops = segment.len() - 1, "leg");
        metrics += engine::path_metrics(city, &segment);
        path.extend_from_slice(&segment[1..]);
    }
    Ok(Route { path, metrics })
}
