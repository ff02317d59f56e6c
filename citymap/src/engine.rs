use graph::algo;
use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::city::{CityGraph, LocationId, Road};

/// Which road weight a query minimises.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Distance,
    Time,
}

impl Metric {
    pub fn weight(self, road: &Road) -> f64 {
        match self {
            Metric::Distance => road.distance(),
            Metric::Time => road.time(),
        }
    }
}

/// Single-source result: settled costs and the predecessor tree.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: LocationId,
    metric: Metric,
    costs: Vec<Option<f64>>,
    predecessors: Vec<Option<LocationId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> LocationId {
        self.source
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// `None` if `v` is unreachable from the source.
    pub fn cost(&self, v: LocationId) -> Option<f64> {
        self.costs[v]
    }

    pub fn costs(&self) -> &[Option<f64>] {
        &self.costs
    }

    pub fn predecessor(&self, v: LocationId) -> Option<LocationId> {
        self.predecessors[v]
    }

    pub fn predecessors(&self) -> &[Option<LocationId>] {
        &self.predecessors
    }

    pub fn path_to(&self, destination: LocationId) -> Vec<LocationId> {
        reconstruct_path(self.source, destination, &self.predecessors)
    }
}

/// Totals along a path.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct PathMetrics {
    pub distance: f64,
    pub time: f64,
}

impl std::ops::Add for PathMetrics {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            distance: self.distance + rhs.distance,
            time: self.time + rhs.time,
        }
    }
}

impl std::ops::AddAssign for PathMetrics {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A non-empty path together with its totals.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Vec<LocationId>,
    pub metrics: PathMetrics,
}

/// Dijkstra from `source` over the chosen road weight.
///
/// `source` must be a valid id; validating user input is the caller's job.
pub fn compute_shortest_paths(city: &CityGraph, source: LocationId, metric: Metric) -> ShortestPaths {
    debug!(source, ?metric, "shortest paths");
    let (costs, predecessors) = algo::dijkstra(city.graph(), |e| metric.weight(e.weight()), source);
    ShortestPaths {
        source,
        metric,
        costs,
        predecessors,
    }
}

/// The `source`--`destination` path encoded in `predecessors`, or an empty
/// vector if there is none.
pub fn reconstruct_path(
    source: LocationId,
    destination: LocationId,
    predecessors: &[Option<LocationId>]
) -> Vec<LocationId> {
    algo::reconstruct_path(source, destination, predecessors)
}

/// Sums distance and time over consecutive stops of `path`.
///
/// Panics if two consecutive stops are not joined by a road; paths from
/// [`reconstruct_path`] always are.
pub fn path_metrics(city: &CityGraph, path: &[LocationId]) -> PathMetrics {
    path.iter()
        .tuple_windows()
        .map(|(&a, &b)| {
            let road = city.road(a, b)
                .unwrap_or_else(|| panic!("no road {} -> {} on path {:?}", a, b, path));
            PathMetrics {
                distance: road.distance(),
                time: road.time(),
            }
        })
        .fold(PathMetrics::default(), |acc, m| acc + m)
}

pub fn shortest_route(
    city: &CityGraph,
    source: LocationId,
    destination: LocationId,
    metric: Metric
) -> Option<Route> {
    let path = compute_shortest_paths(city, source, metric).path_to(destination);
    if path.is_empty() {
        return None;
    }
    let metrics = path_metrics(city, &path);
    Some(Route { path, metrics })
}

/// Route with the fewest roads, regardless of their weights.
pub fn fewest_stops(city: &CityGraph, source: LocationId, destination: LocationId) -> Option<Route> {
    debug!(source, destination, "fewest stops");
    let path = algo::bfs(city.graph(), source, destination);
    if path.is_empty() {
        return None;
    }
    let metrics = path_metrics(city, &path);
    Some(Route { path, metrics })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sample::sample_city;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Every simple path from `s` to `t`, by exhaustive search.
    fn simple_paths(city: &CityGraph, s: LocationId, t: LocationId) -> Vec<Vec<LocationId>> {
        fn go(city: &CityGraph, t: LocationId, path: &mut Vec<LocationId>, out: &mut Vec<Vec<LocationId>>) {
            let v = *path.last().unwrap();
            if v == t {
                out.push(path.clone());
                return;
            }
            let next: Vec<_> = city.roads_from(v).map(|(u, _)| u).collect();
            for u in next {
                if !path.contains(&u) {
                    path.push(u);
                    go(city, t, path, out);
                    path.pop();
                }
            }
        }
        let mut out = Vec::new();
        go(city, t, &mut vec![s], &mut out);
        out
    }

    #[test]
    fn test_source_cost_is_zero() {
        let city = sample_city();
        for s in 0..city.node_count() {
            for metric in [Metric::Distance, Metric::Time] {
                let sp = compute_shortest_paths(&city, s, metric);
                assert_eq!(sp.cost(s), Some(0.0));
                assert_eq!(sp.predecessor(s), None);
            }
        }
    }

    #[test]
    fn test_cost_matches_path() {
        let city = sample_city();
        for s in 0..city.node_count() {
            for metric in [Metric::Distance, Metric::Time] {
                let sp = compute_shortest_paths(&city, s, metric);
                for v in 0..city.node_count() {
                    let path = sp.path_to(v);
                    assert_eq!(path.first(), Some(&s));
                    assert_eq!(path.last(), Some(&v));
                    let m = path_metrics(&city, &path);
                    let total = match metric {
                        Metric::Distance => m.distance,
                        Metric::Time => m.time,
                    };
                    assert!(approx(sp.cost(v).unwrap(), total), "{} -> {} {:?}", s, v, metric);
                }
            }
        }
    }

    #[test]
    fn test_trivial_path() {
        let city = sample_city();
        let sp = compute_shortest_paths(&city, 3, Metric::Distance);
        assert_eq!(reconstruct_path(3, 3, sp.predecessors()), vec![3]);
        assert_eq!(path_metrics(&city, &[3]), PathMetrics { distance: 0.0, time: 0.0 });
        assert_eq!(path_metrics(&city, &[]), PathMetrics::default());
    }

    #[test]
    fn test_unreachable() {
        let mut city = CityGraph::new(3);
        city.add_location(0, "A", 0.0, 0.0).unwrap();
        city.add_location(1, "B", 0.0, 0.0).unwrap();
        city.add_location(2, "Island", 0.0, 0.0).unwrap();
        city.add_road(0, 1, 1.0, 0.0).unwrap();
        let sp = compute_shortest_paths(&city, 0, Metric::Distance);
        assert_eq!(sp.cost(2), None);
        assert!(sp.path_to(2).is_empty());
        assert!(shortest_route(&city, 0, 2, Metric::Time).is_none());
        assert!(fewest_stops(&city, 2, 0).is_none());
    }

    #[test]
    fn test_sample_shortest_distance() {
        let city = sample_city();
        let s = city.location_id("SG Highway").unwrap();
        let t = city.location_id("Chandkheda").unwrap();
        let route = shortest_route(&city, s, t, Metric::Distance).unwrap();
        assert_eq!(route.path, vec![0, 1, 7, 9]);
        assert!(approx(route.metrics.distance, 17.5));
        assert!(approx(route.metrics.time, 41.0));

        let alternatives = simple_paths(&city, s, t);
        assert!(alternatives.len() > 1);
        for p in alternatives {
            assert!(route.metrics.distance <= path_metrics(&city, &p).distance + 1e-9, "{:?}", p);
        }
    }

    #[test]
    fn test_metric_changes_route() {
        let city = sample_city();
        let by_distance = shortest_route(&city, 4, 2, Metric::Distance).unwrap();
        let by_time = shortest_route(&city, 4, 2, Metric::Time).unwrap();
        assert_eq!(by_distance.path, vec![4, 3, 2]);
        assert_eq!(by_time.path, vec![4, 5, 2]);
        assert!(approx(by_distance.metrics.distance, 6.0));
        assert!(approx(by_time.metrics.distance, 6.0));
        assert!(approx(by_distance.metrics.time, 15.0));
        assert!(approx(by_time.metrics.time, 14.0));
    }

    #[test]
    fn test_time_optimal_over_simple_paths() {
        let city = sample_city();
        let route = shortest_route(&city, 0, 8, Metric::Time).unwrap();
        for p in simple_paths(&city, 0, 8) {
            assert!(route.metrics.time <= path_metrics(&city, &p).time + 1e-9);
        }
        assert!(approx(route.metrics.time, 34.0));
    }

    #[test]
    fn test_fewest_stops() {
        let city = sample_city();
        let route = fewest_stops(&city, 0, 9).unwrap();
        assert_eq!(route.path, vec![0, 1, 7, 9]);
        let route = fewest_stops(&city, 3, 9).unwrap();
        assert_eq!(route.path.len(), 4);
        assert_eq!(fewest_stops(&city, 6, 6).unwrap().path, vec![6]);
    }

    #[test]
    #[should_panic]
    fn test_metrics_on_broken_path() {
        let city = sample_city();
        path_metrics(&city, &[0, 9]);
    }
}
