pub mod city;
pub mod engine;
pub mod error;
pub mod sample;

pub use city::{
    CityGraph,
    Location,
    LocationId,
    Road,
};
pub use engine::{
    Metric,
    PathMetrics,
    Route,
    ShortestPaths,
    compute_shortest_paths,
    reconstruct_path,
    path_metrics,
    shortest_route,
    fewest_stops,
};
pub use error::{Error, Result};
pub use sample::sample_city;
