use std::path::PathBuf;
use anyhow::Result;
use citymap::{sample_city, CityGraph, LocationId, Metric};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::config::CityConfig;
use crate::parser;
use crate::planner;
use crate::report::{locations_table, ComparisonReport, RouteReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ArgEnum)]
pub enum MetricArg {
    Distance,
    Time,
}

impl From<MetricArg> for Metric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Distance => Metric::Distance,
            MetricArg::Time => Metric::Time,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Find routes through a city road map", long_about = None)]
pub struct Args {
    /// JSON city map (defaults to the built-in sample city)
    #[clap(long, global = true)]
    pub city: Option<PathBuf>,

    /// Print reports as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// More logging (-v, -vv, -vvv)
    #[clap(short, long, global = true, parse(from_occurrences))]
    pub verbose: u64,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all locations
    Locations,
    /// Shortest (distance) or fastest (time) route
    Route {
        /// Location id or name
        from: String,
        /// Location id or name
        to: String,
        #[clap(arg_enum, short, long, default_value = "distance")]
        metric: MetricArg,
    },
    /// Compare Dijkstra with a fewest-stops search
    Compare {
        from: String,
        to: String,
    },
    /// Route through several stops in order, e.g. "0 -> Satellite -> 9"
    Stops {
        stops: String,
        #[clap(arg_enum, short, long, default_value = "distance")]
        metric: MetricArg,
    },
}

pub fn load_city(path: Option<&PathBuf>) -> Result<CityGraph> {
    match path {
        Some(path) => {
            let city = CityConfig::from_json(path)?.into_city()?;
            debug!(path = %path.display(), locations = city.node_count(), "loaded city");
            Ok(city)
        },
        None => Ok(sample_city()),
    }
}

/// An exact location name wins; otherwise `input` is read as one stop.
fn location(city: &CityGraph, input: &str) -> Result<LocationId> {
    if let Some(id) = city.location_id(input.trim()) {
        return Ok(id);
    }
    let stop = parser::parse_stop(input)?;
    let ids = parser::resolve(city, &[stop])?;
    Ok(ids[0])
}

fn render<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}

fn label(metric: Metric) -> &'static str {
    match metric {
        Metric::Distance => "Dijkstra (distance)",
        Metric::Time => "Dijkstra (time)",
    }
}

/// Runs one command and returns what should be printed.
pub fn run(args: &Args) -> Result<String> {
    let city = load_city(args.city.as_ref())?;
    match &args.command {
        Command::Locations => {
            if args.json {
                let locations: Vec<_> = city.locations().map(|(_, l)| l).collect();
                Ok(serde_json::to_string_pretty(&locations)?)
            } else {
                Ok(locations_table(&city))
            }
        },
        Command::Route { from, to, metric } => {
            let metric = Metric::from(*metric);
            let route = planner::find_route(&city, location(&city, from)?, location(&city, to)?, metric)?;
            render(&RouteReport::new(&city, label(metric), &route), args.json)
        },
        Command::Compare { from, to } => {
            let cmp = planner::compare(&city, location(&city, from)?, location(&city, to)?)?;
            render(&ComparisonReport::new(&city, &cmp), args.json)
        },
        Command::Stops { stops, metric } => {
            let metric = Metric::from(*metric);
            let waypoints = parser::resolve(&city, &parser::parse(stops)?)?;
            let route = planner::plan_stops(&city, &waypoints, metric)?;
            render(&RouteReport::new(&city, "Multi-stop Dijkstra", &route), args.json)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        run(&args)
    }

    #[test]
    fn parse_args_test() {
        let args = Args::try_parse_from(["cityroute", "route", "0", "9", "-m", "time", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(!args.json);
        match args.command {
            Command::Route { from, to, metric } => {
                assert_eq!(from, "0");
                assert_eq!(to, "9");
                assert_eq!(metric, MetricArg::Time);
            },
            _ => panic!("expected route"),
        }
        assert!(Args::try_parse_from(["cityroute", "route", "0"]).is_err());
        assert!(Args::try_parse_from(["cityroute", "route", "0", "1", "-m", "speed"]).is_err());
    }

    #[test]
    fn locations_test() {
        let out = run_args(&["cityroute", "locations"]).unwrap();
        assert_eq!(out.lines().count(), 10);
        let out = run_args(&["cityroute", "locations", "--json"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[2]["name"], "Paldi");
    }

    #[test]
    fn route_by_name_test() {
        let out = run_args(&["cityroute", "route", "SG Highway", "Chandkheda"]).unwrap();
        assert!(out.contains("Total Distance: 17.50 km"));
    }

    #[test]
    fn route_json_test() {
        let out = run_args(&["cityroute", "--json", "route", "4", "2", "--metric", "time"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["algorithm"], "Dijkstra (time)");
        assert_eq!(v["stops"][1], "Navrangpura");
    }

    #[test]
    fn rejects_bad_locations_test() {
        assert!(run_args(&["cityroute", "route", "0", "10"]).is_err());
        assert!(run_args(&["cityroute", "route", "Nowhere", "1"]).is_err());
        assert!(run_args(&["cityroute", "route", "3", "3"]).is_err());
    }

    #[test]
    fn compare_and_stops_test() {
        let out = run_args(&["cityroute", "compare", "2", "7"]).unwrap();
        assert!(out.contains("ALGORITHM COMPARISON"));
        let out = run_args(&["cityroute", "stops", "0 -> Satellite -> 9"]).unwrap();
        assert!(out.contains("Multi-stop Dijkstra"));
        assert!(out.contains("Satellite"));
        assert!(run_args(&["cityroute", "stops", "0"]).is_err());
    }

    #[test]
    fn route_with_unusual_names_test() {
        let path = std::env::temp_dir().join(format!("cityroute-names-{}.json", std::process::id()));
        std::fs::write(&path, r#"{
            "locations": [
                {"name": "Law Garden-East"},
                {"name": "12 Main Road"},
                {"name": "Ring Road, West"}
            ],
            "roads": [[0, 1, 2.0, 5.0], [1, 2, 1.5]]
        }"#).unwrap();
        let city = path.to_str().unwrap();

        let out = run_args(&["cityroute", "--city", city, "route", "Law Garden-East", "12 Main Road"]).unwrap();
        assert!(out.contains("Total Distance: 2.00 km"));
        let out = run_args(&["cityroute", "--city", city, "--json", "route", "Ring Road, West", "0"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["stops"][1], "12 Main Road");
        let out = run_args(&["cityroute", "--city", city, "stops", "12 Main Road -> Law Garden-East"]).unwrap();
        assert!(out.contains("Law Garden-East"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_city_file_test() {
        assert!(run_args(&["cityroute", "--city", "/nonexistent.json", "locations"]).is_err());
    }
}
