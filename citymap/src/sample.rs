//! The built-in demo city: ten Ahmedabad neighbourhoods and twelve roads.

use once_cell::sync::Lazy;

use crate::city::{CityGraph, Location, LocationId};

const LOCATIONS: [(&str, f64, f64); 10] = [
    ("SG Highway", 0.0, 0.0),
    ("Maninagar", 5.0, 2.0),
    ("Paldi", 2.0, 4.0),
    ("Vastrapur", 1.0, 6.0),
    ("Satellite", 3.0, 8.0),
    ("Navrangpura", 4.0, 5.0),
    ("CG Road", 6.0, 6.0),
    ("Ashram Road", 7.0, 3.0),
    ("Sabarmati", 5.0, 9.0),
    ("Chandkheda", 8.0, 10.0),
];

/// (u, v, km, minutes)
const ROADS: [(LocationId, LocationId, f64, f64); 12] = [
    (0, 1, 5.2, 12.0),
    (0, 2, 4.5, 10.0),
    (1, 7, 3.8, 9.0),
    (2, 3, 3.2, 8.0),
    (2, 5, 2.5, 6.0),
    (3, 4, 2.8, 7.0),
    (4, 5, 3.5, 8.0),
    (4, 8, 4.0, 10.0),
    (5, 6, 2.2, 5.0),
    (6, 7, 4.1, 10.0),
    (7, 9, 8.5, 20.0),
    (8, 9, 3.5, 8.0),
];

pub static SAMPLE_CITY: Lazy<CityGraph> = Lazy::new(|| {
    let locations: Vec<_> = LOCATIONS.iter().map(|&(name, x, y)| Location::new(name, x, y)).collect();
    CityGraph::from_parts(&locations, &ROADS).expect("sample city data is well-formed")
});

pub fn sample_city() -> CityGraph {
    SAMPLE_CITY.clone()
}
