use crate::city::LocationId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("location id {0} is out of range")]
    InvalidLocation(LocationId),
    #[error("unknown location `{0}`")]
    UnknownLocation(String),
    #[error("invalid weight {weight} on road {from} -- {to}")]
    InvalidWeight {
        from: LocationId,
        to: LocationId,
        weight: f64,
    },
    #[error("no route from {from} to {to}")]
    NoRoute {
        from: String,
        to: String,
    },
    #[error("cannot reach {to} from {from}")]
    UnreachableLeg {
        from: String,
        to: String,
    },
    #[error("a route needs at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("source and destination are both {0}")]
    SameEndpoints(String),
}
