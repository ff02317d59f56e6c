pub mod stops;
pub mod util;

pub use stops::{parse, parse_stop, resolve, StopRef};
