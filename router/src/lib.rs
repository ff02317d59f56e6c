pub mod cli;
pub mod config;
pub mod logging;
pub mod parser;
pub mod planner;
pub mod report;
