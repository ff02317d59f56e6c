pub mod graph;
pub mod algo;

pub use crate::graph::{DiGraph, Edge, EdgeIndex, Graph, Node, NodeIndex};
