pub mod bfs;
pub mod dijkstra;
pub mod path;

pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use path::reconstruct_path;
