// All-pairs shortest paths: computation, result table and the caching engine

mod engine;
mod floyd_warshall;
mod table;

pub use engine::ShortestPathEngine;
pub use floyd_warshall::all_pairs_shortest_paths;
pub use table::DistanceTable;
