//! Weather-aware logistics network: all-pairs shortest routes between cities
//! and selection of the graph centre as a distribution hub.

pub mod algo;
pub mod editor;
pub mod error;
pub mod export;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use algo::adjacency::AdjacencyMatrix;
pub use algo::center::CenterLocator;
pub use editor::GraphEditor;
pub use error::Error;
pub use export::{to_dot, to_json};
pub use loading::{
    NetworkConfig, create_route_engine, read_route_network, save_route_network,
};
pub use model::{ActiveRoute, Condition, ConditionContext, RouteNetwork, RouteWeights};
pub use routing::{DistanceTable, ShortestPathEngine, all_pairs_shortest_paths};

/// Travel time along a route, in hours
pub type TravelTime = f64;

/// Number of cities from which Floyd-Warshall relaxes rows in parallel
pub const PARALLEL_RELAXATION_THRESHOLD: usize = 128;
