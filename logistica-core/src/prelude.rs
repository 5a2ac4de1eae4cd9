pub use crate::PARALLEL_RELAXATION_THRESHOLD;

// Re-export key components
pub use crate::algo::adjacency::AdjacencyMatrix;
pub use crate::algo::center::CenterLocator;
pub use crate::editor::GraphEditor;
pub use crate::export::{to_dot, to_json};
pub use crate::loading::{NetworkConfig, create_route_engine, save_route_network};
pub use crate::model::{ActiveRoute, RouteNetwork, RouteWeights};
pub use crate::routing::{DistanceTable, ShortestPathEngine};

// Weather handling
pub use crate::model::{Condition, ConditionContext};

// Core types
pub use crate::Error;
pub use crate::TravelTime; // hours
