//! Data model for the logistics network
//!
//! Contains the city graph, per-condition route weights and the weather
//! condition selector.

pub mod components;
pub mod condition;
pub mod network;

pub use components::{ActiveRoute, RouteWeights};
pub use condition::{Condition, ConditionContext};
pub use network::{NetworkGraph, RouteNetwork};
