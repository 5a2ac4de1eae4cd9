//! This module is responsible for loading route datasets from disk,
//! building the routing engine from them and writing them back.

mod builder;
mod config;
mod parser;
mod writer;

pub use builder::{create_route_engine, read_route_network};
pub use config::NetworkConfig;
pub use parser::{RawRoute, parse_routes};
pub use writer::{save_route_network, write_route_network};
