pub mod adjacency;
pub mod center;
