use thiserror::Error;

use crate::TravelTime;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid weight {weight} on route {origin} -> {destination}: weights must be positive")]
    InvalidWeight {
        origin: String,
        destination: String,
        weight: TravelTime,
    },
    #[error("No route from {origin} to {destination}")]
    EdgeNotFound { origin: String, destination: String },
    #[error("Unknown city: {0}")]
    UnknownNode(String),
    #[error("Invalid weather condition: {0}")]
    InvalidCondition(String),
    #[error("No path from {origin} to {destination}")]
    NoPath { origin: String, destination: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl Error {
    pub(crate) fn edge_not_found(origin: &str, destination: &str) -> Self {
        Self::EdgeNotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    pub(crate) fn no_path(origin: &str, destination: &str) -> Self {
        Self::NoPath {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }
}
