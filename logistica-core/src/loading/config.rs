use std::path::PathBuf;

use serde::Deserialize;

use crate::Condition;

pub const DEFAULT_DATASET_PATH: &str = "data/logistica.txt";

/// Where to load the network from and which weather to start under
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub dataset_path: PathBuf,
    pub condition: Condition,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            condition: Condition::Normal,
        }
    }
}

impl NetworkConfig {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }
}
