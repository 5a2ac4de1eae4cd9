//! Weather conditions and the active-condition selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Weather condition selecting which of a route's four weights applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    Normal,
    Rain,
    Snow,
    Storm,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Normal,
        Condition::Rain,
        Condition::Snow,
        Condition::Storm,
    ];

    /// Position of this condition's weight inside [`RouteWeights`](crate::RouteWeights)
    pub const fn index(self) -> usize {
        match self {
            Condition::Normal => 0,
            Condition::Rain => 1,
            Condition::Snow => 2,
            Condition::Storm => 3,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidCondition`] if `index` is not in `0..4`
    pub fn from_index(index: usize) -> Result<Self, Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::InvalidCondition(index.to_string()))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Condition::Normal => "normal",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
            Condition::Storm => "storm",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|condition| condition.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidCondition(trimmed.to_string()))
    }
}

/// Holds the single active weather condition.
///
/// Owned by [`ShortestPathEngine`](crate::ShortestPathEngine); changing the
/// condition there invalidates the cached distance table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionContext {
    active: Condition,
}

impl ConditionContext {
    pub fn new(active: Condition) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Condition {
        self.active
    }

    /// Switches the active condition, returning `true` if it changed
    pub fn set(&mut self, condition: Condition) -> bool {
        let changed = self.active != condition;
        self.active = condition;
        changed
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidCondition`] if `name` is not one of the four conditions
    pub fn set_from_str(&mut self, name: &str) -> Result<bool, Error> {
        let condition = name.parse()?;
        Ok(self.set(condition))
    }
}
