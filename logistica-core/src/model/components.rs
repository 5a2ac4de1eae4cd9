//! Network components - route weights and condition-resolved routes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Condition, TravelTime};

/// Travel times of a route, one per weather condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteWeights([TravelTime; 4]);

impl RouteWeights {
    pub const fn new(
        normal: TravelTime,
        rain: TravelTime,
        snow: TravelTime,
        storm: TravelTime,
    ) -> Self {
        Self([normal, rain, snow, storm])
    }

    /// Travel time under the given condition
    #[inline]
    pub fn get(&self, condition: Condition) -> TravelTime {
        self.0[condition.index()]
    }

    pub fn as_array(&self) -> &[TravelTime; 4] {
        &self.0
    }

    /// First weight that is not a positive finite number, if any
    pub(crate) fn first_invalid(&self) -> Option<TravelTime> {
        self.0
            .iter()
            .copied()
            .find(|weight| !(weight.is_finite() && *weight > 0.0))
    }
}

impl From<[TravelTime; 4]> for RouteWeights {
    fn from(weights: [TravelTime; 4]) -> Self {
        Self(weights)
    }
}

impl fmt::Display for RouteWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [normal, rain, snow, storm] = self.0;
        write!(f, "{normal}/{rain}/{snow}/{storm}")
    }
}

/// Route resolved under a single condition, as handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveRoute {
    pub origin: String,
    pub destination: String,
    pub weight: TravelTime,
}
