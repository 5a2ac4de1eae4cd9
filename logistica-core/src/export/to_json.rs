use serde_json::{Value as JsonValue, json};

use super::Highlight;
use crate::{Condition, RouteNetwork};

/// Active-condition edge list and highlighted path as JSON, for external plotters
pub fn to_json(network: &RouteNetwork, condition: Condition, path: &[String]) -> JsonValue {
    let highlight = Highlight::new(path);

    let routes: Vec<JsonValue> = network
        .active_routes(condition)
        .into_iter()
        .map(|route| {
            let highlighted = highlight.contains_leg(&route.origin, &route.destination);
            json!({
                "origin": route.origin,
                "destination": route.destination,
                "weight": route.weight,
                "highlighted": highlighted,
            })
        })
        .collect();

    json!({
        "condition": condition,
        "cities": network.cities(),
        "routes": routes,
        "path": path,
    })
}
