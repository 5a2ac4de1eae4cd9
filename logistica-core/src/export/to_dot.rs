use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;

use super::Highlight;
use crate::{Condition, RouteNetwork};

const HIGHLIGHT_COLOR: &str = "red";
const NODE_COLOR: &str = "skyblue";

/// Renders the network as a Graphviz DOT digraph.
///
/// Edge labels carry the `condition` weight; cities and legs of `path` are
/// drawn in red.
pub fn to_dot(network: &RouteNetwork, condition: Condition, path: &[String]) -> String {
    let highlight = Highlight::new(path);
    let graph = &network.graph;

    Dot::with_attr_getters(
        graph,
        &[Config::EdgeNoLabel, Config::NodeNoLabel],
        &|_, edge| {
            let origin = graph[edge.source()].as_str();
            let destination = graph[edge.target()].as_str();
            let label = format!("label = \"{:.1}\"", edge.weight().get(condition));
            if highlight.contains_leg(origin, destination) {
                format!("{label} color = {HIGHLIGHT_COLOR} penwidth = 3 ")
            } else {
                format!("{label} color = gray ")
            }
        },
        &|_, (_, city)| {
            let color = if highlight.contains_city(city) {
                "lightcoral"
            } else {
                NODE_COLOR
            };
            format!("label = {city:?} style = filled fillcolor = {color} ")
        },
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteWeights;

    fn network() -> RouteNetwork {
        let mut network = RouteNetwork::new();
        network
            .add_route("A", "B", RouteWeights::new(10.0, 15.0, 20.0, 50.0))
            .unwrap();
        network
            .add_route("B", "C", RouteWeights::new(10.0, 12.0, 15.0, 20.0))
            .unwrap();
        network
    }

    #[test]
    fn labels_use_active_condition() {
        let dot = to_dot(&network(), Condition::Storm, &[]);
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("label = \"50.0\""));
        assert!(dot.contains("label = \"20.0\""));
        assert!(!dot.contains(HIGHLIGHT_COLOR));
    }

    #[test]
    fn path_is_highlighted() {
        let path = vec!["A".to_string(), "B".to_string()];
        let dot = to_dot(&network(), Condition::Normal, &path);
        assert_eq!(dot.matches("penwidth = 3").count(), 1);
        assert_eq!(dot.matches("lightcoral").count(), 2);
    }

    #[test]
    fn every_city_is_declared() {
        let dot = to_dot(&network(), Condition::Rain, &[]);
        for city in ["A", "B", "C"] {
            assert!(dot.contains(&format!("label = \"{city}\"")));
        }
        assert_eq!(dot.matches("->").count(), 2);
        assert!(dot.trim_end().ends_with('}'));
    }
}
