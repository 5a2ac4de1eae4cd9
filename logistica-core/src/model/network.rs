//! City graph with per-condition route weights

use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::components::{ActiveRoute, RouteWeights};
use crate::{Condition, Error, TravelTime};

pub type NetworkGraph = DiGraph<String, RouteWeights>;

/// Directed graph of cities connected by weather-dependent routes.
///
/// At most one route exists per ordered city pair; adding it again
/// overwrites the weights. Cities are never removed, so node indices stay
/// dense (`0..city_count()`) and double as distance-table indices.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    pub(crate) graph: NetworkGraph,
    index: HashMap<String, NodeIndex>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    /// City names sorted lexicographically
    pub fn cities(&self) -> Vec<&str> {
        self.graph.node_weights().map(String::as_str).sorted().collect()
    }

    /// Adds a city if absent. Returns `true` if it was created.
    pub fn add_city(&mut self, city: &str) -> bool {
        if self.index.contains_key(city) {
            return false;
        }
        self.insert_city(city);
        true
    }

    /// Adds a route, creating both cities if needed.
    ///
    /// Returns the weights it replaced when the route already existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if any weight is not a positive
    /// number; the network is left untouched in that case.
    pub fn add_route(
        &mut self,
        origin: &str,
        destination: &str,
        weights: RouteWeights,
    ) -> Result<Option<RouteWeights>, Error> {
        if let Some(weight) = weights.first_invalid() {
            return Err(Error::InvalidWeight {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weight,
            });
        }

        let from = self.insert_city(origin);
        let to = self.insert_city(destination);

        let previous = self
            .graph
            .find_edge(from, to)
            .and_then(|edge| self.graph.edge_weight(edge).copied());
        self.graph.update_edge(from, to, weights);

        Ok(previous)
    }

    /// Removes a route, leaving both cities in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no such route
    pub fn remove_route(&mut self, origin: &str, destination: &str) -> Result<RouteWeights, Error> {
        let edge = self
            .find_route(origin, destination)
            .ok_or_else(|| Error::edge_not_found(origin, destination))?;

        self.graph
            .remove_edge(edge)
            .ok_or_else(|| Error::edge_not_found(origin, destination))
    }

    /// Cities reachable through a single outgoing route, sorted
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `city` is not in the network
    pub fn neighbors(&self, city: &str) -> Result<Vec<&str>, Error> {
        let node = self.node(city)?;
        Ok(self
            .graph
            .neighbors(node)
            .map(|next| self.graph[next].as_str())
            .sorted()
            .collect())
    }

    /// Direct route weight under `condition`
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no direct route
    pub fn weight(
        &self,
        origin: &str,
        destination: &str,
        condition: Condition,
    ) -> Result<TravelTime, Error> {
        self.route_weights(origin, destination)
            .map(|weights| weights.get(condition))
    }

    /// All four weights of a direct route
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no direct route
    pub fn route_weights(&self, origin: &str, destination: &str) -> Result<&RouteWeights, Error> {
        self.find_route(origin, destination)
            .and_then(|edge| self.graph.edge_weight(edge))
            .ok_or_else(|| Error::edge_not_found(origin, destination))
    }

    /// Every route with its four weights, in insertion order
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str, &RouteWeights)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                edge.weight(),
            )
        })
    }

    /// Every route resolved under `condition`, sorted by origin then destination
    pub fn active_routes(&self, condition: Condition) -> Vec<ActiveRoute> {
        self.routes()
            .map(|(origin, destination, weights)| ActiveRoute {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weight: weights.get(condition),
            })
            .sorted_by(|a, b| (&a.origin, &a.destination).cmp(&(&b.origin, &b.destination)))
            .collect()
    }

    pub(crate) fn node(&self, city: &str) -> Result<NodeIndex, Error> {
        self.index
            .get(city)
            .copied()
            .ok_or_else(|| Error::UnknownNode(city.to_string()))
    }

    pub(crate) fn city_name(&self, node: NodeIndex) -> &str {
        self.graph[node].as_str()
    }

    fn find_route(&self, origin: &str, destination: &str) -> Option<EdgeIndex> {
        let from = self.index.get(origin)?;
        let to = self.index.get(destination)?;
        self.graph.find_edge(*from, *to)
    }

    fn insert_city(&mut self, city: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(city) {
            return node;
        }
        let node = self.graph.add_node(city.to_string());
        self.index.insert(city.to_string(), node);
        node
    }
}
