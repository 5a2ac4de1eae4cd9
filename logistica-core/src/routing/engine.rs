use std::cell::OnceCell;

use itertools::Itertools;
use log::{debug, warn};
use petgraph::algo::kosaraju_scc;

use super::floyd_warshall::all_pairs_shortest_paths;
use super::table::DistanceTable;
use crate::{
    AdjacencyMatrix, CenterLocator, Condition, ConditionContext, Error, GraphEditor,
    RouteNetwork, TravelTime,
};

/// Owns the network and the active condition, and answers shortest-path and
/// centre queries from a lazily rebuilt [`DistanceTable`].
///
/// The cached table is empty whenever the network or the condition changed
/// since it was computed; every query checks this and recomputes first.
/// Mutations go through [`GraphEditor`], which clears the cache.
#[derive(Debug, Default)]
pub struct ShortestPathEngine {
    network: RouteNetwork,
    context: ConditionContext,
    table: OnceCell<DistanceTable>,
}

impl ShortestPathEngine {
    pub fn new(network: RouteNetwork) -> Self {
        Self::with_condition(network, Condition::default())
    }

    pub fn with_condition(network: RouteNetwork, condition: Condition) -> Self {
        Self {
            network,
            context: ConditionContext::new(condition),
            table: OnceCell::new(),
        }
    }

    pub fn network(&self) -> &RouteNetwork {
        &self.network
    }

    pub fn into_network(self) -> RouteNetwork {
        self.network
    }

    pub fn condition(&self) -> Condition {
        self.context.active()
    }

    /// Switches the active condition; a change discards the cached table
    pub fn set_condition(&mut self, condition: Condition) {
        if self.context.set(condition) {
            self.invalidate();
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidCondition`] if `name` is not a known condition
    pub fn set_condition_by_name(&mut self, name: &str) -> Result<(), Error> {
        if self.context.set_from_str(name)? {
            self.invalidate();
        }
        Ok(())
    }

    /// Mutation façade; every successful edit marks the table stale
    pub fn editor(&mut self) -> GraphEditor<'_> {
        GraphEditor::new(&mut self.network, &mut self.table)
    }

    /// `true` if the next query will have to recompute
    pub fn is_stale(&self) -> bool {
        self.table.get().is_none()
    }

    /// Rebuilds the distance table unconditionally
    pub fn recompute(&mut self) -> &DistanceTable {
        self.table.take();
        self.table()
    }

    /// Current distance table, computed first if stale
    pub fn table(&self) -> &DistanceTable {
        self.table
            .get_or_init(|| all_pairs_shortest_paths(&self.network, self.context.active()))
    }

    /// Shortest travel time, `f64::INFINITY` when unreachable
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either city is absent
    pub fn shortest_distance(&self, origin: &str, destination: &str) -> Result<TravelTime, Error> {
        self.table().distance(origin, destination)
    }

    /// Ordered cities of the shortest route, endpoints included
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either city is absent and
    /// [`Error::NoPath`] if `destination` is unreachable
    pub fn shortest_path(&self, origin: &str, destination: &str) -> Result<Vec<String>, Error> {
        self.table().path(origin, destination)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `city` is absent
    pub fn eccentricity(&self, city: &str) -> Result<TravelTime, Error> {
        CenterLocator::new(self.table()).eccentricity(city)
    }

    /// Cities of minimum finite eccentricity, sorted; empty when none exists
    pub fn center(&self) -> Vec<String> {
        CenterLocator::new(self.table()).center()
    }

    /// Centre of the largest strongly connected component.
    ///
    /// Ties between equally large components go to the one holding the
    /// lexicographically smallest city.
    pub fn component_center(&self) -> Vec<String> {
        let components = kosaraju_scc(&self.network.graph);
        if components.len() > 1 {
            warn!(
                "Network is not strongly connected ({} components); using the largest one",
                components.len()
            );
        }

        let largest = components
            .into_iter()
            .map(|component| {
                let smallest_city = component
                    .iter()
                    .map(|&node| self.network.city_name(node))
                    .min()
                    .unwrap_or_default()
                    .to_string();
                (component, smallest_city)
            })
            .sorted_by(|(a, a_city), (b, b_city)| {
                b.len().cmp(&a.len()).then_with(|| a_city.cmp(b_city))
            })
            .next();

        match largest {
            Some((component, _)) => {
                let members: Vec<usize> = component.iter().map(|node| node.index()).collect();
                CenterLocator::new(self.table()).center_within(&members)
            }
            None => Vec::new(),
        }
    }

    /// Direct-route weights under the active condition
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_network(&self.network, self.context.active())
    }

    pub(crate) fn invalidate(&mut self) {
        if self.table.take().is_some() {
            debug!("Distance table invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteWeights;

    fn engine() -> ShortestPathEngine {
        let mut network = RouteNetwork::new();
        network
            .add_route("A", "B", RouteWeights::new(10.0, 15.0, 20.0, 50.0))
            .unwrap();
        network
            .add_route("B", "C", RouteWeights::new(10.0, 12.0, 15.0, 20.0))
            .unwrap();
        ShortestPathEngine::new(network)
    }

    #[test]
    fn starts_stale_and_caches_after_query() {
        let engine = engine();
        assert!(engine.is_stale());
        assert_eq!(engine.shortest_distance("A", "C").unwrap(), 20.0);
        assert!(!engine.is_stale());
    }

    #[test]
    fn condition_change_invalidates_only_on_change() {
        let mut engine = engine();
        engine.table();

        engine.set_condition(Condition::Normal);
        assert!(!engine.is_stale());

        engine.set_condition(Condition::Storm);
        assert!(engine.is_stale());
        assert_eq!(engine.shortest_distance("A", "C").unwrap(), 70.0);
        assert_eq!(engine.table().condition(), Condition::Storm);
    }

    #[test]
    fn invalid_condition_name_keeps_state() {
        let mut engine = engine();
        engine.table();

        assert!(matches!(
            engine.set_condition_by_name("hurricane"),
            Err(Error::InvalidCondition(_))
        ));
        assert!(!engine.is_stale());
        assert_eq!(engine.condition(), Condition::Normal);

        engine.set_condition_by_name("SNOW").unwrap();
        assert_eq!(engine.shortest_distance("A", "C").unwrap(), 35.0);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut engine = engine();
        let first = engine.recompute().clone();
        let second = engine.recompute().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_city_is_an_error() {
        let engine = engine();
        assert!(matches!(
            engine.shortest_distance("A", "Z"),
            Err(Error::UnknownNode(city)) if city == "Z"
        ));
        assert!(matches!(
            engine.shortest_path("Z", "A"),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn component_center_uses_largest_component() {
        let mut engine = engine();
        {
            let mut editor = engine.editor();
            editor
                .add_two_way_route("A", "B", RouteWeights::new(1.0, 1.0, 1.0, 1.0))
                .unwrap();
            editor
                .add_two_way_route("B", "C", RouteWeights::new(2.0, 2.0, 2.0, 2.0))
                .unwrap();
            editor.add_city("D");
        }

        assert!(engine.center().is_empty());
        assert_eq!(engine.component_center(), vec!["B"]);
    }
}
