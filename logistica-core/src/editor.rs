//! Graph mutations that keep the cached distance table honest

use std::cell::OnceCell;

use log::{debug, info};

use crate::{DistanceTable, Error, RouteNetwork, RouteWeights};

/// Borrowed from [`ShortestPathEngine::editor`](crate::ShortestPathEngine::editor).
///
/// Forwards to [`RouteNetwork`] and drops the engine's cached table after
/// every successful mutation. Failed mutations leave both untouched.
pub struct GraphEditor<'a> {
    network: &'a mut RouteNetwork,
    table: &'a mut OnceCell<DistanceTable>,
}

impl<'a> GraphEditor<'a> {
    pub(crate) fn new(network: &'a mut RouteNetwork, table: &'a mut OnceCell<DistanceTable>) -> Self {
        Self { network, table }
    }

    /// Adds or overwrites the route `origin -> destination`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if any weight is not positive
    pub fn add_route(
        &mut self,
        origin: &str,
        destination: &str,
        weights: RouteWeights,
    ) -> Result<Option<RouteWeights>, Error> {
        let previous = self.network.add_route(origin, destination, weights)?;
        self.mark_stale();

        match previous {
            Some(old) => info!("Route {origin} -> {destination} updated from {old} to {weights}"),
            None => info!("Route {origin} -> {destination} added ({weights})"),
        }
        Ok(previous)
    }

    /// Adds the route in both directions with the same weights
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if any weight is not positive
    pub fn add_two_way_route(
        &mut self,
        first: &str,
        second: &str,
        weights: RouteWeights,
    ) -> Result<(), Error> {
        self.add_route(first, second, weights)?;
        self.add_route(second, first, weights)?;
        Ok(())
    }

    /// Interrupts traffic on `origin -> destination`
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no such route
    pub fn remove_route(&mut self, origin: &str, destination: &str) -> Result<RouteWeights, Error> {
        let removed = self.network.remove_route(origin, destination)?;
        self.mark_stale();
        info!("Route {origin} -> {destination} removed");
        Ok(removed)
    }

    /// Adds an isolated city. Returns `true` if it was new.
    pub fn add_city(&mut self, city: &str) -> bool {
        let created = self.network.add_city(city);
        if created {
            self.mark_stale();
            info!("City {city} added");
        } else {
            debug!("City {city} already present");
        }
        created
    }

    pub fn network(&self) -> &RouteNetwork {
        self.network
    }

    fn mark_stale(&mut self) {
        if self.table.take().is_some() {
            debug!("Distance table invalidated");
        }
    }
}
