//! All-pairs distance and predecessor tables

use hashbrown::HashMap;

use crate::{Condition, Error, TravelTime};

/// Shortest distances between every ordered pair of cities under one
/// condition, with the predecessor table used to rebuild paths.
///
/// Rows and columns follow the network's node order. A table is built in one
/// piece and never patched; any network or condition change discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    condition: Condition,
    cities: Vec<String>,
    index: HashMap<String, usize>,
    distances: Vec<TravelTime>,
    /// `predecessors[i * n + j]` is the city before `j` on the best `i -> j` path
    predecessors: Vec<Option<usize>>,
}

impl DistanceTable {
    pub(crate) fn new(
        condition: Condition,
        cities: Vec<String>,
        distances: Vec<TravelTime>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        let index = cities
            .iter()
            .enumerate()
            .map(|(position, city)| (city.clone(), position))
            .collect();

        Self {
            condition,
            cities,
            index,
            distances,
            predecessors,
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Condition the table was computed under
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// City names in row order
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `city` is not part of the table
    pub fn index_of(&self, city: &str) -> Result<usize, Error> {
        self.index
            .get(city)
            .copied()
            .ok_or_else(|| Error::UnknownNode(city.to_string()))
    }

    /// Distances from the city at row `from` to every city
    pub fn row(&self, from: usize) -> &[TravelTime] {
        let n = self.len();
        &self.distances[from * n..(from + 1) * n]
    }

    #[inline]
    pub(crate) fn distance_at(&self, from: usize, to: usize) -> TravelTime {
        self.distances[from * self.len() + to]
    }

    /// Shortest distance, `f64::INFINITY` when `destination` is unreachable
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either city is not part of the table
    pub fn distance(&self, origin: &str, destination: &str) -> Result<TravelTime, Error> {
        let from = self.index_of(origin)?;
        let to = self.index_of(destination)?;
        Ok(self.distance_at(from, to))
    }

    /// Cities on the shortest path, both endpoints included
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either city is not part of the
    /// table and [`Error::NoPath`] if `destination` is unreachable.
    pub fn path(&self, origin: &str, destination: &str) -> Result<Vec<String>, Error> {
        let from = self.index_of(origin)?;
        let to = self.index_of(destination)?;

        if self.distance_at(from, to).is_infinite() {
            return Err(Error::no_path(origin, destination));
        }

        let n = self.len();
        let mut node_path = Vec::new();

        // Follow predecessors backward from target to start
        let mut current = to;
        node_path.push(current);
        while current != from {
            // A simple path never holds more than n cities
            if node_path.len() > n {
                return Err(Error::no_path(origin, destination));
            }
            current = self.predecessors[from * n + current]
                .ok_or_else(|| Error::no_path(origin, destination))?;
            node_path.push(current);
        }
        node_path.reverse();

        Ok(node_path
            .into_iter()
            .map(|position| self.cities[position].clone())
            .collect())
    }
}
