//! Graph centre: the city whose worst-case travel time to every other city
//! is smallest, used to place a distribution hub.

use crate::{DistanceTable, Error, TravelTime};

/// Eccentricity and centre queries over a fresh [`DistanceTable`]
#[derive(Debug, Clone, Copy)]
pub struct CenterLocator<'a> {
    table: &'a DistanceTable,
}

impl<'a> CenterLocator<'a> {
    pub fn new(table: &'a DistanceTable) -> Self {
        Self { table }
    }

    /// Largest shortest distance from `city` to any other city,
    /// `f64::INFINITY` if some city is unreachable from it
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `city` is absent
    pub fn eccentricity(&self, city: &str) -> Result<TravelTime, Error> {
        let from = self.table.index_of(city)?;
        Ok(self.eccentricity_among(from, 0..self.table.len()))
    }

    /// Eccentricity of every city, in table order
    pub fn eccentricities(&self) -> Vec<(&'a str, TravelTime)> {
        let table = self.table;
        table
            .cities()
            .iter()
            .enumerate()
            .map(|(from, city)| (city.as_str(), self.eccentricity_among(from, 0..table.len())))
            .collect()
    }

    /// Cities tied for the minimum finite eccentricity, sorted by name.
    ///
    /// Empty when no city reaches every other city.
    pub fn center(&self) -> Vec<String> {
        let all: Vec<usize> = (0..self.table.len()).collect();
        self.center_within(&all)
    }

    /// Centre of the sub-network formed by `members` (table indices),
    /// measuring eccentricity only towards other members
    pub fn center_within(&self, members: &[usize]) -> Vec<String> {
        let eccentricities: Vec<(usize, TravelTime)> = members
            .iter()
            .map(|&from| (from, self.eccentricity_among(from, members.iter().copied())))
            .filter(|(_, eccentricity)| eccentricity.is_finite())
            .collect();

        let Some(minimum) = eccentricities
            .iter()
            .map(|&(_, eccentricity)| eccentricity)
            .reduce(TravelTime::min)
        else {
            return Vec::new();
        };

        let mut center: Vec<String> = eccentricities
            .into_iter()
            .filter(|&(_, eccentricity)| eccentricity == minimum)
            .map(|(from, _)| self.table.cities()[from].clone())
            .collect();
        center.sort();
        center
    }

    fn eccentricity_among(&self, from: usize, targets: impl Iterator<Item = usize>) -> TravelTime {
        targets
            .filter(|&to| to != from)
            .map(|to| self.table.distance_at(from, to))
            .fold(0.0, TravelTime::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Condition, RouteNetwork, RouteWeights, all_pairs_shortest_paths};

    fn uniform(weight: f64) -> RouteWeights {
        RouteWeights::new(weight, weight, weight, weight)
    }

    fn table_for(routes: &[(&str, &str, f64)]) -> DistanceTable {
        let mut network = RouteNetwork::new();
        for &(origin, destination, weight) in routes {
            network.add_route(origin, destination, uniform(weight)).unwrap();
        }
        all_pairs_shortest_paths(&network, Condition::Normal)
    }

    #[test]
    fn center_of_a_path_is_its_middle() {
        let table = table_for(&[
            ("A", "B", 1.0),
            ("B", "A", 1.0),
            ("B", "C", 1.0),
            ("C", "B", 1.0),
        ]);
        let locator = CenterLocator::new(&table);

        assert_eq!(locator.eccentricity("A").unwrap(), 2.0);
        assert_eq!(locator.eccentricity("B").unwrap(), 1.0);
        assert_eq!(locator.center(), vec!["B"]);
    }

    #[test]
    fn ties_are_all_returned_sorted() {
        let table = table_for(&[("B", "A", 3.0), ("A", "B", 3.0)]);
        assert_eq!(CenterLocator::new(&table).center(), vec!["A", "B"]);
    }

    #[test]
    fn unreachable_city_gives_infinite_eccentricity() {
        let table = table_for(&[("A", "B", 2.0)]);
        let locator = CenterLocator::new(&table);

        assert_eq!(locator.eccentricity("B").unwrap(), f64::INFINITY);
        // A still reaches everyone
        assert_eq!(locator.center(), vec!["A"]);
        assert!(matches!(locator.eccentricity("X"), Err(Error::UnknownNode(_))));
    }

    #[test]
    fn eccentricities_follow_table_order() {
        let table = table_for(&[("A", "B", 2.0), ("B", "A", 5.0)]);
        let eccentricities = CenterLocator::new(&table).eccentricities();
        assert_eq!(eccentricities, vec![("A", 2.0), ("B", 5.0)]);
    }

    #[test]
    fn center_within_ignores_outside_members() {
        let table = table_for(&[("A", "B", 1.0), ("B", "A", 1.0), ("B", "C", 10.0)]);
        let locator = CenterLocator::new(&table);

        assert_eq!(locator.center(), vec!["B"]);
        let members = vec![
            table.index_of("A").unwrap(),
            table.index_of("B").unwrap(),
        ];
        assert_eq!(locator.center_within(&members), vec!["A", "B"]);
    }
}
