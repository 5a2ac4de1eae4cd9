use crate::{Condition, RouteNetwork, TravelTime};

/// Direct-route weights between cities sorted by name.
///
/// The diagonal is zero and missing routes are `f64::INFINITY`; no paths
/// are composed here.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    pub condition: Condition,
    pub cities: Vec<String>,
    weights: Vec<TravelTime>,
}

impl AdjacencyMatrix {
    pub fn from_network(network: &RouteNetwork, condition: Condition) -> Self {
        let cities: Vec<String> = network.cities().into_iter().map(str::to_string).collect();
        let n = cities.len();

        let mut weights = vec![TravelTime::INFINITY; n * n];
        for (i, origin) in cities.iter().enumerate() {
            weights[i * n + i] = 0.0;
            for (j, destination) in cities.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Ok(weight) = network.weight(origin, destination, condition) {
                    weights[i * n + j] = weight;
                }
            }
        }

        Self {
            condition,
            cities,
            weights,
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> TravelTime {
        self.weights[row * self.len() + column]
    }

    /// Rows paired with the city they start from
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[TravelTime])> {
        let n = self.len().max(1);
        self.cities
            .iter()
            .map(String::as_str)
            .zip(self.weights.chunks(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteWeights;

    #[test]
    fn matrix_is_sorted_with_zero_diagonal() {
        let mut network = RouteNetwork::new();
        network
            .add_route("C", "A", RouteWeights::new(4.0, 5.0, 6.0, 7.0))
            .unwrap();
        network
            .add_route("A", "B", RouteWeights::new(1.0, 2.0, 3.0, 4.0))
            .unwrap();

        let matrix = AdjacencyMatrix::from_network(&network, Condition::Rain);

        assert_eq!(matrix.cities, vec!["A", "B", "C"]);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(0, 1), 2.0);
        assert_eq!(matrix.get(2, 0), 5.0);
        assert_eq!(matrix.get(0, 2), f64::INFINITY);

        let rows: Vec<_> = matrix.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].0, "B");
        assert_eq!(rows[1].1, &[f64::INFINITY, 0.0, f64::INFINITY]);
    }

    #[test]
    fn empty_network_has_no_rows() {
        let matrix = AdjacencyMatrix::from_network(&RouteNetwork::new(), Condition::Normal);
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 0);
    }
}
