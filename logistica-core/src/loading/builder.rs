use std::fs::File;
use std::io::{BufRead, BufReader};

use log::info;

use super::config::NetworkConfig;
use super::parser::parse_routes;
use crate::{Error, RouteNetwork, ShortestPathEngine};

/// Creates the routing engine from the dataset named in the configuration
///
/// # Errors
///
/// Returns an error if the dataset is missing, malformed or holds an
/// invalid weight
pub fn create_route_engine(config: &NetworkConfig) -> Result<ShortestPathEngine, Error> {
    validate_config(config)?;

    info!("Loading routes from {}", config.dataset_path.display());
    let file = File::open(&config.dataset_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!(
                "Failed to open dataset '{}': {}",
                config.dataset_path.display(),
                e
            ),
        )
    })?;
    let network = read_route_network(BufReader::new(file))?;

    info!(
        "Network loaded with {} cities and {} routes",
        network.city_count(),
        network.route_count()
    );
    Ok(ShortestPathEngine::with_condition(network, config.condition))
}

/// Builds a network from dataset lines. Repeated pairs overwrite earlier ones.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for malformed lines and
/// [`Error::InvalidWeight`] for non-positive times
pub fn read_route_network<R: BufRead>(reader: R) -> Result<RouteNetwork, Error> {
    let mut network = RouteNetwork::new();
    for route in parse_routes(reader)? {
        network.add_route(&route.origin, &route.destination, route.weights())?;
    }
    Ok(network)
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if !config.dataset_path.is_file() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Dataset not found: {}", config.dataset_path.display()),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;

    #[test]
    fn invalid_weight_aborts_the_load() {
        let data = "A B 5 8 10 15\nB C 3 0 6 9\n";
        assert!(matches!(
            read_route_network(data.as_bytes()),
            Err(Error::InvalidWeight { origin, .. }) if origin == "B"
        ));
    }

    #[test]
    fn repeated_pair_overwrites() {
        let data = "A B 5 8 10 15\nA B 1 2 3 4\n";
        let network = read_route_network(data.as_bytes()).unwrap();
        assert_eq!(network.route_count(), 1);
        assert_eq!(network.weight("A", "B", Condition::Storm).unwrap(), 4.0);
    }

    #[test]
    fn missing_dataset_is_not_found() {
        let config = NetworkConfig::new("does/not/exist.txt");
        assert!(matches!(
            create_route_engine(&config),
            Err(Error::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }
}
