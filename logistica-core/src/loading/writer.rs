use std::fs::File;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::info;

use super::parser::RawRoute;
use crate::{Error, RouteNetwork};

/// Writes the network in dataset format, one route per line sorted by
/// origin then destination
///
/// # Errors
///
/// Returns [`Error::CsvError`] or [`Error::IoError`] if writing fails
pub fn write_route_network<W: Write>(network: &RouteNetwork, writer: W) -> Result<(), Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(writer);

    let routes = network
        .routes()
        .sorted_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    for (origin, destination, weights) in routes {
        let [normal, rain, snow, storm] = *weights.as_array();
        csv_writer.serialize(RawRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
            normal,
            rain,
            snow,
            storm,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Saves the network to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn save_route_network(network: &RouteNetwork, path: &Path) -> Result<(), Error> {
    let file = File::create(path)?;
    write_route_network(network, file)?;
    info!(
        "Saved {} routes to {}",
        network.route_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteWeights;

    #[test]
    fn writes_dataset_lines_sorted() {
        let mut network = RouteNetwork::new();
        network
            .add_route("B", "C", RouteWeights::new(3.0, 4.0, 6.0, 9.0))
            .unwrap();
        network
            .add_route("A", "B", RouteWeights::new(5.0, 8.5, 10.0, 15.0))
            .unwrap();
        network.add_city("Z");

        let mut buffer = Vec::new();
        write_route_network(&network, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "A B 5.0 8.5 10.0 15.0\nB C 3.0 4.0 6.0 9.0\n");
    }
}
