use std::io::BufRead;

use csv::StringRecord;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::{Error, RouteWeights, TravelTime};

const ROUTE_FIELDS: usize = 6;

/// One dataset line: `<Origin> <Destination> <Normal> <Rain> <Snow> <Storm>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRoute {
    pub origin: String,
    pub destination: String,
    pub normal: TravelTime,
    pub rain: TravelTime,
    pub snow: TravelTime,
    pub storm: TravelTime,
}

impl RawRoute {
    pub fn weights(&self) -> RouteWeights {
        RouteWeights::new(self.normal, self.rain, self.snow, self.storm)
    }
}

/// Parses a whitespace-separated route dataset.
///
/// Blank lines and `#` comments are skipped; extra trailing fields are
/// ignored. Weight values are not validated here.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] naming the line for short or non-numeric
/// lines, and [`Error::IoError`] if reading fails.
pub fn parse_routes<R: BufRead>(reader: R) -> Result<Vec<RawRoute>, Error> {
    let mut routes = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < ROUTE_FIELDS {
            return Err(Error::InvalidData(format!(
                "line {line_number}: expected {ROUTE_FIELDS} fields, found {}",
                fields.len()
            )));
        }
        if fields.len() > ROUTE_FIELDS {
            warn!(
                "line {line_number}: ignoring {} extra field(s)",
                fields.len() - ROUTE_FIELDS
            );
        }

        let record = StringRecord::from(fields[..ROUTE_FIELDS].to_vec());
        let route: RawRoute = record
            .deserialize(None)
            .map_err(|e| Error::InvalidData(format!("line {line_number}: {e}")))?;
        trace!("Parsed route {} -> {}", route.origin, route.destination);
        routes.push(route);
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_with_mixed_whitespace() {
        let data = "A B 5 8 10 15\n\n# comment\nB\tC  3 4.5 6 9\n";
        let routes = parse_routes(data.as_bytes()).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].origin, "A");
        assert_eq!(routes[0].weights(), RouteWeights::new(5.0, 8.0, 10.0, 15.0));
        assert_eq!(routes[1].destination, "C");
        assert_eq!(routes[1].rain, 4.5);
    }

    #[test]
    fn short_line_reports_line_number() {
        let data = "A B 5 8 10 15\nB C 3 4\n";
        let error = parse_routes(data.as_bytes()).unwrap_err();
        assert!(matches!(error, Error::InvalidData(message) if message.starts_with("line 2:")));
    }

    #[test]
    fn non_numeric_time_is_invalid_data() {
        let data = "A B 5 eight 10 15\n";
        assert!(matches!(
            parse_routes(data.as_bytes()),
            Err(Error::InvalidData(message)) if message.starts_with("line 1:")
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let routes = parse_routes("A B 1 2 3 4 extra\n".as_bytes()).unwrap();
        assert_eq!(routes[0].storm, 4.0);
    }

    #[test]
    fn negative_weights_parse_and_are_left_to_the_network() {
        let routes = parse_routes("A B -1 2 3 4\n".as_bytes()).unwrap();
        assert_eq!(routes[0].normal, -1.0);
    }
}
