use std::io::{self, Write};

use logistica_core::prelude::*;

const COLUMN_WIDTH: usize = 15;

pub fn write_cities<W: Write>(out: &mut W, cities: &[&str]) -> io::Result<()> {
    writeln!(out, "\nAvailable cities:")?;
    for (position, city) in cities.iter().enumerate() {
        writeln!(out, "{}. {city}", position + 1)?;
    }
    Ok(())
}

pub fn write_route<W: Write>(
    out: &mut W,
    condition: Condition,
    path: &[String],
    distance: TravelTime,
) -> io::Result<()> {
    writeln!(out, "\n=== Route found ({condition}) ===")?;
    writeln!(out, "Shortest route: {}", path.join(" -> "))?;
    writeln!(out, "Total time: {distance:.2} hours")
}

pub fn write_center<W: Write>(
    out: &mut W,
    center: &[String],
    eccentricity: TravelTime,
) -> io::Result<()> {
    writeln!(out, "\n=== Graph center ===")?;
    writeln!(out, "The graph center is: {}", center.join(", "))?;
    writeln!(
        out,
        "(City with the lowest eccentricity: {eccentricity:.2} hours)"
    )
}

pub fn write_component_center<W: Write>(out: &mut W, center: &[String]) -> io::Result<()> {
    writeln!(out, "\n=== Graph center ===")?;
    writeln!(
        out,
        "No valid center: no city reaches every other city under the current weather."
    )?;
    if center.is_empty() {
        writeln!(out, "The network has no cities.")
    } else {
        writeln!(
            out,
            "Center of the largest strongly connected component: {}",
            center.join(", ")
        )
    }
}

/// Prints the matrix with fixed-width columns and `∞` for missing routes
pub fn write_matrix<W: Write>(out: &mut W, matrix: &AdjacencyMatrix) -> io::Result<()> {
    writeln!(out, "\nAdjacency matrix ({}):", matrix.condition)?;
    write!(out, "{:COLUMN_WIDTH$}", "")?;
    for city in &matrix.cities {
        write!(out, "{city:COLUMN_WIDTH$}")?;
    }
    writeln!(out)?;

    for (city, row) in matrix.rows() {
        write!(out, "{city:COLUMN_WIDTH$}")?;
        for weight in row {
            if weight.is_infinite() {
                write!(out, "{:COLUMN_WIDTH$}", "∞")?;
            } else {
                write!(out, "{weight:<COLUMN_WIDTH$.2}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_marks_missing_routes() {
        let mut network = RouteNetwork::new();
        network
            .add_route("A", "B", RouteWeights::new(1.5, 2.0, 3.0, 4.0))
            .unwrap();
        let matrix = AdjacencyMatrix::from_network(&network, Condition::Normal);

        let mut out = Vec::new();
        write_matrix(&mut out, &matrix).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Adjacency matrix (normal):");
        assert!(lines[3].starts_with("A"));
        assert!(lines[3].contains("1.50"));
        assert!(lines[4].contains('∞'));
    }

    #[test]
    fn cities_are_numbered() {
        let mut out = Vec::new();
        write_cities(&mut out, &["A", "B"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nAvailable cities:\n1. A\n2. B\n");
    }
}
