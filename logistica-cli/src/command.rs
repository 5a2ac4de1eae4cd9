//! One variant per user action, each delegating to a single core operation

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use logistica_core::prelude::*;
use tracing::{info, warn};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Dot,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Dot => "dot",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListCities,
    ShortestRoute {
        origin: String,
        destination: String,
    },
    Center,
    InterruptRoute {
        origin: String,
        destination: String,
    },
    AddRoute {
        origin: String,
        destination: String,
        weights: RouteWeights,
        two_way: bool,
    },
    AdjacencyMatrix,
    SetCondition(Condition),
    Export {
        format: ExportFormat,
        route: Option<(String, String)>,
        output: PathBuf,
    },
    Save(PathBuf),
    Quit,
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// The operation failed; the user can try something else
    #[error(transparent)]
    Core(#[from] Error),
    /// The output stream itself is broken
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Whether the interactive loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs one command against the engine, writing user-facing output to `out`
///
/// # Errors
///
/// Failures of the operation itself, including reading or writing dataset
/// and export files, are [`CommandError::Core`]. Failing to write to `out`
/// is [`CommandError::Output`].
pub fn execute<W: Write>(
    engine: &mut ShortestPathEngine,
    command: Command,
    out: &mut W,
) -> Result<Flow, CommandError> {
    match command {
        Command::ListCities => render::write_cities(out, &engine.network().cities())?,
        Command::ShortestRoute {
            origin,
            destination,
        } => {
            let path = engine.shortest_path(&origin, &destination)?;
            let distance = engine.shortest_distance(&origin, &destination)?;
            render::write_route(out, engine.condition(), &path, distance)?;
        }
        Command::Center => {
            let center = engine.center();
            if center.is_empty() {
                warn!("No city reaches every other city under {}", engine.condition());
                let fallback = engine.component_center();
                render::write_component_center(out, &fallback)?;
            } else {
                let eccentricity = engine.eccentricity(&center[0])?;
                render::write_center(out, &center, eccentricity)?;
            }
        }
        Command::InterruptRoute {
            origin,
            destination,
        } => {
            engine.editor().remove_route(&origin, &destination)?;
            writeln!(out, "Route {origin} -> {destination} removed.")?;
        }
        Command::AddRoute {
            origin,
            destination,
            weights,
            two_way,
        } => {
            let mut editor = engine.editor();
            if two_way {
                editor.add_two_way_route(&origin, &destination, weights)?;
                writeln!(out, "Routes {origin} <-> {destination} added.")?;
            } else {
                editor.add_route(&origin, &destination, weights)?;
                writeln!(out, "Route {origin} -> {destination} added.")?;
            }
        }
        Command::AdjacencyMatrix => render::write_matrix(out, &engine.adjacency_matrix())?,
        Command::SetCondition(condition) => {
            engine.set_condition(condition);
            writeln!(out, "Weather condition set to {condition}.")?;
        }
        Command::Export {
            format,
            route,
            output,
        } => {
            let path = match &route {
                Some((origin, destination)) => engine.shortest_path(origin, destination)?,
                None => Vec::new(),
            };
            let document = match format {
                ExportFormat::Dot => to_dot(engine.network(), engine.condition(), &path),
                ExportFormat::Json => {
                    let value = to_json(engine.network(), engine.condition(), &path);
                    serde_json::to_string_pretty(&value)
                        .map_err(|e| Error::InvalidData(e.to_string()))?
                }
            };
            fs::write(&output, document).map_err(Error::from)?;
            info!("Exported network to {}", output.display());
            writeln!(out, "Visualization written to {}", output.display())?;
        }
        Command::Save(path) => {
            save_route_network(engine.network(), &path)?;
            writeln!(out, "Network saved to {}", path.display())?;
        }
        Command::Quit => {
            writeln!(out, "Thank you for using the logistics system!")?;
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ShortestPathEngine {
        let mut engine = ShortestPathEngine::new(RouteNetwork::new());
        let mut editor = engine.editor();
        editor
            .add_route("A", "B", RouteWeights::new(10.0, 15.0, 20.0, 50.0))
            .unwrap();
        editor
            .add_route("B", "C", RouteWeights::new(10.0, 12.0, 15.0, 20.0))
            .unwrap();
        engine
    }

    fn run(
        engine: &mut ShortestPathEngine,
        command: Command,
    ) -> (Result<Flow, CommandError>, String) {
        let mut out = Vec::new();
        let result = execute(engine, command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn shortest_route_prints_path_and_time() {
        let mut engine = engine();
        let (result, text) = run(
            &mut engine,
            Command::ShortestRoute {
                origin: "A".into(),
                destination: "C".into(),
            },
        );
        assert_eq!(result.unwrap(), Flow::Continue);
        assert!(text.contains("A -> B -> C"));
        assert!(text.contains("20.00 hours"));
    }

    #[test]
    fn condition_switch_changes_following_queries() {
        let mut engine = engine();
        run(&mut engine, Command::SetCondition(Condition::Storm))
            .0
            .unwrap();
        let (_, text) = run(
            &mut engine,
            Command::ShortestRoute {
                origin: "A".into(),
                destination: "C".into(),
            },
        );
        assert!(text.contains("70.00 hours"));
    }

    #[test]
    fn interrupted_route_leaves_no_path() {
        let mut engine = engine();
        run(
            &mut engine,
            Command::InterruptRoute {
                origin: "B".into(),
                destination: "C".into(),
            },
        )
        .0
        .unwrap();
        let (result, _) = run(
            &mut engine,
            Command::ShortestRoute {
                origin: "A".into(),
                destination: "C".into(),
            },
        );
        assert!(matches!(
            result,
            Err(CommandError::Core(Error::NoPath { .. }))
        ));
    }

    #[test]
    fn center_falls_back_to_largest_component() {
        let mut engine = engine();
        let (result, text) = run(&mut engine, Command::Center);
        result.unwrap();
        // A reaches every city in this chain
        assert!(text.contains("The graph center is: A"));

        run(
            &mut engine,
            Command::AddRoute {
                origin: "X".into(),
                destination: "Y".into(),
                weights: RouteWeights::new(1.0, 1.0, 1.0, 1.0),
                two_way: true,
            },
        )
        .0
        .unwrap();
        let (_, text) = run(&mut engine, Command::Center);
        assert!(text.contains("No valid center"));
        assert!(text.contains("X, Y"));
    }

    #[test]
    fn export_writes_dot_file() {
        let mut engine = engine();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("network.dot");

        run(
            &mut engine,
            Command::Export {
                format: ExportFormat::Dot,
                route: Some(("A".into(), "C".into())),
                output: output.clone(),
            },
        )
        .0
        .unwrap();

        let document = fs::read_to_string(output).unwrap();
        assert!(document.starts_with("digraph"));
        assert_eq!(document.matches("penwidth = 3").count(), 2);
    }

    #[test]
    fn export_to_missing_directory_is_an_operation_error() {
        let mut engine = engine();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("network.dot");

        let (result, _) = run(
            &mut engine,
            Command::Export {
                format: ExportFormat::Json,
                route: None,
                output,
            },
        );
        assert!(matches!(
            result,
            Err(CommandError::Core(Error::IoError(e))) if e.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn quit_exits() {
        let mut engine = engine();
        assert_eq!(run(&mut engine, Command::Quit).0.unwrap(), Flow::Exit);
    }
}
