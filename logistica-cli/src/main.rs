use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use logistica_core::prelude::*;
use tracing::{error, info};

mod command;
mod config;
mod logging;
mod render;
mod shell;

use command::{Command, ExportFormat, execute};
use config::AppConfig;
use shell::Shell;

/// Weather-aware shortest routes between cities
#[derive(Parser, Debug)]
#[command(name = "logistica", version)]
#[command(about = "Shortest routes and distribution hubs on a weather-dependent road network", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route dataset, overrides the configuration file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Initial weather condition (normal, rain, snow, storm)
    #[arg(short = 'w', long)]
    condition: Option<Condition>,

    /// Log filter, e.g. `debug` or `logistica_core=trace`
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Interactive menu (default)
    Shell,
    /// List the cities in the network
    Cities,
    /// Print the shortest route between two cities
    Route { origin: String, destination: String },
    /// Print the graph centre
    Center,
    /// Print the adjacency matrix for the current condition
    Matrix,
    /// Write the network as DOT or JSON, optionally highlighting a route
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Dot)]
        format: ExportFormat,
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Output file, defaults to `network_<condition>.<ext>` in the export directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_overrides(args.data, args.condition, args.log_level);
    logging::init(&config.logging.filter);

    info!("Starting logistica v{}", env!("CARGO_PKG_VERSION"));
    let mut engine = create_route_engine(&config.network)?;

    let command = match args.command.unwrap_or(Mode::Shell) {
        Mode::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(
                &mut engine,
                stdin.lock(),
                stdout.lock(),
                config.export.directory,
                config.network.dataset_path,
            )
            .run()?;
            return Ok(());
        }
        Mode::Route {
            origin,
            destination,
        } => Command::ShortestRoute {
            origin,
            destination,
        },
        Mode::Cities => Command::ListCities,
        Mode::Center => Command::Center,
        Mode::Matrix => Command::AdjacencyMatrix,
        Mode::Export {
            format,
            from,
            to,
            out,
        } => {
            let output = out.unwrap_or_else(|| {
                config.export.directory.join(format!(
                    "network_{}.{}",
                    engine.condition(),
                    format.extension()
                ))
            });
            Command::Export {
                format,
                route: from.zip(to),
                output,
            }
        }
    };

    execute(&mut engine, command, &mut io::stdout().lock())?;
    Ok(())
}
