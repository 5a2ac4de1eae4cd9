//! Interactive menu loop

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use logistica_core::prelude::*;
use tracing::{debug, warn};

use crate::command::{Command, CommandError, ExportFormat, Flow, execute};

const MENU_OPTIONS: usize = 8;

pub struct Shell<'e, R, W> {
    engine: &'e mut ShortestPathEngine,
    input: R,
    output: W,
    export_dir: PathBuf,
    dataset_path: PathBuf,
}

impl<'e, R: BufRead, W: Write> Shell<'e, R, W> {
    pub fn new(
        engine: &'e mut ShortestPathEngine,
        input: R,
        output: W,
        export_dir: PathBuf,
        dataset_path: PathBuf,
    ) -> Self {
        Self {
            engine,
            input,
            output,
            export_dir,
            dataset_path,
        }
    }

    /// Runs until the user quits or input ends. Command errors are shown
    /// and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n=== Logistics System - Graphs and Floyd's Algorithm ===\n"
        )?;

        loop {
            self.write_menu()?;
            let Some(command) = self.next_command()? else {
                debug!("Input closed, leaving the menu");
                break;
            };

            match execute(&mut *self.engine, command, &mut self.output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CommandError::Output(e)) => return Err(e),
                Err(CommandError::Core(e)) => {
                    warn!("Command failed: {e}");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
        Ok(())
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Main Menu ===")?;
        writeln!(self.output, "1. Find the shortest route between cities")?;
        writeln!(self.output, "2. Show the graph center")?;
        writeln!(self.output, "3. Modify the graph")?;
        writeln!(self.output, "4. Show the adjacency matrix")?;
        writeln!(
            self.output,
            "5. Change weather condition (current: {})",
            self.engine.condition()
        )?;
        writeln!(self.output, "6. Export visualization")?;
        writeln!(self.output, "7. Save dataset")?;
        writeln!(self.output, "8. Exit")
    }

    /// Reads the next menu choice and its parameters. `None` on end of input.
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        let Some(option) = self.read_menu_option("\nSelect an option: ", 1, MENU_OPTIONS)? else {
            return Ok(None);
        };

        let command = match option {
            1 => {
                self.list_cities()?;
                let Some((origin, destination)) = self.read_city_pair()? else {
                    return Ok(None);
                };
                Command::ShortestRoute {
                    origin,
                    destination,
                }
            }
            2 => Command::Center,
            3 => return self.read_modification(),
            4 => Command::AdjacencyMatrix,
            5 => {
                writeln!(self.output, "\n=== Change Weather Condition ===")?;
                for (position, condition) in Condition::ALL.iter().enumerate() {
                    writeln!(self.output, "{}. {condition}", position + 1)?;
                }
                let Some(choice) = self.read_menu_option("\nSelect the weather: ", 1, 4)? else {
                    return Ok(None);
                };
                Command::SetCondition(Condition::ALL[choice - 1])
            }
            6 => {
                let Some(answer) = self.read_line("Highlight a route? (y/n): ")? else {
                    return Ok(None);
                };
                let route = if answer.eq_ignore_ascii_case("y") {
                    self.list_cities()?;
                    let Some(pair) = self.read_city_pair()? else {
                        return Ok(None);
                    };
                    Some(pair)
                } else {
                    None
                };
                let format = ExportFormat::Dot;
                let output = self
                    .export_dir
                    .join(format!("network_{}.{}", self.engine.condition(), format.extension()));
                Command::Export {
                    format,
                    route,
                    output,
                }
            }
            7 => Command::Save(self.dataset_path.clone()),
            _ => Command::Quit,
        };

        Ok(Some(command))
    }

    fn read_modification(&mut self) -> io::Result<Option<Command>> {
        writeln!(self.output, "\n=== Modify Graph ===")?;
        writeln!(self.output, "1. Interrupt traffic between cities")?;
        writeln!(self.output, "2. Add a new connection between cities")?;
        let Some(option) = self.read_menu_option("\nSelect an option: ", 1, 2)? else {
            return Ok(None);
        };

        self.list_cities()?;
        let Some((origin, destination)) = self.read_city_pair()? else {
            return Ok(None);
        };

        if option == 1 {
            return Ok(Some(Command::InterruptRoute {
                origin,
                destination,
            }));
        }

        let mut times = [0.0; 4];
        for (slot, condition) in times.iter_mut().zip(Condition::ALL) {
            let Some(time) = self.read_time(&format!("Travel time with {condition} weather (hours): "))?
            else {
                return Ok(None);
            };
            *slot = time;
        }
        let Some(answer) = self.read_line("Two-way connection? (y/n): ")? else {
            return Ok(None);
        };

        Ok(Some(Command::AddRoute {
            origin,
            destination,
            weights: RouteWeights::from(times),
            two_way: answer.eq_ignore_ascii_case("y"),
        }))
    }

    fn list_cities(&mut self) -> io::Result<()> {
        crate::render::write_cities(&mut self.output, &self.engine.network().cities())
    }

    fn read_city_pair(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(origin) = self.read_line("\nOrigin city: ")? else {
            return Ok(None);
        };
        let Some(destination) = self.read_line("Destination city: ")? else {
            return Ok(None);
        };
        Ok(Some((origin, destination)))
    }

    fn read_menu_option(&mut self, prompt: &str, min: usize, max: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                Ok(_) => writeln!(self.output, "Please enter a number between {min} and {max}.")?,
                Err(_) => writeln!(self.output, "Please enter a valid whole number.")?,
            }
        }
    }

    /// Any number is accepted here; the network rejects non-positive times
    fn read_time(&mut self, prompt: &str) -> io::Result<Option<TravelTime>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<TravelTime>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
