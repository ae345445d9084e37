//! Accumulates base requests and applies them to a catalogue in phases.

use std::io::BufRead;

use log::{debug, info};

use crate::catalogue::TransportCatalogue;
use crate::input::parse::{self, CommandDescription};
use crate::input::{ParseError, Result};
use crate::models::traits::CatalogueQuery;

const STOP_COMMAND: &str = "Stop";
const BUS_COMMAND: &str = "Bus";

#[derive(Clone, Debug, Default)]
pub struct InputReader {
    commands: Vec<CommandDescription>,
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one base request line. Lines that are not commands are ignored.
    pub fn parse_line(&mut self, line: &str) {
        if let Some(command) = parse::parse_command_description(line) {
            self.commands.push(command);
        }
    }

    pub fn commands(&self) -> &[CommandDescription] {
        &self.commands
    }

    /// Apply every accumulated command.
    ///
    /// Stops are registered first, then their distances, then buses, so a
    /// command may refer to a stop declared on a later line.
    pub fn apply_commands(&self, catalogue: &mut TransportCatalogue) -> Result<()> {
        // Phase 1: stops
        let mut stops = Vec::new();
        for command in self.commands_of(STOP_COMMAND) {
            let coordinates = parse::parse_coordinates(&command.description)?;
            catalogue.add_stop(&command.id, coordinates)?;
            stops.push(command);
        }
        debug!("registered {} stops", stops.len());

        // Phase 2: distances between known stops
        for command in stops {
            for (to, meters) in parse::parse_distances(&command.description)? {
                catalogue.add_distance(&command.id, to, meters);
            }
        }

        // Phase 3: buses
        for command in self.commands_of(BUS_COMMAND) {
            let route: Vec<_> = parse::parse_route(&command.description)
                .into_iter()
                .map(|name| catalogue.find_stop(name).map(|stop| stop.id))
                .collect();
            catalogue.add_bus(&command.id, route)?;
        }

        info!(
            "catalogue holds {} stops and {} buses",
            catalogue.stop_count(),
            catalogue.bus_count()
        );
        Ok(())
    }

    fn commands_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a CommandDescription> {
        self.commands.iter().filter(move |c| c.command == kind)
    }
}

/// Read a line holding the number of requests that follow.
pub fn read_request_count<R: BufRead>(reader: &mut R) -> Result<usize> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ParseError::UnexpectedEof {
            read: 0,
            expected: 1,
        });
    }

    let line = line.trim();
    line.parse()
        .map_err(|_| ParseError::InvalidRequestCount(line.to_string()))
}

/// Read a request count followed by that many base requests, and apply
/// them to `catalogue`.
pub fn read_base_requests<R: BufRead>(reader: &mut R, catalogue: &mut TransportCatalogue) -> Result<()> {
    let expected = read_request_count(reader)?;
    let mut input = InputReader::new();

    let mut line = String::new();
    for read in 0..expected {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(ParseError::UnexpectedEof { read, expected });
        }
        input.parse_line(line.trim_end_matches(['\r', '\n']));
    }

    debug!("read {} base commands", input.commands().len());
    input.apply_commands(catalogue)
}
