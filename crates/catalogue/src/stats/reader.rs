//! Answers statistics requests against a catalogue.

use std::io::{BufRead, Write};

use log::debug;

use crate::input::{read_request_count, ParseError, Result};
use crate::models::{traits::*, types::*};
use crate::stats::format::{format_general, DEFAULT_PRECISION};

const NOT_FOUND: &str = "not found";

/// A statistics request such as `Bus 256` or `Stop Universam`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatRequest<'a> {
    pub kind: &'a str,
    pub name: &'a str,
}

impl<'a> StatRequest<'a> {
    pub fn parse(line: &'a str) -> Self {
        let (kind, name) = line.split_once(' ').unwrap_or((line, ""));
        Self { kind, name }
    }
}

/// Render a route's statistics, or `not found`.
pub fn describe_bus(bus: Option<&Bus>, catalogue: &(impl CatalogueQuery + ?Sized)) -> String {
    let Some(bus) = bus else {
        return NOT_FOUND.to_string();
    };

    let info = catalogue.route_info(bus);
    format!(
        "{} stops on route, {} unique stops, {} route length, {} curvature",
        info.stop_count,
        info.unique_stop_count,
        info.route_length,
        format_general(info.curvature, DEFAULT_PRECISION)
    )
}

/// Render the buses serving a stop, `no buses`, or `not found`.
pub fn describe_stop(stop: Option<&Stop>, catalogue: &(impl CatalogueQuery + ?Sized)) -> String {
    let Some(stop) = stop else {
        return NOT_FOUND.to_string();
    };

    let buses = catalogue.stop_routes(stop);
    if buses.is_empty() {
        return "no buses".to_string();
    }

    let mut answer = String::from("buses");
    for bus in buses {
        answer.push(' ');
        answer.push_str(bus.as_str());
    }
    answer
}

/// Answer one request line, writing `<kind> <name>: <answer>`.
pub fn print_stat<W: Write>(
    catalogue: &(impl CatalogueQuery + ?Sized),
    request: &str,
    output: &mut W,
) -> std::io::Result<()> {
    let request = StatRequest::parse(request);

    let answer = match request.kind {
        "Bus" => describe_bus(catalogue.find_bus(request.name), catalogue),
        "Stop" => describe_stop(catalogue.find_stop(request.name), catalogue),
        other => {
            debug!("ignoring unknown request type {other:?}");
            String::new()
        }
    };

    writeln!(output, "{} {}: {}", request.kind, request.name, answer)
}

/// Read a request count followed by that many statistics requests,
/// answering each on `output`.
pub fn process_stat_requests<R: BufRead, W: Write>(
    reader: &mut R,
    catalogue: &(impl CatalogueQuery + ?Sized),
    output: &mut W,
) -> Result<()> {
    let expected = read_request_count(reader)?;

    let mut line = String::new();
    for read in 0..expected {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(ParseError::UnexpectedEof { read, expected });
        }
        print_stat(catalogue, line.trim_end_matches(['\r', '\n']), output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::TransportCatalogue;

    fn sample() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
        catalogue.add_stop("B", Coordinates::new(55.1, 37.1)).unwrap();
        catalogue.add_stop("Lonely", Coordinates::new(55.2, 37.2)).unwrap();
        catalogue.add_distance("A", "B", 15000);

        let stops = vec![catalogue.stop_id("A"), catalogue.stop_id("B"), catalogue.stop_id("A")];
        catalogue.add_bus("14", stops.clone()).unwrap();
        catalogue.add_bus("9", stops).unwrap();
        catalogue
    }

    fn answer(catalogue: &TransportCatalogue, request: &str) -> String {
        let mut out = Vec::new();
        print_stat(catalogue, request, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_request() {
        assert_eq!(
            StatRequest::parse("Stop Biryulyovo Zapadnoye"),
            StatRequest { kind: "Stop", name: "Biryulyovo Zapadnoye" }
        );
        assert_eq!(StatRequest::parse("Bus"), StatRequest { kind: "Bus", name: "" });
    }

    #[test]
    fn test_request_name_is_taken_verbatim() {
        assert_eq!(StatRequest::parse("Stop  A ").name, " A ");
        assert_eq!(answer(&sample(), "Stop  A "), "Stop  A : not found\n");
    }

    #[test]
    fn test_bus_answer() {
        let line = answer(&sample(), "Bus 14");
        assert!(line.starts_with("Bus 14: 3 stops on route, 2 unique stops, 30000 route length, "));
        assert!(line.ends_with(" curvature\n"));
    }

    #[test]
    fn test_not_found() {
        let catalogue = sample();
        assert_eq!(answer(&catalogue, "Bus 751"), "Bus 751: not found\n");
        assert_eq!(answer(&catalogue, "Stop Samara"), "Stop Samara: not found\n");
    }

    #[test]
    fn test_stop_answers() {
        let catalogue = sample();
        assert_eq!(answer(&catalogue, "Stop A"), "Stop A: buses 14 9\n");
        assert_eq!(answer(&catalogue, "Stop Lonely"), "Stop Lonely: no buses\n");
    }

    #[test]
    fn test_degenerate_curvature_is_printed() {
        let mut catalogue = sample();
        catalogue.add_bus("stub", vec![catalogue.stop_id("Lonely")]).unwrap();

        assert_eq!(
            answer(&catalogue, "Bus stub"),
            "Bus stub: 1 stops on route, 1 unique stops, 0 route length, nan curvature\n"
        );
    }

    #[test]
    fn test_unknown_request_type() {
        assert_eq!(answer(&sample(), "Tram 5"), "Tram 5: \n");
    }

    #[test]
    fn test_process_stat_requests() {
        let catalogue = sample();
        let mut out = Vec::new();

        process_stat_requests(&mut "2\nStop B\nBus 9\nStop A\n".as_bytes(), &catalogue, &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Stop B: buses 14 9");
        assert!(lines[1].starts_with("Bus 9: 3 stops on route"));
    }
}
