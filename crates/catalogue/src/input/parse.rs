//! Parsers for individual base request lines.

use crate::input::{ParseError, Result};
use crate::models::types::Coordinates;

/// A base request split into its parts, e.g. `Stop`, `Universam`,
/// ` 55.587655, 37.645687, 900m to Biryulyovo Tovarnaya`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandDescription {
    pub command: String,
    pub id: String,
    pub description: String,
}

/// Split a line into command, id and description.
///
/// Returns `None` for lines without a colon or without a command word
/// before it.
pub fn parse_command_description(line: &str) -> Option<CommandDescription> {
    let colon_pos = line.find(':')?;
    let space_pos = line.find(' ')?;
    if space_pos >= colon_pos {
        return None;
    }

    let id = line[space_pos..colon_pos].trim_start_matches(' ');
    if id.is_empty() {
        return None;
    }

    Some(CommandDescription {
        command: line[..space_pos].to_string(),
        id: id.to_string(),
        description: line[colon_pos + 1..].to_string(),
    })
}

/// Strip spaces from both ends.
pub fn trim(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Split on `delim`, trimming items and dropping empty ones.
pub fn split(s: &str, delim: char) -> Vec<&str> {
    s.split(delim).map(trim).filter(|item| !item.is_empty()).collect()
}

/// Parse a route description into the sequence of stop names a bus visits.
///
/// `A > B > C > A` is circular and kept as written; `A - B - C` is linear
/// and expanded to `A, B, C, B, A`.
pub fn parse_route(route: &str) -> Vec<&str> {
    if route.contains('>') {
        return split(route, '>');
    }

    let stops = split(route, '-');
    let mut results = stops.clone();
    results.extend(stops.iter().rev().skip(1));
    results
}

/// Parse the leading `lat, lng` pair of a stop description.
pub fn parse_coordinates(description: &str) -> Result<Coordinates> {
    let invalid = || ParseError::InvalidCoordinates(trim(description).to_string());

    let mut parts = description.split(',').map(trim);
    let lat = parts.next().ok_or_else(invalid)?;
    let lng = parts.next().ok_or_else(invalid)?;

    let lat: f64 = lat.parse().map_err(|_| invalid())?;
    let lng: f64 = lng.parse().map_err(|_| invalid())?;

    Ok(Coordinates::new(lat, lng))
}

/// Parse the `<D>m to <stop>` items following the coordinates of a stop
/// description.
pub fn parse_distances(description: &str) -> Result<Vec<(&str, u32)>> {
    split(description, ',')
        .into_iter()
        .skip(2)
        .map(parse_distance)
        .collect()
}

fn parse_distance(item: &str) -> Result<(&str, u32)> {
    let invalid = || ParseError::InvalidDistance(item.to_string());

    let (meters, rest) = item.split_once('m').ok_or_else(invalid)?;
    let meters: u32 = trim(meters).parse().map_err(|_| invalid())?;

    let stop = trim(rest).strip_prefix("to").ok_or_else(invalid)?;
    let stop = trim(stop);
    if stop.is_empty() {
        return Err(invalid());
    }

    Ok((stop, meters))
}
