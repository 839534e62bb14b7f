//! Loading a simulation scenario from its line-oriented text form.
//!
//! The format is, in order: one line with the network-wide maximum speed;
//! street lines `from to distance [max_speed]` up to a blank line; recent
//! speed lines `from to speed...`; then a line holding a single token (the
//! source key) and a final line with the destination key.

use std::io::BufRead;

use log::info;

use crate::error::Error;
use crate::model::StreetNetwork;

/// A fully loaded routing scenario: the template network plus the query
#[derive(Debug, Clone)]
pub struct Scenario {
    pub network: StreetNetwork,
    pub source: String,
    pub destination: String,
}

/// Reads a [`Scenario`] from any buffered reader.
///
/// # Errors
///
/// [`Error::InvalidData`] for malformed lines, numbers or premature end of
/// input; [`Error::UnknownStreet`] when a speed record names an edge that
/// was never declared.
pub fn read_scenario<R: BufRead>(reader: R) -> Result<Scenario, Error> {
    let mut lines = reader.lines();

    let default_max_speed = parse_number(next_line(&mut lines)?.trim())?;
    let mut network = StreetNetwork::new(default_max_speed);

    // street section, terminated by a blank line
    loop {
        let line = next_line(&mut lines)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => break,
            [from, to, distance] => {
                network.add_street(*from, *to, parse_number(distance)?, None);
            }
            [from, to, distance, max_speed] => {
                network.add_street(
                    *from,
                    *to,
                    parse_number(distance)?,
                    Some(parse_number(max_speed)?),
                );
            }
            _ => {
                return Err(Error::InvalidData(format!(
                    "Malformed street line: {line:?}"
                )));
            }
        }
    }

    // recent-speed section, terminated by the single-token source line
    let source = loop {
        let line = next_line(&mut lines)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {
                return Err(Error::InvalidData(
                    "Unexpected blank line in speed section".to_owned(),
                ));
            }
            [source] => break (*source).to_owned(),
            [from, to, speeds @ ..] => {
                let speeds = speeds
                    .iter()
                    .map(|s| parse_number(s))
                    .collect::<Result<Vec<f64>, Error>>()?;
                network.record_speeds(from, to, speeds)?;
            }
        }
    };

    let destination = next_line(&mut lines)?.trim().to_owned();
    if destination.is_empty() {
        return Err(Error::InvalidData("Missing destination key".to_owned()));
    }

    info!(
        "Loaded street network: {} nodes, {} streets",
        network.graph().node_count(),
        network.graph().edge_count()
    );

    Ok(Scenario {
        network,
        source,
        destination,
    })
}

fn next_line(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<String, Error> {
    lines
        .next()
        .ok_or_else(|| Error::InvalidData("Unexpected end of input".to_owned()))?
        .map_err(Error::from)
}

fn parse_number(token: &str) -> Result<f64, Error> {
    token
        .parse()
        .map_err(|_| Error::InvalidData(format!("Invalid number: {token:?}")))
}
