//! Parser for the plain-text estimate input.
//!
//! ```text
//! <base_cost> <package_count>
//! <id> <weight> <distance> [offer_code]     (package_count lines)
//! [<vehicle_count> <speed> <max_load>]
//! ```
//!
//! Blank lines are ignored and tokens are separated by whitespace. Without a
//! fleet line, or with a vehicle count of zero, packages are priced but not
//! scheduled.

use std::str::FromStr;

use courier_core::{ShipmentRequest, ShipmentRequestError, Vehicle, VehicleError};
use thiserror::Error;

/// Parsed estimate input.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateInput {
    /// Base charge applied to every delivery.
    pub base_cost: f64,
    /// Packages in input order.
    pub requests: Vec<ShipmentRequest>,
    /// Fleet to schedule with; empty for pricing only.
    pub vehicles: Vec<Vehicle>,
}

/// Errors raised while parsing estimate input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The input held no content.
    #[error("input is empty")]
    Empty,
    /// A line ended before a required field.
    #[error("line {line}: missing {field}")]
    MissingField {
        /// One-based line number.
        line: usize,
        /// Name of the missing field.
        field: &'static str,
    },
    /// A field did not parse as a number.
    #[error("line {line}: {field} must be a number (got {value:?})")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// Name of the field.
        field: &'static str,
        /// Text that failed to parse.
        value: String,
    },
    /// Fewer package lines than the header announced.
    #[error("expected {expected} package lines but found {found}")]
    MissingPackages {
        /// Count announced by the header.
        expected: usize,
        /// Package lines actually present.
        found: usize,
    },
    /// A package line described an invalid package.
    #[error("line {line}: {source}")]
    InvalidPackage {
        /// One-based line number.
        line: usize,
        /// Validation failure.
        #[source]
        source: ShipmentRequestError,
    },
    /// The fleet line described an invalid vehicle.
    #[error("line {line}: {source}")]
    InvalidVehicle {
        /// One-based line number.
        line: usize,
        /// Validation failure.
        #[source]
        source: VehicleError,
    },
    /// Content followed the last expected field.
    #[error("line {line}: unexpected trailing input")]
    UnexpectedTrailingInput {
        /// One-based line number.
        line: usize,
    },
}

/// Parse estimate input text.
///
/// # Errors
/// Returns [`InputError`] describing the first malformed line.
///
/// # Examples
/// ```
/// use courier_cli::parse_input;
///
/// let input = parse_input("100 2\nPKG1 5 5 OFR001\nPKG2 15 5\n1 70 200\n")?;
/// assert_eq!(input.base_cost, 100.0);
/// assert_eq!(input.requests.len(), 2);
/// assert_eq!(input.vehicles.len(), 1);
/// # Ok::<(), courier_cli::InputError>(())
/// ```
pub fn parse_input(text: &str) -> Result<EstimateInput, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, content)| Line {
            number: index + 1,
            content,
        })
        .filter(|line| !line.content.trim().is_empty());

    let header = lines.next().ok_or(InputError::Empty)?;
    let mut header_fields = header.fields();
    let base_cost: f64 = header_fields.number("base cost")?;
    let expected: usize = header_fields.number("package count")?;
    header_fields.finish()?;

    let mut requests = Vec::with_capacity(expected);
    for found in 0..expected {
        let line = lines
            .next()
            .ok_or(InputError::MissingPackages { expected, found })?;
        requests.push(parse_package(&line)?);
    }

    let vehicles = match lines.next() {
        Some(line) => parse_fleet(&line)?,
        None => Vec::new(),
    };
    if let Some(extra) = lines.next() {
        return Err(InputError::UnexpectedTrailingInput {
            line: extra.number,
        });
    }

    Ok(EstimateInput {
        base_cost,
        requests,
        vehicles,
    })
}

fn parse_package(line: &Line<'_>) -> Result<ShipmentRequest, InputError> {
    let mut fields = line.fields();
    let id = fields.text("package id")?;
    let weight: f64 = fields.number("weight")?;
    let distance: f64 = fields.number("distance")?;
    let offer_code = fields.optional_text();
    fields.finish()?;

    let request = ShipmentRequest::new(id, weight, distance).map_err(|source| {
        InputError::InvalidPackage {
            line: line.number,
            source,
        }
    })?;
    Ok(match offer_code {
        Some(code) => request.with_offer_code(code),
        None => request,
    })
}

fn parse_fleet(line: &Line<'_>) -> Result<Vec<Vehicle>, InputError> {
    let mut fields = line.fields();
    let count: u32 = fields.number("vehicle count")?;
    let speed: f64 = fields.number("speed")?;
    let max_load: f64 = fields.number("max load")?;
    fields.finish()?;

    (1..=count)
        .map(|id| {
            Vehicle::new(id, max_load, speed).map_err(|source| InputError::InvalidVehicle {
                line: line.number,
                source,
            })
        })
        .collect()
}

struct Line<'a> {
    number: usize,
    content: &'a str,
}

impl<'a> Line<'a> {
    fn fields(&self) -> Fields<'a> {
        Fields {
            line: self.number,
            tokens: self.content.split_whitespace(),
        }
    }
}

struct Fields<'a> {
    line: usize,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn text(&mut self, field: &'static str) -> Result<&'a str, InputError> {
        self.tokens.next().ok_or(InputError::MissingField {
            line: self.line,
            field,
        })
    }

    fn optional_text(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, InputError> {
        let value = self.text(field)?;
        value.parse().map_err(|_| InputError::InvalidNumber {
            line: self.line,
            field,
            value: value.to_owned(),
        })
    }

    fn finish(mut self) -> Result<(), InputError> {
        match self.tokens.next() {
            Some(_) => Err(InputError::UnexpectedTrailingInput { line: self.line }),
            None => Ok(()),
        }
    }
}
