//! Rendering priced and scheduled packages.

use std::io::Write;

use clap::ValueEnum;
use courier_core::{ShipmentRequest, truncate_to_hundredths};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Report layout selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One whitespace-separated line per package.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    discount: f64,
    total_cost: f64,
    delivery_time: Option<f64>,
}

impl<'a> From<&'a ShipmentRequest> for ReportRow<'a> {
    fn from(request: &'a ShipmentRequest) -> Self {
        Self {
            id: &request.id,
            discount: request.discount,
            total_cost: request.total_cost,
            delivery_time: request.delivery_time.map(truncate_to_hundredths),
        }
    }
}

/// Write one report entry per request, in order.
///
/// Text lines read `<id> <discount> <total> <delivery_time>`: discount and
/// total are truncated to whole units and the delivery time is truncated to
/// two decimals, or `0.00` for packages that were not scheduled. JSON rows
/// keep the cent amounts and report unscheduled delivery times as `null`.
///
/// # Errors
/// Returns [`CliError::SerialiseReport`] or [`CliError::WriteOutput`] when the
/// report cannot be produced.
pub fn write_report(
    writer: &mut dyn Write,
    requests: &[ShipmentRequest],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, requests),
        OutputFormat::Json => write_json(writer, requests),
    }
}

fn write_text(writer: &mut dyn Write, requests: &[ShipmentRequest]) -> Result<(), CliError> {
    for request in requests {
        let delivery_time = truncate_to_hundredths(request.delivery_time.unwrap_or(0.0));
        writeln!(
            writer,
            "{} {:.0} {:.0} {delivery_time:.2}",
            request.id,
            request.discount.trunc(),
            request.total_cost.trunc(),
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, requests: &[ShipmentRequest]) -> Result<(), CliError> {
    let rows: Vec<ReportRow<'_>> = requests.iter().map(ReportRow::from).collect();
    let payload = serde_json::to_string_pretty(&rows).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
