//! Command-line interface for courier delivery estimates.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod estimate;
mod input;
mod report;
mod validate;

pub use error::CliError;
pub use input::{EstimateInput, InputError, parse_input};
pub use report::{OutputFormat, write_report};
pub use validate::{ValidationError, validate_capacity};

pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_COMBINATION_LIMIT: &str = "combination-limit";
pub(crate) const ARG_OFFERS: &str = "offers";
pub(crate) const ENV_INPUT: &str = "COURIER_CMDS_ESTIMATE_INPUT";

/// Path argument that selects standard input.
pub(crate) const STDIN_PATH: &str = "-";

/// Run the courier CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input parsing,
/// validation, scheduling or output fails. [`CliError::exit_code`] maps each
/// failure to the process exit status.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Estimate(args) => estimate::run_estimate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Delivery cost and time estimates for courier packages",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Price packages and estimate their delivery times.
    Estimate(estimate::EstimateArgs),
}

#[cfg(test)]
mod tests;
