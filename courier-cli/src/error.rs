//! Error types emitted by the courier CLI.
//!
//! Every variant maps to a process exit status through [`CliError::exit_code`].

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_core::ScheduleError;
use courier_pricing::PricingError;
use thiserror::Error;

use crate::{InputError, ValidationError};

/// Errors emitted by the courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass <{field}> or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The input file does not exist.
    #[error("input file {path:?} not found")]
    InputNotFound {
        /// Path that was requested.
        path: Utf8PathBuf,
    },
    /// Reading the input failed for a reason other than a missing file.
    #[error("failed to read input from {source_name}: {source}")]
    ReadInput {
        /// The file path, or `stdin`.
        source_name: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The input text was malformed.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    /// The base cost could not be used for pricing.
    #[error("invalid pricing input: {0}")]
    Pricing(#[from] PricingError),
    /// Opening the offers file failed.
    #[error("failed to open offers file {path:?}: {source}")]
    OpenOffers {
        /// Path of the offers file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The offers file was not a valid offer table.
    #[error("failed to parse offers file {path:?}: {source}")]
    ParseOffers {
        /// Path of the offers file.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A package cannot be carried by any vehicle in the fleet.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The scheduler rejected the fleet or a package.
    #[error("scheduling failed: {0}")]
    Schedule(#[from] ScheduleError),
    /// Serialising the JSON report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// | Code | Meaning |
    /// |------|---------|
    /// | 1 | usage, missing argument or configuration |
    /// | 2 | input file not found |
    /// | 3 | malformed input |
    /// | 4 | package heavier than every vehicle |
    /// | 5 | scheduling failure |
    /// | 6 | IO failure while reading input or writing output |
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ArgumentParsing(_)
            | Self::Configuration(_)
            | Self::MissingArgument { .. }
            | Self::OpenOffers { .. }
            | Self::ParseOffers { .. } => 1,
            Self::InputNotFound { .. } => 2,
            Self::Input(_) | Self::Pricing(_) => 3,
            Self::Validation(_) => 4,
            Self::Schedule(_) => 5,
            Self::ReadInput { .. } | Self::SerialiseReport(_) | Self::WriteOutput(_) => 6,
        }
    }

    /// Describe this error to the user and return the exit status to use.
    ///
    /// Help and version requests arrive as [`CliError::ArgumentParsing`];
    /// clap's rendering goes to `stdout` and they exit with 0. Other errors
    /// are written to `stderr`. Failing to write the report yields the
    /// output-failure status.
    pub fn report(&self, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32 {
        let (written, code) = match self {
            Self::ArgumentParsing(clap_err) if !clap_err.use_stderr() => {
                (write!(stdout, "{}", clap_err.render()), 0)
            }
            Self::ArgumentParsing(clap_err) => {
                (write!(stderr, "{}", clap_err.render()), self.exit_code())
            }
            other => (writeln!(stderr, "courier: {other}"), self.exit_code()),
        };
        match written {
            Ok(()) => code,
            Err(source) => {
                let failure = Self::WriteOutput(source);
                log::error!("could not report error: {failure}");
                failure.exit_code()
            }
        }
    }
}
