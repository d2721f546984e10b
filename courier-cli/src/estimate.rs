//! Estimate command implementation for the courier CLI.

use std::io::{BufReader, Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use courier_core::{Scheduler, ShipmentRequest};
use courier_pricing::{OfferPricer, OfferTable, price_all};
use courier_scheduler::{CombinationLimit, TripScheduler, TripSchedulerConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_COMBINATION_LIMIT, ARG_FORMAT, ARG_INPUT, ARG_OFFERS, CliError, ENV_INPUT, EstimateInput,
    OutputFormat, STDIN_PATH, parse_input, validate_capacity, write_report,
};

/// CLI arguments for the `estimate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Price every package in the input and, when the input ends \
                 with a fleet line, estimate when each package is delivered. \
                 The input path can come from the command line, a \
                 configuration file, or the environment; pass - to read \
                 standard input.",
    about = "Estimate delivery cost and time for packages"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct EstimateArgs {
    /// Path to the input file, or `-` for standard input.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Report layout.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Largest number of combinations examined per shipment before falling
    /// back to the greedy selection.
    #[arg(long = ARG_COMBINATION_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) combination_limit: Option<u64>,
    /// JSON file replacing the standard offer table.
    #[arg(long = ARG_OFFERS, value_name = "path")]
    #[serde(default)]
    pub(crate) offers: Option<Utf8PathBuf>,
}

impl EstimateArgs {
    pub(crate) fn into_config(self) -> Result<EstimateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EstimateConfig::try_from(merged)
    }
}

/// Where the estimate input is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    Stdin,
    File(Utf8PathBuf),
}

impl From<Utf8PathBuf> for InputSource {
    fn from(path: Utf8PathBuf) -> Self {
        if path.as_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

/// Resolved `estimate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EstimateConfig {
    pub(crate) input: InputSource,
    pub(crate) format: OutputFormat,
    pub(crate) combination_limit: CombinationLimit,
    pub(crate) offers: Option<Utf8PathBuf>,
}

impl TryFrom<EstimateArgs> for EstimateConfig {
    type Error = CliError;

    fn try_from(args: EstimateArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env: ENV_INPUT,
        })?;
        let combination_limit = args
            .combination_limit
            .map_or_else(CombinationLimit::default, CombinationLimit::new);
        Ok(Self {
            input: InputSource::from(input),
            format: args.format.unwrap_or_default(),
            combination_limit,
            offers: args.offers,
        })
    }
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), CliError> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_estimate_with(args, &mut stdin, &mut stdout)
}

pub(crate) fn run_estimate_with(
    args: EstimateArgs,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let text = read_input(&config.input, stdin)?;
    let input = parse_input(&text)?;
    let offers = load_offers(config.offers.as_deref())?;
    let requests = estimate(input, offers, config.combination_limit)?;
    write_report(writer, &requests, config.format)
}

/// Price every request and, when a fleet is present, schedule deliveries.
pub(crate) fn estimate(
    input: EstimateInput,
    offers: OfferTable,
    combination_limit: CombinationLimit,
) -> Result<Vec<ShipmentRequest>, CliError> {
    let EstimateInput {
        base_cost,
        mut requests,
        mut vehicles,
    } = input;

    let pricer = OfferPricer::new(base_cost, offers)?;
    price_all(&pricer, &mut requests);

    if vehicles.is_empty() {
        log::info!("no fleet supplied; reporting prices only");
        return Ok(requests);
    }

    validate_capacity(&requests, &vehicles)?;
    let scheduler = TripScheduler::with_config(TripSchedulerConfig {
        combination_limit,
        ..TripSchedulerConfig::default()
    });
    let trips = scheduler.schedule(&mut requests, &mut vehicles)?;
    log::info!(
        "scheduled {} package(s) on {} trip(s) across {} vehicle(s)",
        requests.len(),
        trips.len(),
        vehicles.len()
    );
    Ok(requests)
}

fn read_input(source: &InputSource, stdin: &mut dyn Read) -> Result<String, CliError> {
    let mut text = String::new();
    match source {
        InputSource::Stdin => {
            stdin
                .read_to_string(&mut text)
                .map_err(|source| CliError::ReadInput {
                    source_name: "stdin".to_owned(),
                    source,
                })?;
        }
        InputSource::File(path) => {
            let mut file = open_utf8_file(path).map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    CliError::InputNotFound { path: path.clone() }
                } else {
                    CliError::ReadInput {
                        source_name: path.to_string(),
                        source,
                    }
                }
            })?;
            file.read_to_string(&mut text)
                .map_err(|source| CliError::ReadInput {
                    source_name: path.to_string(),
                    source,
                })?;
        }
    }
    Ok(text)
}

/// Loads the offer table, falling back to the standard offers.
pub(crate) fn load_offers(offers_path: Option<&Utf8Path>) -> Result<OfferTable, CliError> {
    let Some(path) = offers_path else {
        return Ok(OfferTable::default());
    };
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOffers {
        path: path.to_path_buf(),
        source,
    })?;
    let table: OfferTable =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseOffers {
            path: path.to_path_buf(),
            source,
        })?;
    if log::log_enabled!(log::Level::Debug) {
        let codes: Vec<&str> = table.iter().map(|offer| offer.code.as_str()).collect();
        log::debug!("loaded {} offer(s) from {path}: {codes:?}", table.len());
    }
    Ok(table)
}

fn open_utf8_file(path: &Utf8Path) -> std::io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EstimateConfig, CliError> {
    let merged = EstimateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EstimateConfig::try_from(merged)
}
