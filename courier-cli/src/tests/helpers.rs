//! Test helpers for writing input fixtures and driving the estimate command.

use super::*;
use crate::estimate::run_estimate_with;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// The five-package sample with two 200 kg vehicles at 70 km/h.
pub(super) const SAMPLE_INPUT: &str = "\
100 5
PKG1 50 30 OFR001
PKG2 75 125 OFR008
PKG3 175 100 OFR003
PKG4 110 60 OFR002
PKG5 155 95 NA
2 70 200
";

/// Expected text report for [`SAMPLE_INPUT`].
pub(super) const SAMPLE_REPORT: &str = "\
PKG1 0 750 3.98
PKG2 0 1475 1.78
PKG3 0 2350 1.42
PKG4 105 1395 0.85
PKG5 0 2125 4.19
";

/// Three packages priced without a fleet line.
pub(super) const PRICING_ONLY_INPUT: &str = "\
100 3
PKG1 5 5 OFR001
PKG2 15 5 OFR002
PKG3 10 100 OFR003
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding input and offer files.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Parse `argv` and run the estimate command against in-memory stdin/stdout.
pub(super) fn run_cli(argv: &[&str], stdin: &str) -> (Result<(), CliError>, String) {
    let mut output = Vec::new();
    let outcome = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| match cli.command {
            Command::Estimate(args) => {
                let mut reader = stdin.as_bytes();
                run_estimate_with(args, &mut reader, &mut output)
            }
        });
    let stdout = String::from_utf8(output).expect("stdout utf-8");
    (outcome, stdout)
}
