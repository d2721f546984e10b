//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_logging();
    if let Err(err) = courier_cli::run() {
        let code = err.report(&mut std::io::stdout().lock(), &mut std::io::stderr().lock());
        std::process::exit(code);
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`; library `log` records
/// are forwarded through the subscriber's log bridge.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
