//! CLI entry point for shade.

mod app;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "shade=info";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_logging();
    let code = app::entry::run(args).await;
    std::process::exit(code);
}

/// Diagnostics go to stderr so they never interleave with status output.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
