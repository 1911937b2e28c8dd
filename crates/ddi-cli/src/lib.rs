//! ddi-acme command-line interface.
//!
//! Stands in for a host framework on manual runs: `challenge` drives one
//! full perform / propagation-wait / cleanup lifecycle, `resolve` answers
//! which zone a challenge record for a domain would land in.

pub mod cli;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Run the CLI application.
pub async fn run() -> Result<()> {
    init_tracing();
    cli::run().await
}

// Log level comes from RUST_LOG, defaulting to info.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}
