//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let ctx = commands::Context {
        credentials: cli.credentials,
    };

    match cli.command {
        Commands::Challenge(args) => commands::challenge::execute(ctx, args).await,
        Commands::Resolve(args) => commands::resolve::execute(ctx, args).await,
    }
}
