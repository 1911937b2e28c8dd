//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use ddi_acme::plugin;
use std::path::PathBuf;

/// DNS-01 hook runner for Infoblox Universal DDI
#[derive(Parser)]
#[command(
    name = "ddi-acme",
    version,
    about = plugin::DESCRIPTION,
    long_about = plugin::MORE_INFO
)]
pub struct Cli {
    /// Infoblox credentials INI file
    #[arg(
        long,
        global = true,
        env = "DDI_ACME_CREDENTIALS",
        default_value = plugin::DEFAULT_CREDENTIALS_PATH
    )]
    pub credentials: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a challenge record, wait out propagation, then remove it
    ///
    /// An end-to-end dry run of the lifecycle a host framework drives:
    /// useful for checking credentials, view/zone setup, and API
    /// permissions before pointing a real issuance run at them.
    Challenge(ChallengeArgs),

    /// Print the zone id a challenge record for a domain would land in
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct ChallengeArgs {
    /// Domain being validated
    #[arg(long, env = "CERTBOT_DOMAIN")]
    pub domain: String,

    /// Validation token to publish
    #[arg(long, env = "CERTBOT_VALIDATION")]
    pub validation: String,

    /// Challenge record owner name (defaults to _acme-challenge.<domain>)
    #[arg(long)]
    pub record_name: Option<String>,

    /// Seconds to wait for DNS propagation between create and cleanup
    #[arg(long, default_value_t = plugin::DEFAULT_PROPAGATION_SECONDS)]
    pub propagation_seconds: u64,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Domain to resolve a zone for
    #[arg(long)]
    pub domain: String,
}
