//! `ddi-acme challenge` - drive one full challenge lifecycle.

use anyhow::Result;
use ddi_acme::{Authenticator, Credentials, Dns01Authenticator};
use std::time::Duration;
use tracing::info;

use super::Context;
use crate::cli::args::ChallengeArgs;

pub async fn execute(ctx: Context, args: ChallengeArgs) -> Result<()> {
    let credentials = Credentials::load(&ctx.credentials)?;
    let mut authenticator = Authenticator::new(credentials);

    let record_name = args
        .record_name
        .unwrap_or_else(|| format!("_acme-challenge.{}", args.domain));

    authenticator
        .perform(&args.domain, &record_name, &args.validation)
        .await?;

    // The propagation pause is host policy, not authenticator behavior;
    // this command is the host here.
    info!(
        seconds = args.propagation_seconds,
        "waiting for DNS propagation"
    );
    tokio::time::sleep(Duration::from_secs(args.propagation_seconds)).await;

    authenticator
        .cleanup(&args.domain, &record_name, &args.validation)
        .await?;

    println!(
        "challenge record {record_name} published and removed for {}",
        args.domain
    );

    Ok(())
}
