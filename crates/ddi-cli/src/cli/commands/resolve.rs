//! `ddi-acme resolve` - show which zone a challenge record would land in.

use anyhow::Result;
use ddi_acme::{resolve_zone, Authenticator, Credentials};

use super::Context;
use crate::cli::args::ResolveArgs;

pub async fn execute(ctx: Context, args: ResolveArgs) -> Result<()> {
    let credentials = Credentials::load(&ctx.credentials)?;
    let view = credentials.view().to_string();
    let authenticator = Authenticator::new(credentials);

    let zone = resolve_zone(authenticator.client(), &args.domain, &view).await?;
    println!("{zone}");

    Ok(())
}
