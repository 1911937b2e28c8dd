//! ddi-acme - DNS-01 hook runner for Infoblox Universal DDI.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    ddi_cli::run().await
}
