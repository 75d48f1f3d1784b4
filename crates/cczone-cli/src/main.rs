//! cczone - is this website hosted on Clever Cloud?
//!
//! Classifies hostnames and URLs, and reports the deployment zone serving them.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cczone_cli::run().await
}
