//! Nova CLI binary entry point.

use anyhow::Result;
use clap::Parser;
use nova_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();
    cli.run().await
}
