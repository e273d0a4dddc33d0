use anyhow::Context;
use clap::Parser;
use outlet_mapper::cli::{run, Cli};
use outlet_mapper::utils::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref()).context("failed to initialise logging")?;
    run(cli).await.context("outlet-mapper failed")
}
