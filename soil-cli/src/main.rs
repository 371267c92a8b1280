//! Soil moisture report CLI - charts the readings written by the upstream
//! exporter.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "soil-report",
    version,
    about = "Soil moisture trend and drought/flood chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: soil_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    soil_cmd::run(cli.command)
}
