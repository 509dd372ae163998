//! Transit CLI - run the dashboard's GTFS queries from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "transit-cli",
    version,
    about = "Transit GTFS query toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: transit_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting transit-cli");
    transit_cmd::run(cli.command).await
}
