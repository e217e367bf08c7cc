//! nager-cli - Command line tool for querying the Nager.Date holiday service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "nager-cli",
    version,
    about = "Nager.Date public holiday toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: nager_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    nager_cmd::run(cli.command).await
}
