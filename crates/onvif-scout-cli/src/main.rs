//! onvif-scout - find ONVIF cameras and other streaming devices.
//!
//! Sends a WS-Discovery probe to the local network and prints the devices
//! that answer within the receive window.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Discover(args) => {
            commands::run_discover(args, cli.config.as_deref(), cli.json, cli.strict).await
        }
        Commands::Probe(args) => commands::run_probe(args),
        Commands::LocalIp => commands::run_local_ip(cli.json),
        Commands::Snapshots(args) => commands::run_snapshots(args, cli.json).await,
    }
}
