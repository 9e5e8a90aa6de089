use std::process::ExitCode;

use booking_engine::adapter::inbound::cli::command::{Cli, Commands};
use booking_engine::adapter::inbound::cli::config::load_config;
use booking_engine::adapter::inbound::cli::{check, list, run};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.command() {
        Commands::Check => match check::execute(cli.config.as_deref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Configuration invalid: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::List(args) => match list::execute(cli.config.as_deref(), &args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to list bookings: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Run => {
            let config = match load_config(cli.config.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to load config: {e}");
                    return ExitCode::FAILURE;
                }
            };

            config.init_logging();
            info!("bookingd starting");
            run::execute(&config).await;
            info!("bookingd stopped");
            ExitCode::SUCCESS
        }
    }
}
