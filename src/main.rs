use anyhow::{Context, Result};
use clap::Parser;

use dotplace::cli::Cli;
use dotplace::config::{DEFAULT_CONFIG_PATH, get_config, init_config_from};
use dotplace::runtime::modes::{Mode, detect_mode};
use dotplace::system::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH));

    let config = get_config();
    config.validate().context("Invalid configuration")?;

    match detect_mode(&cli) {
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = dotplace::runtime::modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }

        #[cfg(feature = "server")]
        Mode::Server => {
            let _guard = init_logging(&config).context("Failed to initialize logging")?;
            dotplace::runtime::modes::run_server().await
        }

        Mode::Unknown => {
            eprintln!("No execution mode available. Enable the 'server' or 'cli' feature.");
            std::process::exit(1);
        }
    }
}
