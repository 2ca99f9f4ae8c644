//! CLI interface module

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::errors::DotPlaceError;
use crate::services::DashboardService;
use commands::{ListArgs, browse_places, generate_config, list_entity, print_stats};

#[derive(Debug)]
pub enum CliError {
    ParseError(String),
    CommandError(String),
    ServiceError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::ServiceError(msg) => format!("Service error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::ServiceError(msg) => {
                format!("{} {}", "Service error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<DotPlaceError> for CliError {
    fn from(err: DotPlaceError) -> Self {
        match err {
            DotPlaceError::Validation(msg) | DotPlaceError::DateParse(msg) => {
                CliError::ParseError(msg)
            }
            other => CliError::ServiceError(other.format_simple()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::CommandError(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::CommandError(err.to_string())
    }
}

fn load_service() -> Result<DashboardService, CliError> {
    Ok(DashboardService::from_config(&get_config().dataset)?)
}

/// Runs one clap-parsed command against a freshly generated dataset
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::List {
            entity,
            search,
            min,
            max,
            section,
            account,
            status,
            from,
            to,
            page,
            page_size,
            json,
        } => list_entity(
            &load_service()?,
            ListArgs {
                entity: Some(entity),
                search,
                min,
                max,
                section,
                account,
                status,
                from,
                to,
                page,
                page_size,
                json,
            },
        ),

        Commands::Stats { pid, days, start } => print_stats(&load_service()?, &pid, days, start),

        Commands::Browse { page_size } => {
            let rows = load_service()?.place_rows();
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            browse_places(rows, page_size.as_deref(), stdin.lock(), stdout.lock())
        }

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => generate_config(output_path, force).await,
    }
}
