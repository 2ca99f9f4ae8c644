//! Mode routing
//!
//! - Server mode (HTTP server)
//! - CLI mode (one command, then exit)

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "server")]
pub use server::run_server;

#[cfg(feature = "cli")]
pub use cli::run_cli;

use crate::cli::Cli;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "server")]
    Server,
    #[cfg(feature = "cli")]
    Cli,
    Unknown,
}

/// Picks the mode from the parsed command line
///
/// A subcommand selects CLI mode; none starts the server.
pub fn detect_mode(cli: &Cli) -> Mode {
    #[cfg(feature = "cli")]
    if cli.command.is_some() {
        return Mode::Cli;
    }

    #[cfg(feature = "server")]
    return Mode::Server;

    #[cfg(not(feature = "server"))]
    Mode::Unknown
}
