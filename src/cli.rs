//! Command-line interface definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// dotplace - 1DOT PLACE MANAGEMENT back office
#[derive(Parser, Debug)]
#[command(name = "dotplace")]
#[command(version)]
#[command(about = "Place management dashboard data service", long_about = None)]
pub struct Cli {
    /// Config file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Without a subcommand the HTTP server starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Collections `list` can print
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// Place listing rows
    Places,
    /// PC status table
    Pcs,
    /// PC workload list
    PcWorkload,
    /// Account workload list
    Accounts,
    /// Place job counts
    PlaceInfos,
    /// Keyword job counts
    Keywords,
    /// Blog usage
    Blogs,
    /// Failed-login records
    FailAccounts,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of a collection
    List {
        entity: Entity,

        /// Text search (keyword/place/pid for places, name/label elsewhere)
        #[arg(long)]
        search: Option<String>,

        /// Minimum job count, inclusive
        #[arg(long)]
        min: Option<String>,

        /// Maximum job count, inclusive
        #[arg(long)]
        max: Option<String>,

        /// Section for places (미분류, 월보장, 슬롯 or all)
        #[arg(long)]
        section: Option<String>,

        /// Account id search (failed logins)
        #[arg(long)]
        account: Option<String>,

        /// PC status (정상, 오류, 오프라인) or fail type (자동, 수동, 시스템)
        #[arg(long)]
        status: Option<String>,

        /// First day, YYYY-MM-DD (PCs and failed logins)
        #[arg(long)]
        from: Option<String>,

        /// Last day, YYYY-MM-DD (PCs and failed logins)
        #[arg(long)]
        to: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page or `all`
        #[arg(long)]
        page_size: Option<String>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the rank chart of one place
    Stats {
        pid: String,

        /// Window length in days
        #[arg(long)]
        days: Option<usize>,

        /// First day, YYYY-MM-DD (default: window ending on the anchor day)
        #[arg(long)]
        start: Option<String>,
    },

    /// Page through the place listing interactively
    Browse {
        #[arg(long)]
        page_size: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration as TOML
    Generate {
        /// Output path (default: config.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
