//! CLI command implementations

mod browse;
mod config_gen;
mod list;
mod stats;

pub use browse::browse_places;
pub use config_gen::generate_config;
pub use list::{ListArgs, list_entity};
pub use stats::print_stats;
