use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use super::structs::DEFAULT_CONFIG_PATH;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Current global configuration
///
/// Falls back to loading `config.toml` if [`init_config`] was never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()))
        .load_full()
}

/// Loads the configuration once from `config.toml`
pub fn init_config() {
    init_config_from(DEFAULT_CONFIG_PATH);
}

/// Loads the configuration once from `path`; later calls are no-ops
pub fn init_config_from(path: &str) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load_from(path)));
}

/// Replaces the global configuration
pub fn set_config(config: StaticConfig) {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .store(Arc::new(config));
}
