use serde::{Deserialize, Serialize};

use crate::errors::{DotPlaceError, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Static configuration (TOML file, then `DP__*` environment overrides)
///
/// - server: bind address and worker count
/// - logging: level, format and optional log file
/// - dataset: collection sizes generated at startup
/// - pagination: default and maximum page size
/// - auth: whether the API is gated behind the session
/// - routes: admin and health route prefixes
/// - cors: allowed origins for the dashboard renderer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl StaticConfig {
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Loads `path` (optional) and applies environment overrides
    ///
    /// Priority: ENV > file > defaults. Prefix `DP`, separator `__`,
    /// e.g. `DP__SERVER__PORT=9999`.
    pub fn load_from(path: &str) -> Self {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("DP")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# Error generating sample config: {}", e))
    }

    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Rejects values the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.pagination.default_page_size == 0 {
            return Err(DotPlaceError::config(
                "pagination.default_page_size must be positive",
            ));
        }
        if self.pagination.max_page_size < self.pagination.default_page_size {
            return Err(DotPlaceError::config(format!(
                "pagination.max_page_size ({}) is below default_page_size ({})",
                self.pagination.max_page_size, self.pagination.default_page_size
            )));
        }
        for (name, prefix) in [
            ("routes.admin_prefix", &self.routes.admin_prefix),
            ("routes.health_prefix", &self.routes.health_prefix),
        ] {
            if !prefix.starts_with('/') {
                return Err(DotPlaceError::config(format!(
                    "{} must start with '/': {}",
                    name, prefix
                )));
            }
        }
        self.dataset.anchor_datetime()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
    /// Rotated files kept on disk
    #[serde(default = "default_max_backups")]
    pub max_backups: usize,
}

/// Sizes of the collections generated when the service starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Generated place rows appended after the six catalog rows
    #[serde(default = "default_extra_place_rows")]
    pub extra_place_rows: usize,
    #[serde(default = "default_pc_count")]
    pub pcs: usize,
    #[serde(default = "default_account_count")]
    pub accounts: usize,
    #[serde(default = "default_place_info_count")]
    pub place_infos: usize,
    #[serde(default = "default_keyword_count")]
    pub keywords: usize,
    #[serde(default = "default_blog_count")]
    pub blogs: usize,
    #[serde(default = "default_fail_account_count")]
    pub fail_accounts: usize,
    /// Reference instant for generated timestamps, `YYYY-MM-DD HH:MM:SS`
    #[serde(default = "default_anchor")]
    pub anchor: String,
}

impl DatasetConfig {
    /// Parses `anchor`; the year must lie within [`ANCHOR_YEARS`]
    pub fn anchor_datetime(&self) -> Result<chrono::NaiveDateTime> {
        use chrono::Datelike;

        let anchor = chrono::NaiveDateTime::parse_from_str(self.anchor.trim(), ANCHOR_FORMAT)?;
        if !ANCHOR_YEARS.contains(&anchor.year()) {
            return Err(DotPlaceError::config(format!(
                "dataset.anchor year {} is outside {}..={}",
                anchor.year(),
                ANCHOR_YEARS.start(),
                ANCHOR_YEARS.end()
            )));
        }
        Ok(anchor)
    }
}

pub const ANCHOR_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const ANCHOR_YEARS: std::ops::RangeInclusive<i32> = 1970..=9999;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Answer 401 on every API route except `/auth/*` while logged out
    #[serde(default = "default_require_login")]
    pub require_login: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_admin_prefix")]
    pub admin_prefix: String,
    #[serde(default = "default_health_prefix")]
    pub health_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Empty means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_enable_rotation() -> bool {
    true
}

fn default_max_backups() -> usize {
    5
}

fn default_extra_place_rows() -> usize {
    50
}

fn default_pc_count() -> usize {
    37
}

fn default_account_count() -> usize {
    24
}

fn default_place_info_count() -> usize {
    40
}

fn default_keyword_count() -> usize {
    40
}

fn default_blog_count() -> usize {
    53
}

fn default_fail_account_count() -> usize {
    127
}

fn default_anchor() -> String {
    "2025-09-01 09:00:00".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_max_page_size() -> usize {
    100
}

fn default_require_login() -> bool {
    true
}

fn default_admin_prefix() -> String {
    "/admin".to_string()
}

fn default_health_prefix() -> String {
    "/health".to_string()
}

fn default_cors_max_age() -> usize {
    3600
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: default_enable_rotation(),
            max_backups: default_max_backups(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            extra_place_rows: default_extra_place_rows(),
            pcs: default_pc_count(),
            accounts: default_account_count(),
            place_infos: default_place_info_count(),
            keywords: default_keyword_count(),
            blogs: default_blog_count(),
            fail_accounts: default_fail_account_count(),
            anchor: default_anchor(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            require_login: default_require_login(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            admin_prefix: default_admin_prefix(),
            health_prefix: default_health_prefix(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}
