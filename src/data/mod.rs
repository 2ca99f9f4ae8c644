//! Dashboard datasets
//!
//! - `models`: record types and their enums
//! - `seed`: seed hashing for the 7-day place series
//! - `generator`: index-driven deterministic generators
//! - `catalog`: hand-written rows and edit-dialog file presets
//! - `series`: chart series built from stored values

pub mod catalog;
pub mod generator;
pub mod models;
pub mod seed;
pub mod series;

pub use catalog::{account_files, catalog_place_rows, keyword_files, place_rows_with_extra};
pub use generator::{
    generate_account_data, generate_blog_usage_data, generate_fail_account_data,
    generate_fail_account_data_at, generate_keyword_data, generate_pc_data, generate_pc_data_at,
    generate_place_info_data, generate_place_rows, generation_anchor,
};
pub use models::*;
pub use seed::{seed_from, stats_from_pid};
pub use series::{
    DEFAULT_SERIES_DAYS, MAX_SERIES_DAYS, SeriesPoint, WorkloadBar, rank_series, window_fits,
    window_start,
};
