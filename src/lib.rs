//! dotplace - 1DOT PLACE MANAGEMENT back office core
//!
//! Deterministic mock datasets for every dashboard page, plus the
//! filter → sort → paginate pipeline that serves them.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `data`: record types and the seeded generators
//! - `pipeline`: criteria, filtering, ordering, paging and the table cursor
//! - `services`: `DashboardService`, the shared in-memory state
//! - `session`: login state
//! - `navigation`: route × login state → header actions
//! - `api`: HTTP handlers and middleware
//! - `interfaces`: CLI commands
//! - `config`: configuration management
//! - `runtime`: execution modes and startup
//! - `system`: logging

#[cfg(feature = "server")]
pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod interfaces;
pub mod navigation;
pub mod pipeline;
pub mod runtime;
pub mod services;
pub mod session;
pub mod system;
