//! Service layer shared by the HTTP API and the CLI

mod dashboard_service;

pub use dashboard_service::*;
