//! Admin API
//!
//! Endpoints behind `{admin_prefix}/v1`:
//! - session (login, logout, status)
//! - navigation actions
//! - place listing with add/edit/remove dialogs and rank chart
//! - dashboard tables and workload charts
//! - failed-login records
//! - keyword/account edit dialog files

pub mod auth;
mod dashboard;
pub mod error_code;
mod fail_accounts;
mod files;
mod helpers;
mod nav;
mod places;
pub mod routes;
mod types;

pub use types::*;

pub use helpers::{
    error_from_dotplace, error_response, json_response, paginated_response,
    success_response,
};

pub use error_code::ErrorCode;

pub use routes::admin_v1_routes;
