use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::get_config;
use crate::services::DashboardService;
use crate::session::Session;

/// Operator shown as logged in when the login gate is off
pub const UNGATED_OPERATOR: &str = "operator@localhost";

pub struct StartupContext {
    pub service: Arc<DashboardService>,
    pub session: Arc<Session>,
    pub route_config: RouteConfig,
}

#[derive(Clone, Debug)]
pub struct RouteConfig {
    pub admin_prefix: String,
    pub health_prefix: String,
}

/// Generates the dataset and the session the server shares across workers
pub fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();
    let service = DashboardService::from_config(&config.dataset)
        .context("Failed to generate dashboard dataset")?;

    let session = if config.auth.require_login {
        Session::new()
    } else {
        warn!(
            "Login gate disabled (auth.require_login = false), API is open as {}",
            UNGATED_OPERATOR
        );
        Session::logged_in(UNGATED_OPERATOR)
    };

    let route_config = RouteConfig {
        admin_prefix: config.routes.admin_prefix.clone(),
        health_prefix: config.routes.health_prefix.clone(),
    };
    info!(
        "Admin API at {}/v1, health at {}",
        route_config.admin_prefix, route_config.health_prefix
    );

    debug!("Pre-startup finished in {:?}", start_time.elapsed());
    Ok(StartupContext {
        service: Arc::new(service),
        session: Arc::new(session),
        route_config,
    })
}
