//! Server mode
//!
//! Builds the shared dashboard state and serves the admin and health APIs.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use tracing::warn;

use crate::api::middleware::SessionGate;
use crate::api::services::{AppStartTime, admin::routes::admin_v1_routes, health_routes};
use crate::config::{CorsConfig, get_config};
use crate::runtime::lifetime;

/// Upper bound for HTTP workers regardless of `server.cpu_count`
const MAX_WORKERS: usize = 32;

fn validate_cors_config(cors_config: &CorsConfig) {
    if cors_config.enabled && cors_config.allowed_origins.is_empty() {
        warn!(
            "CORS enabled with empty allowed_origins. \
            Any origin will be accepted; list origins explicitly to restrict it."
        );
    }
}

/// Builds CORS middleware from `[cors]`
///
/// Disabled keeps the browser's same-origin policy. Enabled with no
/// origins, or with `*`, accepts any origin.
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .allowed_header(actix_web::http::header::ACCEPT)
        .max_age(cors_config.max_age);

    let any_origin = cors_config.allowed_origins.is_empty()
        || cors_config.allowed_origins.iter().any(|o| o == "*");
    if any_origin {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}

/// Runs the HTTP server until it stops or Ctrl+C arrives
///
/// **Note**: logging must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_server_startup().map_err(|e| {
        tracing::error!("Server startup failed: {}", e);
        e
    })?;

    let service = startup.service.clone();
    let session = startup.session.clone();
    let admin_prefix = startup.route_config.admin_prefix;
    let health_prefix = startup.route_config.health_prefix;

    let config = get_config();
    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let cpu_count = config.server.cpu_count.clamp(1, MAX_WORKERS);
    warn!("Using {} CPU cores for the server", cpu_count);

    let server = HttpServer::new(move || {
        let cors = build_cors_middleware(&cors_config);

        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(session.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(1024 * 1024))
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .service(
                web::scope(&admin_prefix)
                    .wrap(SessionGate)
                    .service(admin_v1_routes()),
            )
            .service(web::scope(&health_prefix).service(health_routes()))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(startup.session.clone()) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
