use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, trace};
use ts_rs::TS;

use crate::api::services::admin::{ApiResponse, ErrorCode, TS_EXPORT_PATH};
use crate::services::{DashboardService, DatasetSummary};

#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Seconds since startup
    pub uptime: u32,
    pub uptime_human: String,
    /// Anchor every generated timestamp is derived from
    pub anchor: String,
    pub dataset: DatasetSummary,
    pub response_time_ms: u32,
}

/// `1d 3h`, `2h 5m`, `4m`, `12s`
pub fn format_uptime(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    match (days, hours, minutes) {
        (0, 0, 0) => format!("{}s", seconds),
        (0, 0, m) => format!("{}m", m),
        (0, h, 0) => format!("{}h", h),
        (0, h, m) => format!("{}h {}m", h, m),
        (d, 0, _) => format!("{}d", d),
        (d, h, _) => format!("{}d {}h", d, h),
    }
}

/// Health Service
///
/// The dataset lives in memory, so the check reports collection sizes
/// instead of probing a backend.
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        service: web::Data<Arc<DashboardService>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0);

        let health_data = HealthResponse {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds as u32,
            uptime_human: format_uptime(uptime_seconds),
            anchor: service.anchor().to_string(),
            dataset: service.summary(),
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        info!(
            "Health check completed in {:?}, uptime: {}",
            start_time.elapsed(),
            health_data.uptime_human
        );

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ApiResponse {
                code: ErrorCode::Success as i32,
                message: "OK".to_string(),
                data: Some(health_data),
            })
    }

    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

pub fn health_routes() -> actix_web::Scope {
    web::scope("")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(12), "12s");
        assert_eq!(format_uptime(4 * 60 + 3), "4m");
        assert_eq!(format_uptime(2 * 3600), "2h");
        assert_eq!(format_uptime(2 * 3600 + 5 * 60), "2h 5m");
        assert_eq!(format_uptime(86_400 + 3 * 3600), "1d 3h");
        assert_eq!(format_uptime(-5), "0s");
    }

    #[test]
    fn export_health_types() {
        let cfg = ts_rs::Config::default();
        HealthResponse::export_all(&cfg).expect("Failed to export HealthResponse");
    }
}
