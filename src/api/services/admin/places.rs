//! Place listing endpoints: table, detail, edit form, add/remove dialogs, chart

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, trace, warn};

use crate::data::{DEFAULT_SERIES_DAYS, Section};
use crate::errors::DotPlaceError;
use crate::pipeline::{Choice, PlaceCriteria, TextQuery};
use crate::services::{DashboardService, PlaceInput};

use super::error_code::ErrorCode;
use super::helpers::{
    error_response, error_with_code, page_number, page_size, paginated_response,
    success_response,
};
use super::types::{GetPlacesQuery, RemovableQuery, StatsQuery};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Domain code for place failures
fn place_error(err: &DotPlaceError) -> HttpResponse {
    let code = match err {
        DotPlaceError::NotFound(_) => ErrorCode::PlaceNotFound,
        DotPlaceError::Conflict(_) => ErrorCode::PlaceAlreadyExists,
        DotPlaceError::Validation(_) => ErrorCode::PlaceInvalid,
        other => ErrorCode::from(other.clone()),
    };
    error_with_code(err, code)
}

fn criteria_from_query(query: &GetPlacesQuery) -> Result<PlaceCriteria, DotPlaceError> {
    Ok(PlaceCriteria {
        search: TextQuery::from_opt(query.search.as_deref()),
        keyword: TextQuery::from_opt(query.keyword.as_deref()),
        place: TextQuery::from_opt(query.place.as_deref()),
        pid: TextQuery::from_opt(query.pid.as_deref()),
        section: Choice::<Section>::parse(query.section.as_deref())?,
    })
}

/// GET /places
pub async fn get_places(
    query: web::Query<GetPlacesQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    trace!("Admin API: list places with {:?}", query);

    let criteria = match criteria_from_query(&query) {
        Ok(c) => c,
        Err(e) => return Ok(place_error(&e)),
    };
    let page = service.places(
        &criteria,
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    trace!(
        "Admin API: {} of {} places on page {}",
        page.items.len(),
        page.total,
        page.page
    );
    Ok(paginated_response(page))
}

/// GET /places/{pid}
pub async fn get_place(
    path: web::Path<String>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<impl Responder> {
    let pid = path.into_inner();
    Ok(match service.place(&pid) {
        Ok(row) => success_response(row),
        Err(e) => place_error(&e),
    })
}

/// POST /places
pub async fn post_place(
    body: web::Json<PlaceInput>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<impl Responder> {
    Ok(match service.add_place(body.into_inner()) {
        Ok(row) => {
            info!("Admin API: place '{}' added", row.pid);
            success_response(row)
        }
        Err(e) => {
            warn!("Admin API: add place failed: {}", e.message());
            place_error(&e)
        }
    })
}

/// PUT /places/{pid}
///
/// Replaces the whole row; the pid itself may change.
pub async fn put_place(
    path: web::Path<String>,
    body: web::Json<PlaceInput>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<impl Responder> {
    let pid = path.into_inner();
    Ok(match service.edit_place(&pid, body.into_inner()) {
        Ok(row) => success_response(row),
        Err(e) => {
            warn!("Admin API: edit place '{}' failed: {}", pid, e.message());
            place_error(&e)
        }
    })
}

/// DELETE /places/{pid}
pub async fn delete_place(
    path: web::Path<String>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<impl Responder> {
    let pid = path.into_inner();
    Ok(match service.remove_place(&pid) {
        Ok(row) => success_response(row),
        Err(e) => place_error(&e),
    })
}

/// GET /places/removable?query=
pub async fn get_removable(
    query: web::Query<RemovableQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<impl Responder> {
    let options = service.removable_places(query.query.as_deref().unwrap_or(""));
    Ok(success_response(options))
}

/// GET /places/{pid}/stats?days=&start=
pub async fn get_place_stats(
    path: web::Path<String>,
    query: web::Query<StatsQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let pid = path.into_inner();

    let start = match query.start.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match NaiveDate::parse_from_str(raw, DAY_FORMAT) {
            Ok(day) => Some(day),
            Err(_) => {
                return Ok(error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidDateFormat,
                    &format!("Invalid start date '{}', expected YYYY-MM-DD", raw),
                ));
            }
        },
        None => None,
    };
    let days = query.days.unwrap_or(DEFAULT_SERIES_DAYS);

    Ok(match service.place_series(&pid, start, days) {
        Ok(points) => success_response(points),
        Err(e) => place_error(&e),
    })
}
