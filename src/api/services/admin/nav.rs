//! Navigation endpoint

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::trace;

use crate::navigation::{Route, nav_items};
use crate::session::Session;

use super::error_code::ErrorCode;
use super::helpers::{error_response, success_response};
use super::types::NavQuery;

/// GET /nav?route=/dashboard
///
/// Missing `route` means the home page.
pub async fn get_nav(
    query: web::Query<NavQuery>,
    session: web::Data<Arc<Session>>,
) -> ActixResult<HttpResponse> {
    let raw = query.route.as_deref().unwrap_or("/");
    let Ok(route) = raw.parse::<Route>() else {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            &format!("Unknown route: '{}'", raw),
        ));
    };

    let items = nav_items(route, session.is_authenticated());
    trace!("Admin API: {} nav items for {}", items.len(), route);
    Ok(success_response(items))
}
