//! Admin API helpers

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::config::get_config;
use crate::data::WorkloadBar;
use crate::errors::DotPlaceError;
use crate::pipeline::{Page, PageSize};

use super::error_code::ErrorCode;
use super::types::{ApiResponse, PaginatedResponse, PaginationInfo, WorkloadResponse};

/// Builds a JSON response
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// Maps a [`DotPlaceError`] to its HTTP status and generic [`ErrorCode`]
pub fn error_from_dotplace(err: &DotPlaceError) -> HttpResponse {
    let status = err.http_status();
    let error_code = ErrorCode::from(err.clone());
    error_response(status, error_code, err.message())
}

/// Like [`error_from_dotplace`], with a domain code chosen by the caller
pub fn error_with_code(err: &DotPlaceError, code: ErrorCode) -> HttpResponse {
    error_response(err.http_status(), code, err.message())
}

/// One page of a listing with its footer numbers
pub fn paginated_response<T: Serialize>(page: Page<T>) -> HttpResponse {
    let pagination = PaginationInfo::from(&page);
    HttpResponse::Ok()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(PaginatedResponse {
            code: ErrorCode::Success as i32,
            message: "OK".to_string(),
            data: page.items,
            pagination,
        })
}

pub fn workload_response<T: Serialize>(chart: Vec<WorkloadBar>, list: Page<T>) -> HttpResponse {
    let pagination = PaginationInfo::from(&list);
    HttpResponse::Ok()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(WorkloadResponse {
            code: ErrorCode::Success as i32,
            message: "OK".to_string(),
            chart,
            data: list.items,
            pagination,
        })
}

/// Requested page, defaulting to 1
pub fn page_number(raw: Option<usize>) -> usize {
    raw.unwrap_or(1)
}

/// Page size from a query parameter, bounded by `[pagination]`
pub fn page_size(raw: Option<&str>) -> PageSize {
    let config = get_config();
    PageSize::parse(
        raw,
        config.pagination.default_page_size,
        config.pagination.max_page_size,
    )
}
