//! Keyword/account edit dialog endpoints

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::errors::DotPlaceError;
use crate::pipeline::{FileCriteria, TextQuery};
use crate::services::{DashboardService, FileKind};

use super::error_code::ErrorCode;
use super::helpers::{error_from_dotplace, error_response, error_with_code, success_response};
use super::types::{FileQuery, FileUpdateRequest};

fn parse_kind(raw: &str) -> Result<FileKind, HttpResponse> {
    raw.parse::<FileKind>().map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::FileKindUnknown,
            &format!("Unknown file kind '{}'. Valid: keyword, account", raw),
        )
    })
}

/// GET /files/{kind}?query=
pub async fn get_files(
    path: web::Path<String>,
    query: web::Query<FileQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let kind = match parse_kind(&path) {
        Ok(kind) => kind,
        Err(resp) => return Ok(resp),
    };
    let criteria = FileCriteria {
        name: TextQuery::from_opt(query.query.as_deref()),
    };
    Ok(success_response(service.files(kind, &criteria)))
}

/// PUT /files/{kind}/{id}
pub async fn put_file(
    path: web::Path<(String, String)>,
    body: web::Json<FileUpdateRequest>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let (kind, id) = path.into_inner();
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(resp) => return Ok(resp),
    };
    Ok(
        match service.apply_file(kind, &id, body.into_inner().content) {
            Ok(file) => success_response(file),
            Err(e @ DotPlaceError::NotFound(_)) => error_with_code(&e, ErrorCode::FileNotFound),
            Err(e) => error_from_dotplace(&e),
        },
    )
}
