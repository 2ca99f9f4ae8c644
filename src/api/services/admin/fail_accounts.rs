//! Failed-login record endpoints

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{info, trace};

use crate::data::FailType;
use crate::errors::DotPlaceError;
use crate::pipeline::{Choice, DateQuery, FailAccountCriteria, TextQuery};
use crate::services::DashboardService;

use super::error_code::ErrorCode;
use super::helpers::{
    error_from_dotplace, error_response, error_with_code, page_number, page_size,
    paginated_response, success_response,
};
use super::types::{BatchRemoveRequest, FailAccountsQuery};

fn criteria_from_query(query: &FailAccountsQuery) -> Result<FailAccountCriteria, DotPlaceError> {
    Ok(FailAccountCriteria {
        pc: TextQuery::from_opt(query.pc.as_deref()),
        account: TextQuery::from_opt(query.account.as_deref()),
        date: DateQuery::range(query.date_from.as_deref(), query.date_to.as_deref()),
        fail_type: Choice::<FailType>::parse(query.fail_type.as_deref())?,
    })
}

/// GET /fail-accounts
pub async fn get_fail_accounts(
    query: web::Query<FailAccountsQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    trace!("Admin API: fail records with {:?}", query);
    let criteria = match criteria_from_query(&query) {
        Ok(c) => c,
        Err(e) => return Ok(error_from_dotplace(&e)),
    };
    let page = service.fail_accounts(
        &criteria,
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    Ok(paginated_response(page))
}

/// DELETE /fail-accounts/{id}
pub async fn delete_fail_account(
    path: web::Path<String>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    Ok(match service.remove_fail_account(&id) {
        Ok(item) => success_response(item),
        Err(e @ DotPlaceError::NotFound(_)) => {
            error_with_code(&e, ErrorCode::FailAccountNotFound)
        }
        Err(e) => error_from_dotplace(&e),
    })
}

/// DELETE /fail-accounts with `{ "ids": [...] }`
pub async fn batch_delete_fail_accounts(
    body: web::Json<BatchRemoveRequest>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<impl Responder> {
    if body.ids.is_empty() {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::FailAccountBatchEmpty,
            "ids must not be empty",
        ));
    }
    let result = service.remove_fail_accounts(&body.ids);
    info!(
        "Admin API: batch delete removed {}, missing {}",
        result.removed.len(),
        result.not_found.len()
    );
    Ok(success_response(result))
}
