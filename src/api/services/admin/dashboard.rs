//! Dashboard endpoints
//!
//! The PC status table is the only dashboard listing with a date filter.
//! Workload listings return a chart over the whole collection next to the
//! filtered page.

use actix_web::{HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::trace;

use crate::data::PcStatus;
use crate::errors::DotPlaceError;
use crate::pipeline::{
    Choice, CountRange, DateQuery, PcStatusCriteria, QueryMode, TextQuery, WorkloadCriteria,
};
use crate::services::DashboardService;

use super::helpers::{
    error_from_dotplace, page_number, page_size, paginated_response, success_response,
    workload_response,
};
use super::types::{PcStatusQuery, WorkloadQuery};

fn pc_status_criteria(query: &PcStatusQuery) -> Result<PcStatusCriteria, DotPlaceError> {
    let mode: QueryMode = query.mode.as_deref().unwrap_or("").parse()?;
    Ok(PcStatusCriteria {
        name: TextQuery::from_opt(query.name.as_deref()),
        checked: DateQuery::from_mode(
            mode,
            query.date.as_deref(),
            query.date_start.as_deref(),
            query.date_end.as_deref(),
        ),
        status: Choice::<PcStatus>::parse(query.status.as_deref())?,
    })
}

fn workload_criteria(query: &WorkloadQuery) -> WorkloadCriteria {
    WorkloadCriteria {
        label: TextQuery::from_opt(query.name.as_deref()),
        count: CountRange::parse(query.min_count.as_deref(), query.max_count.as_deref()),
    }
}

/// GET /dashboard/pcs
pub async fn get_pc_status(
    query: web::Query<PcStatusQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    trace!("Admin API: PC status with {:?}", query);
    let criteria = match pc_status_criteria(&query) {
        Ok(c) => c,
        Err(e) => return Ok(error_from_dotplace(&e)),
    };
    let page = service.pc_status(
        &criteria,
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    Ok(paginated_response(page))
}

/// GET /dashboard/pcs/workload
pub async fn get_pc_workload(
    query: web::Query<WorkloadQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let view = service.pc_workload(
        &workload_criteria(&query),
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    Ok(workload_response(view.chart, view.list))
}

/// GET /dashboard/accounts/workload
pub async fn get_account_workload(
    query: web::Query<WorkloadQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let view = service.account_workload(
        &workload_criteria(&query),
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    Ok(workload_response(view.chart, view.list))
}

/// GET /dashboard/blogs
pub async fn get_blogs(
    query: web::Query<WorkloadQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let page = service.blogs(
        &workload_criteria(&query),
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    Ok(paginated_response(page))
}

/// GET /dashboard/place-infos
pub async fn get_place_infos(
    query: web::Query<WorkloadQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let page = service.place_infos(
        &workload_criteria(&query),
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    Ok(paginated_response(page))
}

/// GET /dashboard/keywords
pub async fn get_keywords(
    query: web::Query<WorkloadQuery>,
    service: web::Data<Arc<DashboardService>>,
) -> ActixResult<HttpResponse> {
    let page = service.keywords(
        &workload_criteria(&query),
        page_number(query.page),
        page_size(query.page_size.as_deref()),
    );
    Ok(paginated_response(page))
}

/// GET /dashboard/summary
pub async fn get_summary(service: web::Data<Arc<DashboardService>>) -> ActixResult<HttpResponse> {
    Ok(success_response(service.summary()))
}
