//! Admin API request and response types

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::data::WorkloadBar;
use crate::pipeline::Page;

pub use crate::data::TS_EXPORT_PATH;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PaginatedResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

/// Workload listing: full-collection chart plus one page of the filtered list
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkloadResponse<T> {
    pub code: i32,
    pub message: String,
    pub chart: Vec<WorkloadBar>,
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PaginationInfo {
    pub page: usize,
    /// `null` when every row is on one page
    pub page_size: Option<usize>,
    pub total: usize,
    pub total_pages: usize,
    /// Page buttons to render; empty for a single page
    pub pages: Vec<usize>,
}

impl<T> From<&Page<T>> for PaginationInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            total_pages: page.total_pages,
            pages: page.pages.clone(),
        }
    }
}

/// 401 body while logged out
#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct LoginRedirect {
    pub redirect: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct NavQuery {
    pub route: Option<String>,
}

/// Paging parameters shared by every listing
///
/// `page_size` accepts a number or `all`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub page_size: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct GetPlacesQuery {
    /// Matches keyword, place or pid
    pub search: Option<String>,
    pub keyword: Option<String>,
    pub place: Option<String>,
    pub pid: Option<String>,
    /// Section label or slug; `all` for every section
    pub section: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct RemovableQuery {
    pub query: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct StatsQuery {
    pub days: Option<usize>,
    /// First day of the window, `YYYY-MM-DD`
    pub start: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PcStatusQuery {
    pub name: Option<String>,
    /// `daily` (default), `range` or `all`
    pub mode: Option<String>,
    pub date: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<String>,
}

/// Label search plus count range, used by every job-count listing
#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct WorkloadQuery {
    #[serde(alias = "account", alias = "url", alias = "keyword", alias = "query")]
    pub name: Option<String>,
    pub min_count: Option<String>,
    pub max_count: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct FailAccountsQuery {
    pub pc: Option<String>,
    pub account: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    #[serde(rename = "type")]
    pub fail_type: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct BatchRemoveRequest {
    pub ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct FileQuery {
    pub query: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct FileUpdateRequest {
    pub content: String,
}
