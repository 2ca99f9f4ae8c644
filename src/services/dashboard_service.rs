//! Dashboard service
//!
//! Owns one collection per page, generated when the service is built and
//! held in memory until it is dropped. The HTTP handlers and the CLI both go
//! through this type, so filtering, ordering and paging behave the same on
//! either surface.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, info};
use ts_rs::TS;

use crate::config::DatasetConfig;
use crate::data::{
    AccountInfo, BlogUsage, FailAccountItem, KeywordInfo, Keyed, PcInfo, PlaceInfo, PlaceRow,
    Section, SeriesPoint, TS_EXPORT_PATH, TextFile, WorkloadBar, account_files,
    generate_account_data, generate_blog_usage_data, generate_fail_account_data_at,
    generate_keyword_data, generate_pc_data_at, generate_place_info_data, generation_anchor,
    keyword_files, place_rows_with_extra, rank_series, stats_from_pid, window_fits,
    window_start,
};
use crate::errors::{DotPlaceError, Result};
use crate::pipeline::{
    Criteria, FailAccountCriteria, FileCriteria, Page, PageSize, PcStatusCriteria, PlaceCriteria,
    SortOrder, TextQuery, Workload, WorkloadCriteria, filter, run_query,
};

// ============ Request/Response DTOs ============

/// Fields of a place row the operator types in; stats are derived from `pid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PlaceInput {
    pub section: Section,
    pub keyword: String,
    pub place: String,
    pub pid: String,
}

impl PlaceInput {
    fn into_row(self) -> Result<PlaceRow> {
        let pid = self.pid.trim().to_string();
        if pid.is_empty() {
            return Err(DotPlaceError::validation("PID must not be empty"));
        }
        Ok(PlaceRow {
            section: self.section,
            keyword: self.keyword.trim().to_string(),
            place: self.place.trim().to_string(),
            stats7d: stats_from_pid(&pid),
            pid,
        })
    }
}

/// Entry of the remove dialog's select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct RemovableOption {
    pub id: String,
    pub keyword: String,
    pub place: String,
}

/// Workload chart plus the filtered list shown beneath it
///
/// The chart always covers the whole collection; only the list follows the
/// criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadView<T> {
    pub chart: Vec<WorkloadBar>,
    pub list: Page<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct BatchRemoveResult {
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
}

/// Which edit dialog a text file belongs to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TS,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FileKind {
    #[strum(to_string = "keyword", serialize = "keywords")]
    Keyword,
    #[strum(to_string = "account", serialize = "accounts")]
    Account,
}

/// Collection sizes, for health checks and the CLI banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct DatasetSummary {
    pub place_rows: usize,
    pub pcs: usize,
    pub accounts: usize,
    pub place_infos: usize,
    pub keywords: usize,
    pub blogs: usize,
    pub fail_accounts: usize,
    pub keyword_files: usize,
    pub account_files: usize,
}

// ============ DashboardService Implementation ============

pub struct DashboardService {
    anchor: NaiveDateTime,
    place_rows: RwLock<Vec<PlaceRow>>,
    pcs: Vec<PcInfo>,
    accounts: Vec<AccountInfo>,
    place_infos: Vec<PlaceInfo>,
    keywords: Vec<KeywordInfo>,
    blogs: Vec<BlogUsage>,
    fail_accounts: RwLock<Vec<FailAccountItem>>,
    keyword_files: RwLock<Vec<TextFile>>,
    account_files: RwLock<Vec<TextFile>>,
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::generate(&DatasetConfig::default(), generation_anchor())
    }
}

impl DashboardService {
    /// Generates every collection from the dataset configuration
    pub fn from_config(dataset: &DatasetConfig) -> Result<Self> {
        let anchor = dataset.anchor_datetime()?;
        Ok(Self::generate(dataset, anchor))
    }

    fn generate(dataset: &DatasetConfig, anchor: NaiveDateTime) -> Self {
        let service = Self {
            anchor,
            place_rows: RwLock::new(place_rows_with_extra(dataset.extra_place_rows)),
            pcs: generate_pc_data_at(dataset.pcs, anchor),
            accounts: generate_account_data(dataset.accounts),
            place_infos: generate_place_info_data(dataset.place_infos),
            keywords: generate_keyword_data(dataset.keywords),
            blogs: generate_blog_usage_data(dataset.blogs),
            fail_accounts: RwLock::new(generate_fail_account_data_at(dataset.fail_accounts, anchor)),
            keyword_files: RwLock::new(keyword_files()),
            account_files: RwLock::new(account_files()),
        };
        info!(
            "DashboardService: generated datasets anchored at {}: {:?}",
            anchor,
            service.summary()
        );
        service
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            place_rows: self.place_rows.read().len(),
            pcs: self.pcs.len(),
            accounts: self.accounts.len(),
            place_infos: self.place_infos.len(),
            keywords: self.keywords.len(),
            blogs: self.blogs.len(),
            fail_accounts: self.fail_accounts.read().len(),
            keyword_files: self.keyword_files.read().len(),
            account_files: self.account_files.read().len(),
        }
    }

    // ============ Place listing ============

    /// Place rows matching `criteria`, ascending by pid
    pub fn places(&self, criteria: &PlaceCriteria, page: usize, size: PageSize) -> Page<PlaceRow> {
        let rows = self.place_rows.read();
        let result = run_query(rows.as_slice(), criteria, SortOrder::ByKey, page, size);
        debug!(
            "DashboardService: places page {} -> {} of {} rows",
            page,
            result.items.len(),
            result.total
        );
        result
    }

    /// Copy of every place row in insertion order
    pub fn place_rows(&self) -> Vec<PlaceRow> {
        self.place_rows.read().clone()
    }

    pub fn place(&self, pid: &str) -> Result<PlaceRow> {
        self.place_rows
            .read()
            .iter()
            .find(|row| row.pid == pid)
            .cloned()
            .ok_or_else(|| place_not_found(pid))
    }

    pub fn add_place(&self, input: PlaceInput) -> Result<PlaceRow> {
        let row = input.into_row()?;
        let mut rows = self.place_rows.write();
        if rows.iter().any(|r| r.pid == row.pid) {
            return Err(DotPlaceError::conflict(format!(
                "Place '{}' already exists",
                row.pid
            )));
        }
        rows.push(row.clone());
        info!("DashboardService: added place '{}'", row.pid);
        Ok(row)
    }

    /// Replaces the row stored under `pid` with the edited record
    ///
    /// The edit may change the pid itself, as long as the new one is not
    /// taken by another row.
    pub fn edit_place(&self, pid: &str, input: PlaceInput) -> Result<PlaceRow> {
        let row = input.into_row()?;
        let mut rows = self.place_rows.write();
        let pos = rows
            .iter()
            .position(|r| r.pid == pid)
            .ok_or_else(|| place_not_found(pid))?;
        if row.pid != pid && rows.iter().any(|r| r.pid == row.pid) {
            return Err(DotPlaceError::conflict(format!(
                "Place '{}' already exists",
                row.pid
            )));
        }
        rows[pos] = row.clone();
        info!("DashboardService: edited place '{}' -> '{}'", pid, row.pid);
        Ok(row)
    }

    pub fn remove_place(&self, pid: &str) -> Result<PlaceRow> {
        let mut rows = self.place_rows.write();
        let pos = rows
            .iter()
            .position(|r| r.pid == pid)
            .ok_or_else(|| place_not_found(pid))?;
        let removed = rows.remove(pos);
        info!("DashboardService: removed place '{}'", pid);
        Ok(removed)
    }

    /// Remove-dialog options whose keyword or place contains `query`
    /// (trimmed, case-insensitive), in pid order
    pub fn removable_places(&self, query: &str) -> Vec<RemovableOption> {
        let query = TextQuery::trimmed(query);
        let mut rows: Vec<RemovableOption> = self
            .place_rows
            .read()
            .iter()
            .filter(|row| query.matches_any(&[row.keyword.as_str(), row.place.as_str()]))
            .map(|row| RemovableOption {
                id: row.pid.clone(),
                keyword: row.keyword.clone(),
                place: row.place.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        rows
    }

    /// Rank chart for one place, ending on the anchor day by default
    pub fn place_series(
        &self,
        pid: &str,
        start: Option<NaiveDate>,
        days: usize,
    ) -> Result<Vec<SeriesPoint>> {
        let row = self.place(pid)?;
        let start = match start {
            Some(start) if !window_fits(start, days) => {
                return Err(DotPlaceError::date_parse(format!(
                    "Start date {} leaves no room for a {}-day window",
                    start, days
                )));
            }
            Some(start) => start,
            None => window_start(self.anchor.date(), days),
        };
        Ok(rank_series(&row.stats7d, start, days))
    }

    // ============ Dashboard ============

    pub fn pc_status(&self, criteria: &PcStatusCriteria, page: usize, size: PageSize) -> Page<PcInfo> {
        run_query(&self.pcs, criteria, SortOrder::Insertion, page, size)
    }

    pub fn pc_workload(
        &self,
        criteria: &WorkloadCriteria,
        page: usize,
        size: PageSize,
    ) -> WorkloadView<PcInfo> {
        workload_view(&self.pcs, criteria, page, size)
    }

    pub fn account_workload(
        &self,
        criteria: &WorkloadCriteria,
        page: usize,
        size: PageSize,
    ) -> WorkloadView<AccountInfo> {
        workload_view(&self.accounts, criteria, page, size)
    }

    pub fn blogs(&self, criteria: &WorkloadCriteria, page: usize, size: PageSize) -> Page<BlogUsage> {
        run_query(&self.blogs, criteria, SortOrder::Insertion, page, size)
    }

    pub fn place_infos(
        &self,
        criteria: &WorkloadCriteria,
        page: usize,
        size: PageSize,
    ) -> Page<PlaceInfo> {
        run_query(&self.place_infos, criteria, SortOrder::Insertion, page, size)
    }

    pub fn keywords(
        &self,
        criteria: &WorkloadCriteria,
        page: usize,
        size: PageSize,
    ) -> Page<KeywordInfo> {
        run_query(&self.keywords, criteria, SortOrder::Insertion, page, size)
    }

    // ============ Failed logins ============

    pub fn fail_accounts(
        &self,
        criteria: &FailAccountCriteria,
        page: usize,
        size: PageSize,
    ) -> Page<FailAccountItem> {
        let items = self.fail_accounts.read();
        run_query(items.as_slice(), criteria, SortOrder::Insertion, page, size)
    }

    pub fn remove_fail_account(&self, id: &str) -> Result<FailAccountItem> {
        let mut items = self.fail_accounts.write();
        let pos = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| DotPlaceError::not_found(format!("Fail record '{}' not found", id)))?;
        let removed = items.remove(pos);
        info!("DashboardService: removed fail record '{}'", id);
        Ok(removed)
    }

    /// Removes every listed id in one pass; unknown ids are reported, not
    /// treated as an error
    pub fn remove_fail_accounts(&self, ids: &[String]) -> BatchRemoveResult {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let mut items = self.fail_accounts.write();
        let mut removed = Vec::new();
        items.retain(|item| {
            let hit = wanted.contains(item.id.as_str());
            if hit {
                removed.push(item.id.clone());
            }
            !hit
        });

        let found: HashSet<&str> = removed.iter().map(String::as_str).collect();
        let mut not_found = Vec::new();
        let mut seen = HashSet::new();
        for id in ids {
            if !found.contains(id.as_str()) && seen.insert(id.as_str()) {
                not_found.push(id.clone());
            }
        }

        info!(
            "DashboardService: batch removed {} fail records ({} not found)",
            removed.len(),
            not_found.len()
        );
        BatchRemoveResult { removed, not_found }
    }

    // ============ Edit dialog files ============

    fn files_of(&self, kind: FileKind) -> &RwLock<Vec<TextFile>> {
        match kind {
            FileKind::Keyword => &self.keyword_files,
            FileKind::Account => &self.account_files,
        }
    }

    pub fn files(&self, kind: FileKind, criteria: &FileCriteria) -> Vec<TextFile> {
        filter(self.files_of(kind).read().as_slice(), criteria)
    }

    /// Stores edited content for one file
    pub fn apply_file(&self, kind: FileKind, id: &str, content: String) -> Result<TextFile> {
        let mut files = self.files_of(kind).write();
        let file = files
            .iter_mut()
            .find(|f| f.key() == id)
            .ok_or_else(|| DotPlaceError::not_found(format!("{} file '{}' not found", kind, id)))?;
        file.content = content;
        info!("DashboardService: applied {} file '{}'", kind, id);
        Ok(file.clone())
    }
}

fn place_not_found(pid: &str) -> DotPlaceError {
    DotPlaceError::not_found(format!("Place '{}' not found", pid))
}

fn workload_view<T>(
    records: &[T],
    criteria: &WorkloadCriteria,
    page: usize,
    size: PageSize,
) -> WorkloadView<T>
where
    T: Workload + Keyed + Clone,
    WorkloadCriteria: Criteria<T>,
{
    WorkloadView {
        chart: records
            .iter()
            .map(|r| WorkloadBar {
                label: r.label().to_string(),
                count: r.job_count(),
            })
            .collect(),
        list: run_query(records, criteria, SortOrder::Insertion, page, size),
    }
}
