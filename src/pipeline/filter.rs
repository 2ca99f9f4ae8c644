//! Record-level criteria
//!
//! A criteria value is the conjunction of its field constraints. Filtering
//! never reorders: the result is the input with non-matching records removed.

use crate::data::{
    AccountInfo, BlogUsage, FailAccountItem, FailType, KeywordInfo, PcInfo, PcStatus, PlaceInfo,
    PlaceRow, Section, TextFile,
};

use super::criteria::{Choice, CountRange, DateQuery, TextQuery};

pub trait Criteria<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Criteria that admits every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCriteria;

impl<T> Criteria<T> for NoCriteria {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

/// Keeps the records `criteria` admits, in input order
pub fn filter<T, C>(records: &[T], criteria: &C) -> Vec<T>
where
    T: Clone,
    C: Criteria<T> + ?Sized,
{
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Place listing criteria
///
/// `search` matches when keyword, place or pid contains it; the other text
/// fields each constrain their own column.
#[derive(Debug, Clone, Default)]
pub struct PlaceCriteria {
    pub search: TextQuery,
    pub keyword: TextQuery,
    pub place: TextQuery,
    pub pid: TextQuery,
    pub section: Choice<Section>,
}

impl Criteria<PlaceRow> for PlaceCriteria {
    fn matches(&self, row: &PlaceRow) -> bool {
        self.search
            .matches_any(&[row.keyword.as_str(), row.place.as_str(), row.pid.as_str()])
            && self.keyword.matches(&row.keyword)
            && self.place.matches(&row.place)
            && self.pid.matches(&row.pid)
            && self.section.matches(&row.section)
    }
}

/// PC status table criteria
#[derive(Debug, Clone, Default)]
pub struct PcStatusCriteria {
    pub name: TextQuery,
    pub checked: DateQuery,
    pub status: Choice<PcStatus>,
}

impl Criteria<PcInfo> for PcStatusCriteria {
    fn matches(&self, pc: &PcInfo) -> bool {
        self.name.matches(&pc.name)
            && self.checked.contains(&pc.last_checked_at)
            && self.status.matches(&pc.status)
    }
}

/// Record with a display label and a job count
pub trait Workload {
    fn label(&self) -> &str;
    fn job_count(&self) -> u32;
}

impl Workload for PcInfo {
    fn label(&self) -> &str {
        &self.name
    }

    fn job_count(&self) -> u32 {
        self.job_count
    }
}

impl Workload for AccountInfo {
    fn label(&self) -> &str {
        &self.account_id
    }

    fn job_count(&self) -> u32 {
        self.job_count
    }
}

impl Workload for PlaceInfo {
    fn label(&self) -> &str {
        &self.place_name
    }

    fn job_count(&self) -> u32 {
        self.job_count
    }
}

impl Workload for KeywordInfo {
    fn label(&self) -> &str {
        &self.keyword
    }

    fn job_count(&self) -> u32 {
        self.job_count
    }
}

impl Workload for BlogUsage {
    fn label(&self) -> &str {
        &self.url
    }

    fn job_count(&self) -> u32 {
        self.access_count
    }
}

/// Label substring plus inclusive count range, shared by every workload list
#[derive(Debug, Clone, Default)]
pub struct WorkloadCriteria {
    pub label: TextQuery,
    pub count: CountRange,
}

impl<T: Workload> Criteria<T> for WorkloadCriteria {
    fn matches(&self, record: &T) -> bool {
        self.label.matches(record.label()) && self.count.contains(record.job_count())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FailAccountCriteria {
    pub pc: TextQuery,
    pub account: TextQuery,
    pub date: DateQuery,
    pub fail_type: Choice<FailType>,
}

impl Criteria<FailAccountItem> for FailAccountCriteria {
    fn matches(&self, item: &FailAccountItem) -> bool {
        self.pc.matches(&item.pc_name)
            && self.account.matches(&item.account_id)
            && self.date.contains(&item.date)
            && self.fail_type.matches(&item.fail_type)
    }
}

/// File-name search used by the keyword/account edit dialogs
#[derive(Debug, Clone, Default)]
pub struct FileCriteria {
    pub name: TextQuery,
}

impl Criteria<TextFile> for FileCriteria {
    fn matches(&self, file: &TextFile) -> bool {
        self.name.matches(&file.name)
    }
}
