//! Record types held by the dashboard pages
//!
//! Every collection lives only in process memory: generated once when the
//! service starts, optionally trimmed or edited, dropped at shutdown.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use ts_rs::TS;

/// Output path for the generated TypeScript bindings
pub const TS_EXPORT_PATH: &str = "../dashboard/src/services/types.generated.ts";

/// Length of the per-place statistics series
pub const STATS_DAYS: usize = 7;

/// Record with a key that is unique inside its collection
pub trait Keyed {
    fn key(&self) -> &str;
}

/// 구분: how a place listing is billed
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
#[strum(ascii_case_insensitive)]
pub enum Section {
    #[serde(rename = "미분류", alias = "unclassified")]
    #[strum(to_string = "미분류", serialize = "unclassified")]
    Unclassified,
    #[serde(rename = "월보장", alias = "monthly-guarantee")]
    #[strum(to_string = "월보장", serialize = "monthly-guarantee")]
    MonthlyGuarantee,
    #[serde(rename = "슬롯", alias = "slot")]
    #[strum(to_string = "슬롯", serialize = "slot")]
    Slot,
}

/// Health of a worker PC at its last check
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
#[strum(ascii_case_insensitive)]
pub enum PcStatus {
    #[serde(rename = "정상", alias = "normal")]
    #[strum(to_string = "정상", serialize = "normal")]
    Normal,
    #[serde(rename = "오류", alias = "error")]
    #[strum(to_string = "오류", serialize = "error")]
    Error,
    #[serde(rename = "오프라인", alias = "offline")]
    #[strum(to_string = "오프라인", serialize = "offline")]
    Offline,
}

/// How a failed login was recorded
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
#[strum(ascii_case_insensitive)]
pub enum FailType {
    #[serde(rename = "자동", alias = "automatic")]
    #[strum(to_string = "자동", serialize = "automatic")]
    Automatic,
    #[serde(rename = "수동", alias = "manual")]
    #[strum(to_string = "수동", serialize = "manual")]
    Manual,
    #[serde(rename = "시스템", alias = "system")]
    #[strum(to_string = "시스템", serialize = "system")]
    System,
}

/// One row of the place listing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PlaceRow {
    pub section: Section,
    pub keyword: String,
    pub place: String,
    pub pid: String,
    pub stats7d: [u32; STATS_DAYS],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PcInfo {
    pub name: String,
    pub last_checked_at: NaiveDateTime,
    pub status: PcStatus,
    pub job_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct AccountInfo {
    pub account_id: String,
    pub job_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct PlaceInfo {
    pub place_name: String,
    pub place_key: String,
    pub job_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct KeywordInfo {
    pub keyword: String,
    pub job_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct BlogUsage {
    pub url: String,
    pub access_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct FailAccountItem {
    pub id: String,
    pub pc_name: String,
    pub account_id: String,
    #[serde(rename = "type")]
    pub fail_type: FailType,
    pub date: NaiveDateTime,
}

/// Editable text file offered by the keyword/account edit dialogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct TextFile {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl Keyed for PlaceRow {
    fn key(&self) -> &str {
        &self.pid
    }
}

impl Keyed for PcInfo {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for AccountInfo {
    fn key(&self) -> &str {
        &self.account_id
    }
}

impl Keyed for PlaceInfo {
    fn key(&self) -> &str {
        &self.place_key
    }
}

impl Keyed for KeywordInfo {
    fn key(&self) -> &str {
        &self.keyword
    }
}

impl Keyed for BlogUsage {
    fn key(&self) -> &str {
        &self.url
    }
}

impl Keyed for FailAccountItem {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for TextFile {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_section_parses_label_and_slug() {
        assert_eq!(Section::from_str("월보장").unwrap(), Section::MonthlyGuarantee);
        assert_eq!(
            Section::from_str("monthly-guarantee").unwrap(),
            Section::MonthlyGuarantee
        );
        assert_eq!(Section::from_str("슬롯").unwrap(), Section::Slot);
        assert!(Section::from_str("태스트").is_err());
    }

    #[test]
    fn test_slugs_parse_in_any_case() {
        assert_eq!(PcStatus::from_str("Offline").unwrap(), PcStatus::Offline);
        assert_eq!(PcStatus::from_str("ERROR").unwrap(), PcStatus::Error);
        assert_eq!(
            Section::from_str("Monthly-Guarantee").unwrap(),
            Section::MonthlyGuarantee
        );
        assert_eq!(FailType::from_str("Manual").unwrap(), FailType::Manual);
    }

    #[test]
    fn test_enum_display_uses_korean_label() {
        assert_eq!(Section::Unclassified.to_string(), "미분류");
        assert_eq!(PcStatus::Offline.to_string(), "오프라인");
        assert_eq!(FailType::System.as_ref(), "시스템");
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&PcStatus::Error).unwrap();
        assert_eq!(json, "\"오류\"");
        let parsed: PcStatus = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(parsed, PcStatus::Offline);
    }

    #[test]
    fn test_fail_item_uses_type_field() {
        let item = FailAccountItem {
            id: "FA-0001".to_string(),
            pc_name: "PC-001".to_string(),
            account_id: "user001".to_string(),
            fail_type: FailType::Manual,
            date: chrono::NaiveDate::from_ymd_opt(2025, 9, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "수동");
        assert_eq!(value["date"], "2025-09-01T09:00:00");
    }

    #[test]
    fn test_enum_pools_have_three_members() {
        assert_eq!(Section::iter().count(), 3);
        assert_eq!(PcStatus::iter().count(), 3);
        assert_eq!(FailType::iter().count(), 3);
    }

    #[test]
    fn export_typescript_types() {
        let cfg = ts_rs::Config::default();
        // cargo test export_typescript_types -- --nocapture
        Section::export_all(&cfg).expect("Failed to export Section");
        PcStatus::export_all(&cfg).expect("Failed to export PcStatus");
        FailType::export_all(&cfg).expect("Failed to export FailType");
        PlaceRow::export_all(&cfg).expect("Failed to export PlaceRow");
        PcInfo::export_all(&cfg).expect("Failed to export PcInfo");
        AccountInfo::export_all(&cfg).expect("Failed to export AccountInfo");
        PlaceInfo::export_all(&cfg).expect("Failed to export PlaceInfo");
        KeywordInfo::export_all(&cfg).expect("Failed to export KeywordInfo");
        BlogUsage::export_all(&cfg).expect("Failed to export BlogUsage");
        FailAccountItem::export_all(&cfg).expect("Failed to export FailAccountItem");
        TextFile::export_all(&cfg).expect("Failed to export TextFile");

        println!("TypeScript types exported to {}", TS_EXPORT_PATH);
    }
}
