//! Deterministic dataset generators
//!
//! Each generator maps a record index onto its fields with modulo arithmetic
//! over fixed pools. The same `count` always produces the same records, and
//! unique keys are built from `index + 1` so they never collide.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::models::{
    AccountInfo, BlogUsage, FailAccountItem, FailType, KeywordInfo, PcInfo, PcStatus, PlaceInfo,
    PlaceRow, Section,
};
use super::seed::stats_from_pid;

const PC_STATUSES: [PcStatus; 3] = [PcStatus::Normal, PcStatus::Error, PcStatus::Offline];
const ROW_SECTIONS: [Section; 3] = [Section::MonthlyGuarantee, Section::Unclassified, Section::Slot];
const FAIL_TYPES: [FailType; 3] = [FailType::Automatic, FailType::Manual, FailType::System];

const KEYWORD_POOL: [&str; 8] = [
    "커피", "피자", "스시", "파스타", "라멘", "버거", "샐러드", "디저트",
];
const REGION_POOL: [&str; 8] = [
    "서울", "부산", "인천", "대구", "대전", "광주", "울산", "수원",
];
const PLACE_NAME_POOL: [&str; 8] = [
    "일닷 카페",
    "해운대 베이커리",
    "송도 피자",
    "동성로 스시",
    "둔산 파스타",
    "충장로 라멘",
    "삼산 버거",
    "광교 디저트",
];

/// Job count floor for PCs that are reachable
const ONLINE_JOB_FLOOR: u32 = 20;
/// PC checks are spread over the week before the anchor
const PC_CHECK_WINDOW_MINUTES: usize = 7 * 24 * 60;
/// Failed logins are spread over the 30 days before the anchor
const FAIL_WINDOW_HOURS: usize = 30 * 24;
/// Failed logins cycle over this many PCs and accounts
const FAIL_PC_POOL: usize = 12;
const FAIL_ACCOUNT_POOL: usize = 60;

/// Fixed reference instant used by every timestamp generator
pub fn generation_anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// `anchor - offset`, saturating at the earliest representable instant
fn earlier(anchor: NaiveDateTime, offset: Duration) -> NaiveDateTime {
    anchor.checked_sub_signed(offset).unwrap_or(NaiveDateTime::MIN)
}

/// Place rows `P2001..`, appended after the catalog rows
pub fn generate_place_rows(count: usize) -> Vec<PlaceRow> {
    (0..count)
        .map(|idx| {
            let n = idx + 1;
            let pid = format!("P2{:03}", n);
            PlaceRow {
                section: ROW_SECTIONS[n % ROW_SECTIONS.len()],
                keyword: format!("{}{}", KEYWORD_POOL[idx % KEYWORD_POOL.len()], n),
                place: REGION_POOL[idx % REGION_POOL.len()].to_string(),
                stats7d: stats_from_pid(&pid),
                pid,
            }
        })
        .collect()
}

pub fn generate_pc_data(count: usize) -> Vec<PcInfo> {
    generate_pc_data_at(count, generation_anchor())
}

/// PC status records checked within the week before `anchor`
///
/// Offline PCs keep the raw `idx * 17 % 200` job count; every other status
/// adds the online floor.
pub fn generate_pc_data_at(count: usize, anchor: NaiveDateTime) -> Vec<PcInfo> {
    (0..count)
        .map(|idx| {
            let status = PC_STATUSES[idx * 7 % PC_STATUSES.len()];
            let raw = (idx * 17 % 200) as u32;
            let job_count = match status {
                PcStatus::Offline => raw,
                PcStatus::Normal | PcStatus::Error => raw + ONLINE_JOB_FLOOR,
            };
            let minutes_ago = (idx * 97 % PC_CHECK_WINDOW_MINUTES) as i64;
            PcInfo {
                name: format!("PC-{:03}", idx + 1),
                last_checked_at: earlier(anchor, Duration::minutes(minutes_ago)),
                status,
                job_count,
            }
        })
        .collect()
}

pub fn generate_account_data(count: usize) -> Vec<AccountInfo> {
    (0..count)
        .map(|idx| AccountInfo {
            account_id: format!("user{:03}", idx + 1),
            job_count: (idx * 13 % 120) as u32 + 10,
        })
        .collect()
}

pub fn generate_place_info_data(count: usize) -> Vec<PlaceInfo> {
    (0..count)
        .map(|idx| {
            let n = idx + 1;
            PlaceInfo {
                place_name: format!("{} {}", PLACE_NAME_POOL[idx % PLACE_NAME_POOL.len()], n),
                place_key: format!("PK{}", 10_000 + n),
                job_count: (idx * 11 % 90) as u32 + 5,
            }
        })
        .collect()
}

pub fn generate_keyword_data(count: usize) -> Vec<KeywordInfo> {
    (0..count)
        .map(|idx| KeywordInfo {
            keyword: format!("{}{}", KEYWORD_POOL[idx % KEYWORD_POOL.len()], idx + 1),
            job_count: (idx * 19 % 160) as u32 + 1,
        })
        .collect()
}

pub fn generate_blog_usage_data(count: usize) -> Vec<BlogUsage> {
    (0..count)
        .map(|idx| BlogUsage {
            url: format!("https://blog.naver.com/dotplace{:03}", idx + 1),
            access_count: (idx * 23 % 500) as u32 + 3,
        })
        .collect()
}

pub fn generate_fail_account_data(count: usize) -> Vec<FailAccountItem> {
    generate_fail_account_data_at(count, generation_anchor())
}

/// Failed login records spread over the 30 days before `anchor`
pub fn generate_fail_account_data_at(count: usize, anchor: NaiveDateTime) -> Vec<FailAccountItem> {
    (0..count)
        .map(|idx| {
            let hours_ago = (idx * 5 % FAIL_WINDOW_HOURS) as i64;
            FailAccountItem {
                id: format!("FA-{:04}", idx + 1),
                pc_name: format!("PC-{:03}", idx % FAIL_PC_POOL + 1),
                account_id: format!("user{:03}", idx * 7 % FAIL_ACCOUNT_POOL + 1),
                fail_type: FAIL_TYPES[idx * 5 % FAIL_TYPES.len()],
                date: earlier(anchor, Duration::hours(hours_ago)),
            }
        })
        .collect()
}
