//! Chart-ready series derived from stored records

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::models::TS_EXPORT_PATH;

/// Longest window the place chart can request
pub const MAX_SERIES_DAYS: usize = 365;
/// Window the place chart opens with
pub const DEFAULT_SERIES_DAYS: usize = 30;

/// One day on the place rank chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct SeriesPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub rank: u32,
}

/// One bar of a workload chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct WorkloadBar {
    pub label: String,
    pub count: u32,
}

/// Spreads a short value cycle over `days` consecutive dates from `start`
///
/// Day `i` takes `values[i % values.len()]`, so a 7-day series repeats
/// weekly across longer windows. `days` is capped at [`MAX_SERIES_DAYS`];
/// an empty `values` slice yields no points. The series stops early at the
/// last representable date.
pub fn rank_series(values: &[u32], start: NaiveDate, days: usize) -> Vec<SeriesPoint> {
    if values.is_empty() {
        return Vec::new();
    }
    (0..days.min(MAX_SERIES_DAYS))
        .map_while(|i| {
            let date = start.checked_add_days(Days::new(i as u64))?;
            Some(SeriesPoint {
                date: date.format("%Y-%m-%d").to_string(),
                rank: values[i % values.len()],
            })
        })
        .collect()
}

/// Whether every day of a `days`-long window from `start` is a valid date
pub fn window_fits(start: NaiveDate, days: usize) -> bool {
    let span = days.clamp(1, MAX_SERIES_DAYS) as u64 - 1;
    start.checked_add_days(Days::new(span)).is_some()
}

/// First day of a `days`-long window that ends on `last`
pub fn window_start(last: NaiveDate, days: usize) -> NaiveDate {
    let span = days.clamp(1, MAX_SERIES_DAYS) as u64 - 1;
    last.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN)
}
