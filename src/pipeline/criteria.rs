//! Field-level constraints
//!
//! Each constraint is a pure predicate over one field. An empty constraint
//! matches everything, and unparseable bounds widen to "unbounded" instead of
//! failing.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::{DotPlaceError, Result};

/// Calendar-day format every date constraint compares in
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Values that disable an enum constraint
const ALL_SENTINELS: [&str; 3] = ["", "all", "전체"];

/// Case-insensitive substring containment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: Option<String>,
}

impl TextQuery {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        Self {
            needle: (!raw.is_empty()).then(|| raw.to_lowercase()),
        }
    }

    /// Like [`TextQuery::new`] but ignores surrounding whitespace, as the
    /// edit dialogs do for their search boxes
    pub fn trimmed(raw: impl AsRef<str>) -> Self {
        Self::new(raw.as_ref().trim())
    }

    pub fn from_opt(raw: Option<&str>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn matches(&self, value: &str) -> bool {
        match &self.needle {
            Some(needle) => value.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// True when any of `values` contains the query
    pub fn matches_any(&self, values: &[&str]) -> bool {
        !self.is_active() || values.iter().any(|v| self.matches(v))
    }
}

/// Inclusive numeric range parsed from free-form text bounds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CountRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl CountRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Empty or non-numeric bounds mean "unbounded on that side"
    pub fn parse(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: min.and_then(parse_bound),
            max: max.and_then(parse_bound),
        }
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, value: u32) -> bool {
        let value = f64::from(value);
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// How a date constraint is read off the query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// 일일조회: one calendar day
    #[default]
    Daily,
    /// 범위조회: inclusive start/end, either side optional
    Range,
    /// No date constraint at all
    All,
}

impl FromStr for QueryMode {
    type Err = DotPlaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "daily" => Ok(Self::Daily),
            "range" => Ok(Self::Range),
            "all" => Ok(Self::All),
            other => Err(DotPlaceError::validation(format!(
                "Unknown query mode: '{}'. Valid: daily, range, all",
                other
            ))),
        }
    }
}

/// Calendar-day constraint compared as `YYYY-MM-DD` strings
///
/// The fixed-width zero-padded format makes lexical order equal to
/// chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateQuery {
    #[default]
    All,
    Daily(Option<String>),
    Range {
        start: Option<String>,
        end: Option<String>,
    },
}

impl DateQuery {
    pub fn daily(day: Option<&str>) -> Self {
        Self::Daily(day.and_then(normalize_day))
    }

    pub fn range(start: Option<&str>, end: Option<&str>) -> Self {
        Self::Range {
            start: start.and_then(normalize_day),
            end: end.and_then(normalize_day),
        }
    }

    /// Builds the constraint selected by `mode`, ignoring the fields the
    /// mode does not read
    pub fn from_mode(
        mode: QueryMode,
        day: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Self {
        match mode {
            QueryMode::Daily => Self::daily(day),
            QueryMode::Range => Self::range(start, end),
            QueryMode::All => Self::All,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::All => false,
            Self::Daily(day) => day.is_some(),
            Self::Range { start, end } => start.is_some() || end.is_some(),
        }
    }

    pub fn contains_day(&self, day: &str) -> bool {
        match self {
            Self::All => true,
            Self::Daily(None) => true,
            Self::Daily(Some(target)) => day == target,
            Self::Range { start, end } => {
                start.as_deref().is_none_or(|s| day >= s) && end.as_deref().is_none_or(|e| day <= e)
            }
        }
    }

    pub fn contains(&self, at: &NaiveDateTime) -> bool {
        if !self.is_active() {
            return true;
        }
        self.contains_day(&at.format(DAY_FORMAT).to_string())
    }
}

/// Re-formats a day string so lexical comparison stays chronological;
/// blank or malformed input yields no bound
fn normalize_day(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DAY_FORMAT)
        .ok()
        .map(|day| day.format(DAY_FORMAT).to_string())
}

/// Exact-match enum constraint with an "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> Choice<T> {
    /// Parses a select value; the sentinels `""`, `all` and `전체` disable
    /// the constraint
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw.map(str::trim) else {
            return Ok(Self::All);
        };
        if ALL_SENTINELS.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
            return Ok(Self::All);
        }
        raw.parse::<T>()
            .map(Self::Only)
            .map_err(|_| DotPlaceError::validation(format!("Unknown filter value: '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Section;

    #[test]
    fn test_text_query_case_insensitive() {
        let q = TextQuery::new("pc-0");
        assert!(q.matches("PC-001"));
        assert!(!q.matches("PC-100"));
        assert!(TextQuery::new("").matches("anything"));
        assert!(!TextQuery::new("").is_active());
    }

    #[test]
    fn test_text_query_trimmed() {
        assert!(!TextQuery::trimmed("   ").is_active());
        assert!(TextQuery::trimmed(" 서울 ").matches("서울"));
        // untrimmed queries keep their spaces
        assert!(!TextQuery::new(" 서울 ").matches("서울"));
    }

    #[test]
    fn test_text_query_matches_any() {
        let q = TextQuery::new("커피");
        assert!(q.matches_any(&["서울", "커피"]));
        assert!(!q.matches_any(&["서울", "피자"]));
        assert!(TextQuery::default().matches_any(&[]));
    }

    #[test]
    fn test_count_range_inclusive() {
        let r = CountRange::parse(Some("10"), Some("20"));
        assert!(r.contains(10));
        assert!(r.contains(20));
        assert!(!r.contains(9));
        assert!(!r.contains(21));
    }

    #[test]
    fn test_count_range_malformed_is_unbounded() {
        let malformed = CountRange::parse(Some("abc"), None);
        let empty = CountRange::parse(Some(""), None);
        assert_eq!(malformed, empty);
        assert!(!malformed.is_active());
        assert!(malformed.contains(0));
        assert!(CountRange::parse(Some("NaN"), Some("inf")).contains(u32::MAX));
    }

    #[test]
    fn test_count_range_fractional_bound() {
        let r = CountRange::parse(Some("12.5"), None);
        assert!(!r.contains(12));
        assert!(r.contains(13));
    }

    #[test]
    fn test_query_mode_parse() {
        assert_eq!("range".parse::<QueryMode>().unwrap(), QueryMode::Range);
        assert_eq!("".parse::<QueryMode>().unwrap(), QueryMode::Daily);
        assert!("weekly".parse::<QueryMode>().is_err());
    }

    #[test]
    fn test_daily_query() {
        let q = DateQuery::daily(Some("2025-09-01"));
        assert!(q.contains_day("2025-09-01"));
        assert!(!q.contains_day("2025-08-31"));
        assert!(!DateQuery::daily(Some("")).is_active());
    }

    #[test]
    fn test_range_query_open_ends() {
        let start_only = DateQuery::range(Some("2025-08-30"), None);
        assert!(start_only.contains_day("2025-09-15"));
        assert!(!start_only.contains_day("2025-08-29"));

        let end_only = DateQuery::range(None, Some("2025-08-30"));
        assert!(end_only.contains_day("2025-08-30"));
        assert!(!end_only.contains_day("2025-08-31"));

        assert!(!DateQuery::range(None, None).is_active());
    }

    #[test]
    fn test_malformed_day_is_no_bound() {
        assert_eq!(DateQuery::range(Some("yesterday"), None), DateQuery::range(None, None));
    }

    #[test]
    fn test_day_is_zero_padded() {
        let q = DateQuery::daily(Some("2025-9-1"));
        assert_eq!(q, DateQuery::Daily(Some("2025-09-01".to_string())));
    }

    #[test]
    fn test_contains_timestamp() {
        let at = NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert!(DateQuery::daily(Some("2025-09-01")).contains(&at));
        assert!(DateQuery::All.contains(&at));
    }

    #[test]
    fn test_from_mode_ignores_other_fields() {
        let q = DateQuery::from_mode(QueryMode::All, Some("2025-09-01"), None, None);
        assert_eq!(q, DateQuery::All);
        let q = DateQuery::from_mode(QueryMode::Range, Some("2025-09-01"), None, None);
        assert!(!q.is_active());
    }

    #[test]
    fn test_choice_sentinels() {
        for raw in [None, Some(""), Some("all"), Some("ALL"), Some("전체")] {
            assert_eq!(Choice::<Section>::parse(raw).unwrap(), Choice::All);
        }
        assert_eq!(
            Choice::<Section>::parse(Some("월보장")).unwrap(),
            Choice::Only(Section::MonthlyGuarantee)
        );
        assert!(Choice::<Section>::parse(Some("bogus")).is_err());
    }

    #[test]
    fn test_choice_matches() {
        let c = Choice::Only(Section::Slot);
        assert!(c.matches(&Section::Slot));
        assert!(!c.matches(&Section::Unclassified));
        assert!(Choice::<Section>::All.matches(&Section::Unclassified));
    }
}
