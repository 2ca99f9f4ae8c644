//! Page windows over an ordered listing
//!
//! Pages are 1-based. A page outside `1..=total_pages` is an empty window,
//! never an error.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::Serialize;

/// Default number of page buttons shown around the current page
pub const MAX_PAGE_BUTTONS: usize = 7;

/// Rows per page, or the whole listing on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(NonZeroUsize),
    All,
}

impl PageSize {
    /// `0` means "all rows"
    pub fn limited(size: usize) -> Self {
        NonZeroUsize::new(size).map_or(Self::All, Self::Limited)
    }

    /// Parses a page-size parameter
    ///
    /// `all` or `전체` selects every row. A positive number is capped at
    /// `max`; anything else falls back to `default`.
    pub fn parse(raw: Option<&str>, default: usize, max: usize) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::limited(default);
        };
        if raw.eq_ignore_ascii_case("all") || raw == "전체" {
            return Self::All;
        }
        match raw.parse::<usize>() {
            Ok(size) if size > 0 => Self::limited(size.min(max.max(1))),
            _ => Self::limited(default),
        }
    }

    /// Row count per page, `None` for [`PageSize::All`]
    pub fn rows(&self) -> Option<usize> {
        match self {
            Self::Limited(size) => Some(size.get()),
            Self::All => None,
        }
    }
}

/// `max(1, ceil(len / size))`
pub fn total_pages(len: usize, size: PageSize) -> usize {
    match size {
        PageSize::Limited(size) => len.div_ceil(size.get()).max(1),
        PageSize::All => 1,
    }
}

/// Index range of `page` inside a listing of `len` rows
pub fn page_window(len: usize, page: usize, size: PageSize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    match size {
        PageSize::All if page == 1 => 0..len,
        PageSize::All => 0..0,
        PageSize::Limited(size) => {
            let start = (page - 1).saturating_mul(size.get()).min(len);
            let end = start.saturating_add(size.get()).min(len);
            start..end
        }
    }
}

pub fn paginate<T: Clone>(records: &[T], page: usize, size: PageSize) -> Vec<T> {
    records[page_window(records.len(), page, size)].to_vec()
}

/// Keeps a page cursor inside `1..=total_pages`
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Contiguous page numbers to render as buttons
///
/// The window is centred on `current` and shifted at either edge so it
/// always holds `min(max_buttons, total)` pages. A single page has no
/// buttons.
pub fn page_buttons(current: usize, total: usize, max_buttons: usize) -> Vec<usize> {
    if total <= 1 || max_buttons == 0 {
        return Vec::new();
    }
    if total <= max_buttons {
        return (1..=total).collect();
    }
    let current = clamp_page(current, total);
    let start = current
        .saturating_sub(max_buttons / 2)
        .max(1)
        .min(total - max_buttons + 1);
    (start..start + max_buttons).collect()
}

/// One page of a listing plus the numbers needed to render its footer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    /// `None` when every row is on one page
    pub page_size: Option<usize>,
    pub total: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
}

impl<T: Clone> Page<T> {
    pub fn of(ordered: &[T], page: usize, size: PageSize) -> Self {
        let total_pages = total_pages(ordered.len(), size);
        Self {
            items: paginate(ordered, page, size),
            page,
            page_size: size.rows(),
            total: ordered.len(),
            total_pages,
            pages: page_buttons(page, total_pages, MAX_PAGE_BUTTONS),
        }
    }
}
