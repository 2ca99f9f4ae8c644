//! Filter → sort → paginate over in-memory collections
//!
//! - `criteria`: single-field constraints (text, count range, date, enum)
//! - `filter`: per-entity criteria and the [`filter`] function
//! - `sort`: key ordering
//! - `paginate`: page windows, page buttons and cursor clamping
//! - `view`: stateful [`TableView`] with page reset on criteria change

pub mod criteria;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

pub use criteria::{Choice, CountRange, DateQuery, QueryMode, TextQuery};
pub use filter::{
    Criteria, FailAccountCriteria, FileCriteria, NoCriteria, PcStatusCriteria, PlaceCriteria,
    Workload, WorkloadCriteria, filter,
};
pub use paginate::{Page, PageSize, clamp_page, page_buttons, paginate, total_pages};
pub use sort::{SortOrder, sort_records};
pub use view::TableView;

use crate::data::Keyed;

/// One pass of the pipeline: filter, order, then cut out `page`
pub fn run_query<T, C>(
    records: &[T],
    criteria: &C,
    order: SortOrder,
    page: usize,
    size: PageSize,
) -> Page<T>
where
    T: Keyed + Clone,
    C: Criteria<T> + ?Sized,
{
    let mut matched = filter(records, criteria);
    sort_records(&mut matched, order);
    Page::of(&matched, page, size)
}
