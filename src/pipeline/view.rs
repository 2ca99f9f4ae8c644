//! Stateful table cursor
//!
//! Holds a collection, the active criteria and a page cursor. Changing the
//! criteria or page size sends the cursor back to page 1; page requests and
//! collection edits keep it inside `1..=total_pages`.

use crate::data::Keyed;

use super::filter::{Criteria, filter};
use super::paginate::{Page, PageSize, clamp_page, paginate, total_pages};
use super::sort::{SortOrder, sort_records};

#[derive(Debug, Clone)]
pub struct TableView<T, C> {
    records: Vec<T>,
    criteria: C,
    order: SortOrder,
    page_size: PageSize,
    page: usize,
    visible: Vec<T>,
}

impl<T, C> TableView<T, C>
where
    T: Keyed + Clone,
    C: Criteria<T>,
{
    pub fn new(records: Vec<T>, criteria: C, order: SortOrder, page_size: PageSize) -> Self {
        let mut view = Self {
            records,
            criteria,
            order,
            page_size,
            page: 1,
            visible: Vec::new(),
        };
        view.refresh();
        view
    }

    fn refresh(&mut self) {
        self.visible = filter(&self.records, &self.criteria);
        sort_records(&mut self.visible, self.order);
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: C) {
        self.criteria = criteria;
        self.refresh();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Moves the cursor, clamped to the current page range; returns the page
    /// actually selected
    pub fn go_to(&mut self, requested: usize) -> usize {
        self.page = clamp_page(requested, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len(), self.page_size)
    }

    /// Filtered and sorted rows across all pages
    pub fn filtered(&self) -> &[T] {
        &self.visible
    }

    pub fn current_rows(&self) -> Vec<T> {
        paginate(&self.visible, self.page, self.page_size)
    }

    pub fn current_page(&self) -> Page<T> {
        Page::of(&self.visible, self.page, self.page_size)
    }

    /// Drops the record with `key`; the cursor stays put unless its page
    /// disappeared
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let pos = self.records.iter().position(|r| r.key() == key)?;
        let removed = self.records.remove(pos);
        self.refresh();
        self.page = clamp_page(self.page, self.total_pages());
        Some(removed)
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Section, generate_fail_account_data, place_rows_with_extra};
    use crate::pipeline::criteria::{Choice, TextQuery};
    use crate::pipeline::filter::{FailAccountCriteria, PlaceCriteria};

    fn place_view() -> TableView<crate::data::PlaceRow, PlaceCriteria> {
        TableView::new(
            place_rows_with_extra(47),
            PlaceCriteria::default(),
            SortOrder::ByKey,
            PageSize::limited(10),
        )
    }

    #[test]
    fn test_view_paginates_fifty_three_rows() {
        let mut view = place_view();
        assert_eq!(view.total_pages(), 6);
        assert_eq!(view.go_to(6), 6);
        assert_eq!(view.current_rows().len(), 3);
        assert_eq!(view.go_to(7), 6);
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let mut view = place_view();
        view.go_to(4);
        view.set_criteria(PlaceCriteria {
            section: Choice::Only(Section::Slot),
            ..Default::default()
        });
        assert_eq!(view.page(), 1);
        assert!(view.filtered().iter().all(|r| r.section == Section::Slot));
    }

    #[test]
    fn test_prev_next_stay_in_range() {
        let mut view = place_view();
        assert_eq!(view.prev_page(), 1);
        for _ in 0..10 {
            view.next_page();
        }
        assert_eq!(view.page(), 6);
    }

    #[test]
    fn test_remove_clamps_cursor() {
        let items = generate_fail_account_data(11);
        let mut view = TableView::new(
            items,
            FailAccountCriteria::default(),
            SortOrder::Insertion,
            PageSize::limited(10),
        );
        assert_eq!(view.go_to(2), 2);
        assert!(view.remove("FA-0011").is_some());
        assert_eq!(view.page(), 1);
        assert!(view.remove("FA-9999").is_none());
    }

    #[test]
    fn test_rows_sorted_by_pid() {
        let mut view = place_view();
        view.set_criteria(PlaceCriteria {
            search: TextQuery::new("p1"),
            ..Default::default()
        });
        let pids: Vec<String> = view.current_rows().into_iter().map(|r| r.pid).collect();
        assert_eq!(pids, ["P1001", "P1002", "P1003", "P1004", "P1005", "P1006"]);
    }
}
