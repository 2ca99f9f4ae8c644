use crate::data::Keyed;

/// Ordering applied to a filtered listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Generation order, untouched
    #[default]
    Insertion,
    /// Ascending by unique key
    ByKey,
}

pub fn sort_records<T: Keyed>(records: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Insertion => {}
        SortOrder::ByKey => records.sort_by(|a, b| a.key().cmp(b.key())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{catalog_place_rows, generate_place_rows};

    #[test]
    fn test_by_key_sorts_pids() {
        let mut rows = generate_place_rows(3);
        rows.extend(catalog_place_rows());
        sort_records(&mut rows, SortOrder::ByKey);
        assert_eq!(rows[0].pid, "P1001");
        assert_eq!(rows[8].pid, "P2003");
    }

    #[test]
    fn test_insertion_keeps_order() {
        let mut rows = generate_place_rows(3);
        rows.extend(catalog_place_rows());
        let before = rows.clone();
        sort_records(&mut rows, SortOrder::Insertion);
        assert_eq!(rows, before);
    }
}
