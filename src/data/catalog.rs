//! Fixed records every fresh dataset starts from

use super::generator::generate_place_rows;
use super::models::{PlaceRow, Section, TextFile};
use super::seed::stats_from_pid;

const CATALOG_ROWS: [(Section, &str, &str, &str); 6] = [
    (Section::MonthlyGuarantee, "커피", "서울", "P1001"),
    (Section::Unclassified, "베이커리", "부산", "P1002"),
    (Section::Slot, "피자", "인천", "P1003"),
    (Section::MonthlyGuarantee, "스시", "대구", "P1004"),
    (Section::MonthlyGuarantee, "파스타", "대전", "P1005"),
    (Section::Slot, "라멘", "광주", "P1006"),
];

const KEYWORD_FILES: [(&str, &str, &str); 5] = [
    ("kw-001", "keywords_cafe.txt", "카페\n커피\n디저트"),
    ("kw-002", "keywords_pizza.txt", "피자\n마르게리타\n포테이토"),
    ("kw-003", "keywords_sushi.txt", "스시\n사시미\n연어"),
    ("kw-004", "stopwords_common.txt", "그리고\n하지만\n또는"),
    ("kw-005", "replace_rules.txt", "강남->강남구\n홍대->마포구"),
];

const ACCOUNT_FILES: [(&str, &str, &str); 4] = [
    ("ac-001", "accounts_group_a.txt", "user001\nuser002\nuser003"),
    ("ac-002", "accounts_group_b.txt", "user101\nuser102\nuser103"),
    ("ac-003", "blocklist.txt", "spam_user\nbot_123"),
    ("ac-004", "replace_rules.txt", "admin->manager"),
];

/// The six hand-written place rows `P1001..P1006`
pub fn catalog_place_rows() -> Vec<PlaceRow> {
    CATALOG_ROWS
        .iter()
        .map(|(section, keyword, place, pid)| PlaceRow {
            section: *section,
            keyword: keyword.to_string(),
            place: place.to_string(),
            pid: pid.to_string(),
            stats7d: stats_from_pid(pid),
        })
        .collect()
}

/// Catalog rows followed by `extra` generated rows
pub fn place_rows_with_extra(extra: usize) -> Vec<PlaceRow> {
    let mut rows = catalog_place_rows();
    rows.extend(generate_place_rows(extra));
    rows
}

pub fn keyword_files() -> Vec<TextFile> {
    to_files(&KEYWORD_FILES)
}

pub fn account_files() -> Vec<TextFile> {
    to_files(&ACCOUNT_FILES)
}

fn to_files(presets: &[(&str, &str, &str)]) -> Vec<TextFile> {
    presets
        .iter()
        .map(|(id, name, content)| TextFile {
            id: id.to_string(),
            name: name.to_string(),
            content: content.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rows_in_order() {
        let rows = catalog_place_rows();
        let pids: Vec<&str> = rows.iter().map(|r| r.pid.as_str()).collect();
        assert_eq!(pids, ["P1001", "P1002", "P1003", "P1004", "P1005", "P1006"]);
        assert_eq!(rows[0].stats7d, stats_from_pid("P1001"));
    }

    #[test]
    fn test_extra_rows_follow_catalog() {
        let rows = place_rows_with_extra(50);
        assert_eq!(rows.len(), 56);
        assert_eq!(rows[5].pid, "P1006");
        assert_eq!(rows[6].pid, "P2001");
    }

    #[test]
    fn test_file_presets() {
        assert_eq!(keyword_files().len(), 5);
        assert_eq!(account_files()[2].name, "blocklist.txt");
    }
}
