//! Interactive place browser
//!
//! Commands, one per line:
//! - `n` / `p`: next / previous page
//! - a number: jump to that page
//! - `/text`: search keyword, place or pid (empty clears it)
//! - `s <section>`: filter by section (`all` clears it)
//! - `q`: quit

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::config::get_config;
use crate::data::{PlaceRow, Section};
use crate::interfaces::cli::CliError;
use crate::pipeline::{Choice, PageSize, PlaceCriteria, SortOrder, TableView, TextQuery};

pub fn browse_places<R: BufRead, W: Write>(
    rows: Vec<PlaceRow>,
    page_size: Option<&str>,
    input: R,
    mut output: W,
) -> Result<(), CliError> {
    let config = get_config();
    let size = PageSize::parse(
        page_size,
        config.pagination.default_page_size,
        config.pagination.max_page_size,
    );
    let mut view = TableView::new(rows, PlaceCriteria::default(), SortOrder::ByKey, size);

    render(&view, &mut output)?;
    for line in input.lines() {
        let line = line?;
        let cmd = line.trim();
        match cmd {
            "q" | "quit" => break,
            "n" => {
                view.next_page();
            }
            "p" => {
                view.prev_page();
            }
            _ if cmd.starts_with('/') => {
                let criteria = PlaceCriteria {
                    search: TextQuery::trimmed(&cmd[1..]),
                    ..view.criteria().clone()
                };
                view.set_criteria(criteria);
            }
            _ if cmd.starts_with("s ") => match Choice::<Section>::parse(Some(&cmd[2..])) {
                Ok(section) => {
                    let criteria = PlaceCriteria {
                        section,
                        ..view.criteria().clone()
                    };
                    view.set_criteria(criteria);
                }
                Err(e) => {
                    writeln!(output, "{}", e.message().red())?;
                    continue;
                }
            },
            _ => match cmd.parse::<usize>() {
                Ok(page) => {
                    view.go_to(page);
                }
                Err(_) => {
                    writeln!(output, "{} n, p, <page>, /text, s <section>, q", "?".yellow())?;
                    continue;
                }
            },
        }
        render(&view, &mut output)?;
    }
    Ok(())
}

fn render<W: Write>(view: &TableView<PlaceRow, PlaceCriteria>, output: &mut W) -> Result<(), CliError> {
    let page = view.current_page();
    writeln!(output)?;
    if page.items.is_empty() {
        writeln!(output, "{} No matching places", "ℹ".bold().blue())?;
    }
    for row in &page.items {
        writeln!(
            output,
            "  {} [{}] {} {}",
            row.pid.cyan(),
            row.section,
            row.keyword,
            row.place.dimmed()
        )?;
    }
    writeln!(
        output,
        "{} page {}/{} · {} matches",
        "ℹ".bold().blue(),
        view.page(),
        view.total_pages(),
        view.filtered().len()
    )?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::place_rows_with_extra;

    fn run(script: &str, rows: Vec<PlaceRow>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        browse_places(rows, Some("10"), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_paging_is_clamped() {
        let out = run("p\n99\nq\n", place_rows_with_extra(47));
        assert!(out.contains("page 1/6"));
        assert!(out.contains("page 6/6"));
        assert!(!out.contains("page 7/6"));
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let out = run("3\n/P1005\nq\n", place_rows_with_extra(47));
        assert!(out.contains("page 3/6"));
        assert!(out.contains("page 1/1 · 1 matches"));
    }

    #[test]
    fn test_section_filter() {
        let out = run("s 월보장\n", place_rows_with_extra(0));
        assert!(out.contains("· 3 matches"));
        let out = run("s weekly\n", place_rows_with_extra(0));
        assert!(out.contains("Unknown filter value"));
    }
}
