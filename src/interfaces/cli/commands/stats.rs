//! Place rank chart command

use chrono::NaiveDate;
use colored::Colorize;

use crate::data::{DEFAULT_SERIES_DAYS, SeriesPoint};
use crate::interfaces::cli::CliError;
use crate::services::DashboardService;

const BAR_WIDTH: u32 = 30;

pub fn print_stats(
    service: &DashboardService,
    pid: &str,
    days: Option<usize>,
    start: Option<String>,
) -> Result<(), CliError> {
    let start = match start.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
            CliError::ParseError(format!("Invalid start date '{}': {}", raw, e))
        })?),
        None => None,
    };
    let row = service.place(pid)?;
    let points = service.place_series(pid, start, days.unwrap_or(DEFAULT_SERIES_DAYS))?;

    println!(
        "{} {} {}",
        row.pid.cyan().bold(),
        row.keyword,
        row.place.dimmed()
    );
    println!();
    for line in render_bars(&points) {
        println!("  {}", line);
    }
    Ok(())
}

/// One text line per point; the bar grows as the rank gets better
fn render_bars(points: &[SeriesPoint]) -> Vec<String> {
    let worst = points.iter().map(|p| p.rank).max().unwrap_or(1).max(1);
    points
        .iter()
        .map(|p| {
            let filled = (worst + 1 - p.rank.min(worst)) * BAR_WIDTH / worst;
            format!(
                "{} {:>3} {}",
                p.date.dimmed(),
                p.rank,
                "█".repeat(filled as usize).green()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bars_best_rank_is_longest() {
        colored::control::set_override(false);
        let points = vec![
            SeriesPoint {
                date: "2025-08-31".to_string(),
                rank: 1,
            },
            SeriesPoint {
                date: "2025-09-01".to_string(),
                rank: 10,
            },
        ];
        let lines = render_bars(&points);
        let bars = |s: &str| s.matches('█').count();
        assert!(bars(&lines[0]) > bars(&lines[1]));
        assert!(lines[0].starts_with("2025-08-31"));
    }

    #[test]
    fn test_unknown_pid_is_an_error() {
        let service = DashboardService::default();
        assert!(print_stats(&service, "NOPE", None, None).is_err());
        assert!(print_stats(&service, "P1001", Some(7), Some("bad".to_string())).is_err());
        assert!(print_stats(&service, "P1001", Some(7), None).is_ok());
    }

    #[test]
    fn test_far_future_start_is_rejected() {
        let service = DashboardService::default();
        let err = print_stats(&service, "P1001", None, Some("+262142-12-20".to_string()))
            .unwrap_err();
        assert!(matches!(err, CliError::ParseError(_)));
    }
}
