// src/export/model.rs

use crate::models::day_summary::DaySummary;
use crate::utils::formatting::format_duration;
use serde::Serialize;

/// Flat per-period row for tabular exports.
#[derive(Serialize, Clone, Debug)]
pub struct PeriodExport {
    pub period: String,
    pub start: String,
    pub end: String,
    pub minutes: i64,
    pub duration: String,
}

/// Header for CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["period", "start", "end", "minutes", "duration"]
}

/// Flatten the summary into period rows; the live open period, when
/// present, is exported as the "open" row.
pub(crate) fn summary_to_rows(summary: &DaySummary) -> Vec<PeriodExport> {
    let mut rows: Vec<PeriodExport> = summary
        .timeline
        .periods
        .iter()
        .enumerate()
        .map(|(idx, p)| PeriodExport {
            period: (idx + 1).to_string(),
            start: p.start.to_string(),
            end: p.end.to_string(),
            minutes: p.duration_minutes,
            duration: format_duration(p.duration_minutes),
        })
        .collect();

    if let Some(open) = &summary.timeline.open_period {
        rows.push(PeriodExport {
            period: "open".to_string(),
            start: open.start.to_string(),
            end: open.end.to_string(),
            minutes: open.duration_minutes,
            duration: format_duration(open.duration_minutes),
        });
    }

    rows
}
