use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use std::path::Path;

/// Write the full summary as pretty JSON.
pub(crate) fn write_json(path: &Path, summary: &DaySummary) -> AppResult<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
