use crate::errors::AppResult;
use crate::export::model::{PeriodExport, get_headers};
use csv::Writer;
use std::path::Path;

/// Write the period rows as CSV to the given file.
pub(crate) fn write_csv(path: &Path, rows: &[PeriodExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(&[
            row.period.clone(),
            row.start.clone(),
            row.end.clone(),
            row.minutes.to_string(),
            row.duration.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
