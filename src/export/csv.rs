use crate::errors::AppResult;
use crate::export::model::SessionExport;
use ::csv::Writer;
use std::path::Path;

/// Write sessions as CSV, header row taken from the struct fields.
pub fn write_csv(path: &Path, rows: &[SessionExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
