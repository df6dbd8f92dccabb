//! CSV rendering for export workbooks.
//!
//! Writes one `<sheet name>.csv` file per sheet into a target directory.
//! Failures are reported as typed errors; the in-memory model and workbook
//! are never modified.

use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::workbook::Workbook;

/// Writes every sheet of the workbook as a CSV file under `directory`.
///
/// The directory is created if it does not exist. Each file gets the
/// sheet's column headers as its first record.
pub fn write_workbook_csv<P: AsRef<Path>>(workbook: &Workbook, directory: P) -> EngineResult<()> {
    let directory = directory.as_ref();
    std::fs::create_dir_all(directory).map_err(|e| EngineError::ExportDirectory {
        path: directory.display().to_string(),
        message: e.to_string(),
    })?;

    for sheet in &workbook.sheets {
        let path = directory.join(format!("{}.csv", sheet.name));
        let write_error = |message: String| EngineError::ExportWrite {
            sheet: sheet.name.clone(),
            path: path.display().to_string(),
            message,
        };

        let mut writer =
            csv::Writer::from_path(&path).map_err(|e| write_error(e.to_string()))?;
        writer
            .write_record(&sheet.columns)
            .map_err(|e| write_error(e.to_string()))?;
        for row in &sheet.rows {
            let fields: Vec<String> = row.iter().map(|cell| cell.csv_field()).collect();
            writer
                .write_record(&fields)
                .map_err(|e| write_error(e.to_string()))?;
        }
        writer.flush().map_err(|e| write_error(e.to_string()))?;
    }

    info!(
        directory = %directory.display(),
        sheets = workbook.sheets.len(),
        "wrote export workbook"
    );
    Ok(())
}
