//! Spreadsheet ingest
//!
//! Reads the identifier column out of an `.xls`/`.xlsx` workbook. Only the
//! first sheet is consulted; the first row is the header row.

use crate::error::{OrganizerError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Stringify a cell. Numeric cells lose the spurious `.0` that float-backed
/// spreadsheet values carry.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

/// Read every non-empty value under `column` (matched exactly against the
/// trimmed header row) as a raw string, in row order.
pub fn read_identifiers(path: &Path, column: &str) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(OrganizerError::FileNotFound(path.display().to_string()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| OrganizerError::Spreadsheet(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| OrganizerError::EmptySpreadsheet(path.display().to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| OrganizerError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| OrganizerError::EmptySpreadsheet(path.display().to_string()))?
        .iter()
        .map(cell_to_string)
        .collect();

    let column_index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| OrganizerError::MissingColumn {
            column: column.to_string(),
            available: headers.join(", "),
        })?;

    let mut values = Vec::new();
    for row in rows {
        if let Some(cell) = row.get(column_index) {
            let value = cell_to_string(cell);
            if !value.is_empty() {
                values.push(value);
            }
        }
    }

    Ok(values)
}
