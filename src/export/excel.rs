//! Excel report generation
//!
//! One sheet with the matched files, plus an error sheet when any copy
//! failed.

use crate::error::{OrganizerError, Result};
use crate::matcher::MatchReport;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

fn xlsx_err(e: XlsxError) -> OrganizerError {
    OrganizerError::ExcelReport(e.to_string())
}

pub fn write_report(report: &MatchReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Encontrados").map_err(xlsx_err)?;
    worksheet.set_column_width(0, 50).map_err(xlsx_err)?;
    worksheet.set_column_width(1, 22).map_err(xlsx_err)?;

    worksheet
        .write_with_format(0, 0, "Archivo", &bold)
        .map_err(xlsx_err)?;
    worksheet
        .write_with_format(0, 1, "CURP", &bold)
        .map_err(xlsx_err)?;

    for (i, matched) in report.matches.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_string(row, 0, &matched.file_name)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(row, 1, &matched.identifier)
            .map_err(xlsx_err)?;
    }

    let summary_row = report.matches.len() as u32 + 2;
    worksheet
        .write_with_format(summary_row, 0, "Coincidencias", &bold)
        .map_err(xlsx_err)?;
    worksheet
        .write_number(summary_row, 1, report.match_count() as f64)
        .map_err(xlsx_err)?;
    worksheet
        .write_with_format(summary_row + 1, 0, "Generado", &bold)
        .map_err(xlsx_err)?;
    worksheet
        .write_string(
            summary_row + 1,
            1,
            Local::now().format("%Y-%m-%d %H:%M").to_string(),
        )
        .map_err(xlsx_err)?;

    if !report.copy_failures.is_empty() {
        let errores = workbook.add_worksheet();
        errores.set_name("Errores").map_err(xlsx_err)?;
        errores.set_column_width(0, 50).map_err(xlsx_err)?;
        errores.set_column_width(1, 60).map_err(xlsx_err)?;

        errores
            .write_with_format(0, 0, "Archivo", &bold)
            .map_err(xlsx_err)?;
        errores
            .write_with_format(0, 1, "Error", &bold)
            .map_err(xlsx_err)?;

        for (i, failure) in report.copy_failures.iter().enumerate() {
            let row = i as u32 + 1;
            errores
                .write_string(row, 0, &failure.file_name)
                .map_err(xlsx_err)?;
            errores
                .write_string(row, 1, &failure.reason)
                .map_err(xlsx_err)?;
        }
    }

    workbook.save(output_path).map_err(xlsx_err)?;
    Ok(())
}
