pub mod excel;

use crate::cli::ExportFormat;
use crate::error::{OrganizerError, Result};
use crate::matcher::MatchReport;
use std::path::{Path, PathBuf};

const DEFAULT_STEM: &str = "reporte_curp";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", DEFAULT_STEM));
        let excel_path = output.join(format!("{}.xlsx", DEFAULT_STEM));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_STEM);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// Write the report in the requested format(s); returns the written paths.
pub fn export_report(
    report: &MatchReport,
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    match format {
        ExportFormat::Json => {
            let path = output_path_for_format(output, "json");
            write_json(report, &path)?;
            Ok(vec![path])
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, "xlsx");
            excel::write_report(report, &path)?;
            Ok(vec![path])
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output);
            write_json(report, &json_path)?;
            excel::write_report(report, &excel_path)?;
            Ok(vec![json_path, excel_path])
        }
    }
}

pub fn write_json(report: &MatchReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a report previously saved with [`write_json`].
pub fn load_report(path: &Path) -> Result<MatchReport> {
    if !path.exists() {
        return Err(OrganizerError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
