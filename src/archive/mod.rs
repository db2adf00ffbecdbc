//! Archive staging
//!
//! Extraction of the uploaded zip into the scratch space, and in-memory
//! packaging of the matched files for download.
//!
//! Only the zip format is handled. Inputs with a recognized but unsupported
//! archive extension (rar, 7z) are rejected up front instead of failing midway
//! through extraction.

use crate::error::{OrganizerError, Result};
use std::fs::{self, File};
use std::io::{self, Cursor, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const UNSUPPORTED_EXTENSIONS: &[&str] = &["rar", "7z"];

/// Unpack every entry of the zip at `archive_path` under `dest_dir`, creating
/// it if absent. Entry paths are sanitized, so hostile entries cannot escape
/// `dest_dir`. Returns the number of files written.
pub fn extract(archive_path: &Path, dest_dir: &Path) -> Result<usize> {
    if !archive_path.exists() {
        return Err(OrganizerError::FileNotFound(
            archive_path.display().to_string(),
        ));
    }

    if let Some(ext) = archive_path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if UNSUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(OrganizerError::UnsupportedArchive(ext));
        }
    }

    let file = File::open(archive_path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| OrganizerError::Extraction(e.to_string()))?;

    fs::create_dir_all(dest_dir)?;

    let mut extracted = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| OrganizerError::Extraction(e.to_string()))?;

        // Skip entries whose name would resolve outside dest_dir
        let relative = match entry.enclosed_name() {
            Some(p) => p.to_owned(),
            None => continue,
        };
        let out_path = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out_file = File::create(&out_path)?;
        io::copy(&mut entry, &mut out_file)?;
        extracted += 1;
    }

    Ok(extracted)
}

/// Build a deflate-compressed zip in memory containing exactly the named
/// files, flattened, each read from `source_dir`. Names that no longer
/// resolve to a regular file are skipped.
pub fn package(file_names: &[String], source_dir: &Path) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    {
        let mut writer = ZipWriter::new(Cursor::new(&mut buffer));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for name in file_names {
            let path = source_dir.join(name);
            if !path.is_file() {
                continue;
            }

            writer.start_file(name.as_str(), options)?;
            let contents = fs::read(&path)?;
            writer.write_all(&contents)?;
        }

        writer.finish()?;
    }

    Ok(buffer)
}
