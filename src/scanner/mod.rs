use crate::error::{OrganizerError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub file_name: String,
}

pub fn scan_folder(folder: &Path) -> Result<Vec<FileEntry>> {
    if !folder.exists() {
        return Err(OrganizerError::FolderNotFound(folder.display().to_string()));
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // top level only, no recursion
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        entries.push(FileEntry {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // Sort by file name for a stable enumeration order
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(entries)
}
