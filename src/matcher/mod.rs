//! Identifier matching
//!
//! The core pass: a file matches when its uppercased name contains one of the
//! normalized identifiers as a substring. Each file is matched at most once,
//! against the first identifier (in set order) that hits.

mod types;

pub use types::{CopyFailure, MatchReport, MatchedFile};

use crate::error::Result;
use crate::normalizer::IdentifierSet;
use crate::scanner::{self, FileEntry};
use std::fs;
use std::path::Path;

/// Pure matching pass over already-enumerated entries. No filesystem access.
pub fn find_matches(identifiers: &IdentifierSet, entries: &[FileEntry]) -> Vec<MatchedFile> {
    let mut matches = Vec::new();

    for entry in entries {
        let name_upper = entry.file_name.to_uppercase();

        for identifier in identifiers.iter() {
            if name_upper.contains(identifier) {
                matches.push(MatchedFile {
                    file_name: entry.file_name.clone(),
                    identifier: identifier.to_string(),
                });
                break;  // next file
            }
        }
    }

    matches
}

/// Scan `source_dir`, copy every matching file into `dest_dir` and report the
/// matches in enumeration order. `dest_dir` is created if missing; an existing
/// file with the same name is overwritten. A copy failure excludes that file
/// from the matches but does not stop the pass.
pub fn match_and_copy(
    identifiers: &IdentifierSet,
    source_dir: &Path,
    dest_dir: &Path,
) -> Result<MatchReport> {
    match_and_copy_with(identifiers, source_dir, dest_dir, |_| {})
}

/// Same as [`match_and_copy`], invoking `progress` once per scanned file so
/// the caller can drive a progress indicator.
pub fn match_and_copy_with<F>(
    identifiers: &IdentifierSet,
    source_dir: &Path,
    dest_dir: &Path,
    mut progress: F,
) -> Result<MatchReport>
where
    F: FnMut(&FileEntry),
{
    let entries = scanner::scan_folder(source_dir)?;
    fs::create_dir_all(dest_dir)?;

    let mut report = MatchReport {
        scanned: entries.len(),
        ..Default::default()
    };

    for entry in &entries {
        progress(entry);

        let name_upper = entry.file_name.to_uppercase();

        for identifier in identifiers.iter() {
            if !name_upper.contains(identifier) {
                continue;
            }

            let destination = dest_dir.join(&entry.file_name);
            match fs::copy(&entry.path, &destination) {
                Ok(_) => report.matches.push(MatchedFile {
                    file_name: entry.file_name.clone(),
                    identifier: identifier.to_string(),
                }),
                Err(e) => report.copy_failures.push(CopyFailure {
                    file_name: entry.file_name.clone(),
                    reason: e.to_string(),
                }),
            }

            break;  // first identifier wins, next file
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn identifier_set(values: &[&str]) -> IdentifierSet {
        let raw: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        normalizer::normalize(&raw)
    }

    #[test]
    fn test_single_identifier_matches_one_file() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        File::create(source.path().join("ABCD010101HDFXYZ00_acta.pdf"))
            .unwrap()
            .write_all(b"acta")
            .unwrap();
        File::create(source.path().join("other.pdf")).unwrap();

        let set = identifier_set(&["ABCD010101HDFXYZ00"]);
        let report = match_and_copy(&set, source.path(), dest.path()).unwrap();

        assert_eq!(report.match_count(), 1);
        assert_eq!(report.matches[0].file_name, "ABCD010101HDFXYZ00_acta.pdf");
        assert_eq!(report.matches[0].identifier, "ABCD010101HDFXYZ00");
        assert!(dest.path().join("ABCD010101HDFXYZ00_acta.pdf").is_file());
        assert!(!dest.path().join("other.pdf").exists());
    }

    #[test]
    fn test_empty_identifier_set_matches_nothing() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        File::create(source.path().join("anything.pdf")).unwrap();

        let set = identifier_set(&[]);
        let report = match_and_copy(&set, source.path(), dest.path()).unwrap();

        assert_eq!(report.match_count(), 0);
        assert!(!dest.path().join("anything.pdf").exists());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        File::create(source.path().join("abcd010101hdfxyz00_acta.pdf")).unwrap();

        let set = identifier_set(&["abcd010101hdfxyz00"]);
        let report = match_and_copy(&set, source.path(), dest.path()).unwrap();

        assert_eq!(report.match_count(), 1);
    }

    #[test]
    fn test_first_identifier_in_set_order_wins() {
        let entries = vec![FileEntry {
            path: "/tmp/AAAA010101HDFXYZ00_BBBB020202MDFABC01.pdf".into(),
            file_name: "AAAA010101HDFXYZ00_BBBB020202MDFABC01.pdf".to_string(),
        }];

        let set = identifier_set(&["BBBB020202MDFABC01", "AAAA010101HDFXYZ00"]);
        let matches = find_matches(&set, &entries);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].identifier, "BBBB020202MDFABC01");
    }

    #[test]
    fn test_each_file_reported_at_most_once() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        File::create(source.path().join("AAAA010101HDFXYZ00.pdf")).unwrap();

        // Duplicate identifiers must not duplicate the match
        let set = identifier_set(&["AAAA010101HDFXYZ00", "AAAA010101HDFXYZ00"]);
        let report = match_and_copy(&set, source.path(), dest.path()).unwrap();

        assert_eq!(report.match_count(), 1);
    }

    #[test]
    fn test_existing_destination_file_is_overwritten() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        File::create(source.path().join("AAAA010101HDFXYZ00.pdf"))
            .unwrap()
            .write_all(b"new contents")
            .unwrap();
        File::create(dest.path().join("AAAA010101HDFXYZ00.pdf"))
            .unwrap()
            .write_all(b"stale")
            .unwrap();

        let set = identifier_set(&["AAAA010101HDFXYZ00"]);
        let report = match_and_copy(&set, source.path(), dest.path()).unwrap();

        assert_eq!(report.match_count(), 1);
        let copied = fs::read(dest.path().join("AAAA010101HDFXYZ00.pdf")).unwrap();
        assert_eq!(copied, b"new contents");
    }

    #[test]
    fn test_copy_failure_is_recorded_and_pass_continues() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        File::create(source.path().join("AAAA010101HDFXYZ00.pdf")).unwrap();
        File::create(source.path().join("BBBB020202MDFABC01.pdf")).unwrap();

        // A directory squatting on the destination name makes the copy fail
        fs::create_dir(dest.path().join("AAAA010101HDFXYZ00.pdf")).unwrap();

        let set = identifier_set(&["AAAA010101HDFXYZ00", "BBBB020202MDFABC01"]);
        let report = match_and_copy(&set, source.path(), dest.path()).unwrap();

        assert_eq!(report.match_count(), 1);
        assert_eq!(report.matches[0].file_name, "BBBB020202MDFABC01.pdf");
        assert_eq!(report.copy_failures.len(), 1);
        assert_eq!(report.copy_failures[0].file_name, "AAAA010101HDFXYZ00.pdf");
    }

    #[test]
    fn test_rerun_produces_same_report() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();

        File::create(source.path().join("AAAA010101HDFXYZ00_acta.pdf")).unwrap();
        File::create(source.path().join("sin_curp.pdf")).unwrap();

        let set = identifier_set(&["AAAA010101HDFXYZ00"]);
        let first = match_and_copy(&set, source.path(), dest.path()).unwrap();
        let second = match_and_copy(&set, source.path(), dest.path()).unwrap();

        assert_eq!(first.matches, second.matches);
        assert_eq!(first.scanned, second.scanned);
    }
}
