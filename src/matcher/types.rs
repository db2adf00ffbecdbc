use serde::{Deserialize, Serialize};

/// A file whose name contained one of the identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedFile {
    pub file_name: String,
    /// First identifier (in set order) contained in the file name
    pub identifier: String,
}

/// A matched file that could not be copied to the destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyFailure {
    pub file_name: String,
    pub reason: String,
}

/// Outcome of one matching pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<MatchedFile>,
    pub copy_failures: Vec<CopyFailure>,
    /// Number of files enumerated in the source folder
    pub scanned: usize,
}

impl MatchReport {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn matched_names(&self) -> Vec<String> {
        self.matches.iter().map(|m| m.file_name.clone()).collect()
    }
}
