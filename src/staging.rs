//! Run-scoped scratch space
//!
//! Each invocation gets its own uniquely-named temporary directory with the
//! `extracted/` and `matched/` subtrees. The directory is removed when the
//! value is dropped, on every exit path, so concurrent runs never collide.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Staging {
    root: TempDir,
    extracted: PathBuf,
    matched: PathBuf,
}

impl Staging {
    pub fn new() -> Result<Self> {
        let root = tempfile::Builder::new()
            .prefix("curp-organizer-")
            .tempdir()?;

        let extracted = root.path().join("extracted");
        let matched = root.path().join("matched");
        fs::create_dir_all(&extracted)?;
        fs::create_dir_all(&matched)?;

        Ok(Self {
            root,
            extracted,
            matched,
        })
    }

    /// Where the uploaded archive gets unpacked
    pub fn extracted_dir(&self) -> &Path {
        &self.extracted
    }

    /// Where the matched files get copied
    pub fn matched_dir(&self) -> &Path {
        &self.matched
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}
