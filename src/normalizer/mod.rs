//! Identifier normalization
//!
//! Turns the raw spreadsheet column values into the identifier set used for
//! matching.
//!
//! ## Flow
//! 1. Uppercase and trim every raw value
//! 2. Drop values left empty by trimming
//! 3. Flag values that do not have the CURP shape (warning only)

use regex::Regex;

/// Normalized identifiers, in spreadsheet order
#[derive(Debug, Clone, Default)]
pub struct IdentifierSet {
    identifiers: Vec<String>,
}

lazy_static::lazy_static! {
    // 4 letters, 6-digit birth date, sex, 5 letters, homoclave, check digit
    static ref CURP_SHAPE: Regex =
        Regex::new(r"^[A-Z]{4}[0-9]{6}[HM][A-Z]{5}[A-Z0-9][0-9]$").unwrap();
}

impl IdentifierSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Entries that do not look like a CURP. They still participate in
    /// matching; the CLI surfaces them as a warning.
    pub fn malformed(&self) -> Vec<&str> {
        self.identifiers
            .iter()
            .filter(|id| !CURP_SHAPE.is_match(id))
            .map(String::as_str)
            .collect()
    }
}

/// Uppercase and trim each raw value, preserving order. Values that are empty
/// after trimming are dropped; duplicates are kept (they are harmless no-ops
/// for first-match scanning).
pub fn normalize(raw: &[String]) -> IdentifierSet {
    let identifiers = raw
        .iter()
        .map(|v| v.trim().to_uppercase())
        .filter(|v| !v.is_empty())
        .collect();

    IdentifierSet { identifiers }
}
