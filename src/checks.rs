//! Checklist loading.
//!
//! A checklist is a JSON array of CSS selector strings, e.g.
//! `["a[href]", "h1", "div.container"]`. It is loaded once, sorted ascending,
//! and immutable afterwards. A missing, unreadable, or malformed file is a
//! fatal error; no partial or default checklist is ever substituted.

use std::fs;
use std::path::Path;

use crate::error::GraderError;

/// The sorted list of selectors loaded from the checks file.
///
/// Duplicates are retained here; they collapse to a single entry when the
/// checker builds the result map (same selector, same value, so the collapse
/// is observably idempotent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    selectors: Vec<String>,
}

impl Checklist {
    /// Load a checklist from a JSON file and sort it ascending.
    pub fn load(path: &Path) -> Result<Self, GraderError> {
        let raw = fs::read_to_string(path).map_err(|source| GraderError::ChecksRead {
            path: path.to_path_buf(),
            source,
        })?;
        let selectors: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| GraderError::ChecksParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), count = selectors.len(), "loaded checklist");
        Ok(Self::from_selectors(selectors))
    }

    /// Build a checklist directly from selector strings (sorted on construction).
    #[must_use]
    pub fn from_selectors(mut selectors: Vec<String>) -> Self {
        selectors.sort();
        Self { selectors }
    }

    /// Iterate selectors in ascending sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Number of distinct selectors (the size of the result map).
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        let mut count = 0;
        let mut prev: Option<&str> = None;
        for sel in self.iter() {
            if prev != Some(sel) {
                count += 1;
            }
            prev = Some(sel);
        }
        count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}
