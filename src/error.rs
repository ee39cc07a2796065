//! Library-level error type for htmlgrader.
//!
//! `GraderError` is the primary error type returned by library operations.
//! Library code returns `GraderError` and does NOT call `std::process::exit()`;
//! the CLI maps errors to exit codes and prints user-facing messages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading checks, obtaining a document, or reporting.
///
/// # Error Categories
///
/// | Category | Description |
/// |----------|-------------|
/// | `ChecksRead` / `ChecksParse` | Checklist file unreadable or not a JSON array of strings |
/// | `Selector` | A checklist entry is not a valid CSS selector |
/// | `DocumentRead` | HTML file unreadable |
/// | `Fetch` | Transport-level failure during the HTTP GET |
/// | `Io` | Runtime construction or report write failure |
///
/// Malformed HTML is never an error: documents are parsed leniently and
/// missing structure simply yields selector non-matches.
#[derive(Error, Debug)]
pub enum GraderError {
    #[error("failed to read checks file {path}: {source}")]
    ChecksRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("checks file {path} is not a JSON array of selector strings: {source}")]
    ChecksParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSS selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("failed to read HTML file {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GraderError {
    /// Map this error to the CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> crate::ExitCode {
        crate::exit_codes::error_to_exit_code(self)
    }
}
