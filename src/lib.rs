//! htmlgrader - grade HTML documents against a checklist of CSS selectors
//!
//! Given a JSON checklist of CSS selector strings and an HTML document (a
//! local file or a fetched URL), htmlgrader reports one boolean per selector:
//! `true` iff at least one element in the document matches it. The report is
//! a pretty-printed JSON object on stdout, keys in ascending selector order.
//!
//! # Pipeline
//!
//! ```text
//! Parse Args -> Validate Paths -> Load Checks -> Obtain Document
//!     -> Parse Document -> Run Checks -> Report
//! ```
//!
//! The only branch point is file-vs-URL mode, decided once at startup. A run
//! either produces a complete report covering every checklist entry, or no
//! JSON at all.
//!
//! # Library usage
//!
//! ```no_run
//! use htmlgrader::{checker, Checklist};
//!
//! # fn main() -> Result<(), htmlgrader::GraderError> {
//! let checks = Checklist::load("checks.json".as_ref())?;
//! let html = std::fs::read_to_string("index.html")?;
//! let results = checker::check_document(&html, &checks)?;
//! assert_eq!(results.len(), checks.distinct_len());
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod checks;
pub mod cli;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod report;

pub use checks::Checklist;
pub use document::DocumentSource;
pub use error::GraderError;
pub use exit_codes::ExitCode;
