//! Selector presence checks.
//!
//! The document is parsed with standard lenient HTML5 semantics: unclosed or
//! misnested tags are never an error, they simply shape what the selectors
//! can match. The parsed document is a local value handed in by the caller;
//! nothing is held in module state between runs.

use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::checks::Checklist;
use crate::error::GraderError;

/// Selector -> presence mapping for a single run.
///
/// `BTreeMap` keeps keys in ascending order, which is exactly the sorted
/// checklist order the report contract requires.
pub type ResultMap = BTreeMap<String, bool>;

/// Evaluate every checklist selector against the document.
///
/// Returns one entry per distinct selector, `true` iff at least one element
/// matches. A checklist entry that is not a valid CSS selector aborts the
/// run with [`GraderError::Selector`].
pub fn check_document(html: &str, checks: &Checklist) -> Result<ResultMap, GraderError> {
    let document = Html::parse_document(html);
    let mut results = ResultMap::new();

    for sel in checks.iter() {
        let selector = Selector::parse(sel).map_err(|err| GraderError::Selector {
            selector: sel.to_string(),
            message: err.to_string(),
        })?;
        let present = document.select(&selector).next().is_some();
        tracing::debug!(selector = %sel, present, "evaluated selector");
        results.insert(sel.to_string(), present);
    }

    Ok(results)
}
