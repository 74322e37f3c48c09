//! Per-page scanning for paginated documents
//!
//! The PDF decoder yields the text of each page; a page matches when its
//! lowercased text contains the term. Pages are numbered 1-based in
//! reports. The document handle is scoped to the call and dropped on every
//! exit path.

use std::path::Path;

use crate::core::model::{MatchSet, ScanError, SearchTerm};

/// Ascending 1-based page numbers containing at least one occurrence of
/// the term.
pub fn page_search(path: &Path, term: &SearchTerm) -> Result<MatchSet, ScanError> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| ScanError::decode(path, e))?;

    let hits = pages
        .iter()
        .enumerate()
        .filter(|(_, text)| text.to_lowercase().contains(term.as_str()))
        .map(|(index, _)| index + 1)
        .collect();
    Ok(MatchSet::Pages(hits))
}
