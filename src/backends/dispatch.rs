//! Format dispatch
//!
//! One decision per file: extension to strategy. A strategy's failure is
//! contained on the file's record and never aborts the traversal; every
//! file's outcome is isolated from its neighbours.

use std::path::Path;

use crate::backends::{bytes, docx, pdf, xlsx};
use crate::core::model::{Dispatch, FileRecord, MatchSet, ScanError, SearchTerm, Strategy};
use crate::core::walk::file_extension;

/// Office leaves `~$`-prefixed companions behind while a document is open;
/// they are skipped outright, with no record and no report.
const TEMP_PREFIX: &str = "~$";

/// The outcome of visiting one file.
#[derive(Debug)]
pub enum Outcome {
    Scanned(FileRecord),
    /// No strategy covers this extension; reported as a skip notice.
    Unsupported,
    /// Temporary file; nothing is reported at all.
    Skipped,
}

/// Map a file name and lowercased extension to exactly one strategy, or to
/// unsupported/skip. Known binary formats (images, thumbnails caches,
/// shortcuts) and unrecognized extensions collapse to the same reported
/// outcome; nothing is dropped silently.
pub fn dispatch_for(file_name: &str, extension: &str) -> Dispatch {
    if file_name.starts_with(TEMP_PREFIX) {
        return Dispatch::Skip;
    }
    match extension {
        ".docx" | ".docm" => Dispatch::Strategy(Strategy::StructuredText),
        ".xlsx" => Dispatch::Strategy(Strategy::TabularCells),
        ".txt" | ".rtf" | ".xls" => Dispatch::Strategy(Strategy::RawBytes),
        ".dot" | ".doc" => Dispatch::Strategy(Strategy::LegacyCombined),
        ".pdf" => Dispatch::Strategy(Strategy::PaginatedText),
        _ => Dispatch::Unsupported,
    }
}

/// Run the chosen strategy for one file, degrading decoder/IO failures to
/// a zero-match record carrying the error.
pub fn process_file(path: &Path, term: &SearchTerm) -> Outcome {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = file_extension(path);

    let strategy = match dispatch_for(&file_name, &extension) {
        Dispatch::Skip => return Outcome::Skipped,
        Dispatch::Unsupported => return Outcome::Unsupported,
        Dispatch::Strategy(strategy) => strategy,
    };

    let result = run_strategy(strategy, path, term);
    let (matches, error) = match result {
        Ok(matches) => (matches, None),
        Err(error) => (MatchSet::empty_for(strategy), Some(error)),
    };

    Outcome::Scanned(FileRecord {
        path: path.to_path_buf(),
        extension,
        strategy,
        matches,
        error,
    })
}

fn run_strategy(
    strategy: Strategy,
    path: &Path,
    term: &SearchTerm,
) -> Result<MatchSet, ScanError> {
    match strategy {
        Strategy::RawBytes => bytes::raw_search(path, term).map(MatchSet::Offsets),
        Strategy::LegacyCombined => bytes::combined_search(path, term).map(MatchSet::Offsets),
        Strategy::StructuredText => docx::structured_search(path, term),
        Strategy::TabularCells => xlsx::cell_search(path, term),
        Strategy::PaginatedText => pdf::page_search(path, term),
    }
}
