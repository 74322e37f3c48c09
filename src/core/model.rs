//! Search Domain Model
//!
//! Every scanning strategy compares against the same lowercased SearchTerm
//! and maps its result into a MatchSet variant before reporting.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while scanning a single file.
///
/// Both kinds are contained at the dispatch boundary: the error is printed,
/// recorded on the FileRecord, and the file counts as zero matches. Neither
/// aborts the traversal.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be read (permissions, vanished, locked).
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A format library failed to parse the file (corrupt, encrypted,
    /// unsupported sub-variant).
    #[error("{message}")]
    Decode { path: PathBuf, message: String },
}

impl ScanError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn decode(path: &Path, cause: impl std::fmt::Display) -> Self {
        ScanError::Decode {
            path: path.to_path_buf(),
            message: cause.to_string(),
        }
    }

    /// The file the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Io { path, .. } => path,
            ScanError::Decode { path, .. } => path,
        }
    }
}

/// An immutable, lowercased search phrase.
///
/// The lowercased form is the single source of truth for all comparisons;
/// the byte-oriented scanners additionally re-encode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    text: String,
}

impl SearchTerm {
    /// Build a term from raw user input, folding case up front.
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The term as UTF-8 bytes, for single-byte-oriented scans.
    pub fn utf8_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// The term re-encoded as UTF-16LE with no byte-order mark, for legacy
    /// formats that store text runs in a fixed-width wide encoding.
    pub fn utf16le_bytes(&self) -> Vec<u8> {
        self.text
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect()
    }
}

/// One matching spreadsheet cell: sheet name, A1-style label, and the
/// original (non-lowercased) cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellHit {
    pub sheet: String,
    pub cell: String,
    pub value: String,
}

/// Format-dependent match locations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSet {
    /// Unique ascending byte offsets, from the byte-oriented scanners.
    Offsets(Vec<usize>),
    /// Existence only; the structured extractor cannot recover positions
    /// from a flattened text tree.
    Verdict(bool),
    /// Matching cells with spreadsheet coordinates.
    Cells(Vec<CellHit>),
    /// Unique ascending 1-based page numbers.
    Pages(Vec<usize>),
}

impl MatchSet {
    /// Number of matches this set represents. A positive verdict counts as
    /// a single match.
    pub fn count(&self) -> usize {
        match self {
            MatchSet::Offsets(offsets) => offsets.len(),
            MatchSet::Verdict(found) => usize::from(*found),
            MatchSet::Cells(cells) => cells.len(),
            MatchSet::Pages(pages) => pages.len(),
        }
    }

    /// The zero-match value a strategy degrades to when its decoder fails.
    pub fn empty_for(strategy: Strategy) -> Self {
        match strategy {
            Strategy::RawBytes | Strategy::LegacyCombined => MatchSet::Offsets(Vec::new()),
            Strategy::StructuredText => MatchSet::Verdict(false),
            Strategy::TabularCells => MatchSet::Cells(Vec::new()),
            Strategy::PaginatedText => MatchSet::Pages(Vec::new()),
        }
    }
}

/// The closed set of scanning strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    RawBytes,
    LegacyCombined,
    StructuredText,
    TabularCells,
    PaginatedText,
}

/// What the dispatcher decided for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Strategy(Strategy),
    /// Extension not in the dispatch table; reported as skipped.
    Unsupported,
    /// Temporary-file prefix; no record, no report.
    Skip,
}

/// The outcome of scanning one file. Created once per visited file and
/// immutable afterwards; never persisted.
#[derive(Debug)]
pub struct FileRecord {
    pub path: PathBuf,
    pub extension: String,
    pub strategy: Strategy,
    pub matches: MatchSet,
    /// A contained decoder/IO failure, when the matches were degraded to
    /// the zero value.
    pub error: Option<ScanError>,
}

impl FileRecord {
    /// Extra location detail for the report line: page numbers for
    /// paginated formats, nothing for the rest.
    pub fn location_detail(&self) -> Option<String> {
        match (self.strategy, &self.matches) {
            (Strategy::PaginatedText, MatchSet::Pages(pages)) if !pages.is_empty() => Some(
                pages
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }
}
