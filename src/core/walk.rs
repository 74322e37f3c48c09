//! Directory traversal and extension census
//!
//! The walk is the engine's only filesystem collaborator: it yields file
//! paths in a stable (file-name sorted) order and tallies extensions in the
//! same pass. Per-entry errors are skipped; an unreadable root is the one
//! fatal condition and is surfaced before the engine runs.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Occurrence count per lowercased extension, built once over the
/// traversal. Counts sum to the total number of files seen.
#[derive(Debug, Clone, Default)]
pub struct ExtensionCensus {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl ExtensionCensus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, extension: &str) {
        *self.counts.entry(extension.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total_files(&self) -> usize {
        self.total
    }

    pub fn unique_extensions(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(ext, count)| (ext.as_str(), *count))
    }
}

/// Lowercased extension including the leading dot (".txt"), or an empty
/// string when the file name has none.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Walk the tree under `root`, collecting every file path in file-name
/// sorted order together with the extension census.
pub fn walk_tree(root: &Path) -> Result<(Vec<PathBuf>, ExtensionCensus)> {
    fs::read_dir(root)
        .with_context(|| format!("cannot read root directory '{}'", root.display()))?;

    let mut files = Vec::new();
    let mut census = ExtensionCensus::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        census.record(&file_extension(&path));
        files.push(path);
    }

    Ok((files, census))
}
