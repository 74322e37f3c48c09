//! Console reporting
//!
//! All output is plain console text: a pre-search census summary, one line
//! per matching file, a skip notice per unsupported file, and a final
//! elapsed-time line. Contained scan errors go to stderr at the point of
//! discovery; they are never aggregated.

use colored::Colorize;
use std::path::Path;
use std::time::Duration;

use crate::core::model::{FileRecord, ScanError};
use crate::core::walk::ExtensionCensus;

/// Print the pre-search summary: total files and the extension histogram.
pub fn print_summary(census: &ExtensionCensus) {
    println!(
        "Found {} files, {} unique extensions.",
        census.total_files().to_string().bold(),
        census.unique_extensions().to_string().bold()
    );
    println!("Unique extensions and counts:");
    for (extension, count) in census.iter() {
        println!("\t{}: {}", extension, count);
    }
    println!("Searching...");
}

/// Print the match line for a file, with page numbers appended for
/// paginated results.
pub fn print_record(record: &FileRecord) {
    let detail = match record.location_detail() {
        Some(pages) => format!(", Pages: {}", pages),
        None => String::new(),
    };
    println!(
        "{} matches in '{}'{}",
        record.matches.count().to_string().bold(),
        record.path.display(),
        detail
    );
}

/// Skip notice for files no strategy covers.
pub fn print_unsupported(path: &Path) {
    println!("{}", format!("\t'{}' skipped", path.display()).dimmed());
}

/// A contained decoder/IO failure; printed immediately, traversal continues.
pub fn print_error(error: &ScanError) {
    eprintln!(
        "{}",
        format!(
            "Error processing file {}: {}",
            error.path().display(),
            error
        )
        .red()
    );
}

pub fn print_elapsed(elapsed: Duration) {
    println!("Finished in {:.3} seconds.", elapsed.as_secs_f64());
}
