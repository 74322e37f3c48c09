//! CLI module - Command-line interface definition and run loop

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::backends::dispatch::{self, Outcome};
use crate::core::model::SearchTerm;
use crate::core::report;
use crate::core::walk;

/// docseek - case-insensitive phrase search across mixed document trees.
#[derive(Parser, Debug)]
#[command(name = "docseek")]
#[command(
    author,
    version,
    about,
    long_about = r#"docseek walks a directory tree and searches every supported document for a
phrase, case-insensitively.

Formats and strategies:
- .txt/.rtf/.xls   raw byte scan (overlapping matches)
- .doc/.dot        combined raw + wide (UTF-16LE) byte scan
- .docx/.docm      structured text extraction (existence only)
- .xlsx            per-cell scan over cached formula values
- .pdf             per-page scan, matching page numbers reported

Anything else is reported as skipped; Office temp files (~$...) are ignored
entirely. Matching files print as "<N> matches in '<path>'".

Examples:
    docseek "quarterly budget"
    docseek --root ~/Documents invoice
    echo needle | docseek
"#
)]
pub struct Cli {
    /// Root directory for the search walk.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for the search walk (defaults to the current directory).\n\n\
Every file under it is visited recursively; the pre-search summary counts\n\
them by extension."
    )]
    pub root: PathBuf,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Phrase to search for (prompted on stdin when omitted).
    #[arg(
        value_name = "TERM",
        long_help = "Phrase to search for, case-insensitive.\n\n\
When omitted, docseek prompts and reads one line from standard input."
    )]
    pub term: Option<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let raw = match cli.term {
        Some(term) => term,
        None => prompt_for_term()?,
    };
    if raw.trim().is_empty() {
        bail!("search term must not be empty");
    }
    let term = SearchTerm::new(raw.trim());

    let (files, census) = walk::walk_tree(&root)?;
    report::print_summary(&census);

    let start = Instant::now();
    for path in &files {
        match dispatch::process_file(path, &term) {
            Outcome::Scanned(record) => {
                if let Some(error) = &record.error {
                    report::print_error(error);
                }
                if record.matches.count() > 0 {
                    report::print_record(&record);
                }
            }
            Outcome::Unsupported => report::print_unsupported(path),
            Outcome::Skipped => {}
        }
    }
    report::print_elapsed(start.elapsed());

    Ok(())
}

/// Interactive fallback: prompt on stdout, read a single line from stdin.
fn prompt_for_term() -> Result<String> {
    print!("Enter text to search for: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read search term from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
