//! docseek - case-insensitive phrase search across mixed document trees
//!
//! docseek provides:
//! - Recursive traversal with a pre-search extension census
//! - Format-specific scanning strategies (raw bytes, legacy wide text,
//!   structured documents, spreadsheets, paginated documents)
//! - Per-file match reporting on the console

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
