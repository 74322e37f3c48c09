//! Backends module - format-specific scanning strategies
//!
//! Provides:
//! - bytes: raw, wide, and combined byte scanners for text and legacy formats
//! - docx: structured text extraction for zip-based word-processor files
//! - xlsx: per-cell scanning over cached spreadsheet values
//! - pdf: per-page scanning for paginated documents
//! - dispatch: extension to strategy selection with per-file isolation

pub mod bytes;
pub mod dispatch;
pub mod docx;
pub mod pdf;
pub mod xlsx;
