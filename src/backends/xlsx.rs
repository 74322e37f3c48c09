//! Per-cell scanning over spreadsheet workbooks
//!
//! Workbooks are opened with cached formula values, never formula text.
//! Every non-empty cell is stringified, lowercased, and tested for
//! containment; hits keep the sheet name, the A1-style label, and the
//! original (non-lowercased) value.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::core::model::{CellHit, MatchSet, ScanError, SearchTerm};

/// Scan every sheet, row, and cell of the workbook for the term.
pub fn cell_search(path: &Path, term: &SearchTerm) -> Result<MatchSet, ScanError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ScanError::decode(path, e))?;

    let mut hits = Vec::new();
    let sheets = workbook.sheet_names().to_owned();
    for sheet in sheets {
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| ScanError::decode(path, e))?;
        let (row_offset, col_offset) = range.start().unwrap_or((0, 0));

        for (row_index, row) in range.rows().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                let value = match cell {
                    Data::Empty => continue,
                    Data::String(s) if s.is_empty() => continue,
                    other => other.to_string(),
                };
                if value.to_lowercase().contains(term.as_str()) {
                    hits.push(CellHit {
                        sheet: sheet.clone(),
                        cell: cell_label(
                            row_offset as usize + row_index,
                            col_offset as usize + col_index,
                        ),
                        value,
                    });
                }
            }
        }
    }

    Ok(MatchSet::Cells(hits))
}

/// A1-style label for a zero-based (row, column) pair.
fn cell_label(row: usize, col: usize) -> String {
    let mut letters = String::new();
    let mut remaining = col + 1;
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        letters.insert(0, (b'A' + digit as u8) as char);
        remaining = (remaining - 1) / 26;
    }
    format!("{}{}", letters, row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(0, 0), "A1");
        assert_eq!(cell_label(1, 1), "B2");
        assert_eq!(cell_label(9, 25), "Z10");
        assert_eq!(cell_label(0, 26), "AA1");
        assert_eq!(cell_label(0, 27), "AB1");
        assert_eq!(cell_label(0, 701), "ZZ1");
        assert_eq!(cell_label(0, 702), "AAA1");
    }

    #[test]
    fn test_cell_search_reports_coordinate_and_original_value() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("book.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "intro").unwrap();
        sheet.write_string(1, 1, "Budget 2024").unwrap();
        workbook.save(&path).unwrap();

        let result = cell_search(&path, &SearchTerm::new("budget")).unwrap();
        match result {
            MatchSet::Cells(hits) => {
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].cell, "B2");
                // original value, not the lowercased form
                assert_eq!(hits[0].value, "Budget 2024");
            }
            other => panic!("expected cell hits, got {:?}", other),
        }
    }

    #[test]
    fn test_cell_search_no_match_is_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("book.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "nothing to see").unwrap();
        workbook.save(&path).unwrap();

        let result = cell_search(&path, &SearchTerm::new("absent")).unwrap();
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_cell_search_corrupt_file_is_decode_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.xlsx");
        fs::write(&path, b"not a workbook").unwrap();

        let err = cell_search(&path, &SearchTerm::new("x")).unwrap_err();
        assert!(matches!(err, ScanError::Decode { .. }));
    }
}
