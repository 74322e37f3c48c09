//! Byte-oriented scanners for plain text and legacy binary formats
//!
//! Two pattern encodings are searched over the same ASCII-lowercased file
//! bytes: the term's UTF-8 form and its UTF-16LE form (BOM stripped).
//!
//! The two scanners differ in overlap policy: the raw scanner
//! resumes at `match + 1` and therefore reports overlapping occurrences,
//! while the wide scanner resumes at `match + pattern.len()` because
//! wide-character matches cannot meaningfully overlap within the encoding
//! stride. Do not unify these; unifying changes which matches are reported.
//!
//! The combined scanner merges offsets from both into one ascending set.
//! The two offset spaces are not commensurable (raw bytes vs wide-encoded
//! bytes); the merged sequence is an accepted approximation for legacy
//! containers that mix encodings, not a bug to fix.

use memchr::memmem;
use std::fs;
use std::path::Path;

use crate::core::model::{ScanError, SearchTerm};

/// All starting offsets of the term's UTF-8 bytes in the lowercased file
/// content, overlapping occurrences included.
pub fn raw_search(path: &Path, term: &SearchTerm) -> Result<Vec<usize>, ScanError> {
    let data = read_lowercased(path)?;
    Ok(find_offsets(&data, term.utf8_bytes(), true))
}

/// All starting offsets of the term's UTF-16LE bytes in the lowercased
/// file content, non-overlapping.
pub fn wide_search(path: &Path, term: &SearchTerm) -> Result<Vec<usize>, ScanError> {
    let data = read_lowercased(path)?;
    Ok(find_offsets(&data, &term.utf16le_bytes(), false))
}

/// Deduplicated ascending union of raw and wide offsets over the same file.
/// Legacy containers are not guaranteed to store all text in one encoding;
/// running both catches mixed-encoding content.
pub fn combined_search(path: &Path, term: &SearchTerm) -> Result<Vec<usize>, ScanError> {
    let mut offsets = wide_search(path, term)?;
    offsets.extend(raw_search(path, term)?);
    offsets.sort_unstable();
    offsets.dedup();
    Ok(offsets)
}

/// Full file content with ASCII-range case folding; non-ASCII bytes pass
/// through unchanged.
fn read_lowercased(path: &Path) -> Result<Vec<u8>, ScanError> {
    let mut data = fs::read(path).map_err(|e| ScanError::io(path, e))?;
    data.make_ascii_lowercase();
    Ok(data)
}

/// Every starting offset of `pattern` in `haystack`. With `overlapping`,
/// scanning resumes one byte after each hit; otherwise it resumes past the
/// whole pattern.
fn find_offsets(haystack: &[u8], pattern: &[u8], overlapping: bool) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(pattern);
    let advance = if overlapping { 1 } else { pattern.len() };

    let mut offsets = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        match finder.find(&haystack[start..]) {
            Some(rel) => {
                let at = start + rel;
                offsets.push(at);
                start = at + advance;
            }
            None => break,
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_raw_search_finds_overlaps() {
        let file = file_with(b"aaa");
        let term = SearchTerm::new("a");
        assert_eq!(raw_search(file.path(), &term).unwrap(), vec![0, 1, 2]);

        let term = SearchTerm::new("aa");
        assert_eq!(raw_search(file.path(), &term).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_raw_search_is_case_insensitive() {
        let file = file_with(b"Hello");
        assert_eq!(
            raw_search(file.path(), &SearchTerm::new("hello")).unwrap(),
            vec![0]
        );
        assert_eq!(
            raw_search(file.path(), &SearchTerm::new("HELLO")).unwrap(),
            vec![0]
        );
    }

    #[test]
    fn test_raw_search_no_match() {
        let file = file_with(b"nothing here");
        let term = SearchTerm::new("absent");
        assert!(raw_search(file.path(), &term).unwrap().is_empty());
    }

    #[test]
    fn test_raw_search_empty_term_yields_nothing() {
        let file = file_with(b"content");
        let term = SearchTerm::new("");
        assert!(raw_search(file.path(), &term).unwrap().is_empty());
    }

    #[test]
    fn test_raw_search_missing_file_is_io_error() {
        let term = SearchTerm::new("x");
        let err = raw_search(Path::new("/nonexistent/f.txt"), &term).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn test_wide_search_matches_utf16le_content() {
        // "NoteNote" as UTF-16LE, uppercase letters included; ASCII folding
        // applies to the low bytes and leaves the interleaved zeros alone.
        let content: Vec<u8> = "NoteNote"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        let file = file_with(&content);

        let term = SearchTerm::new("note");
        assert_eq!(wide_search(file.path(), &term).unwrap(), vec![0, 8]);
    }

    #[test]
    fn test_wide_search_does_not_overlap() {
        // "aaaa" wide: the 2-char pattern "aa" occupies 4 bytes; hits must
        // never be closer together than the pattern byte length.
        let content: Vec<u8> = "aaaa"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        let file = file_with(&content);

        let term = SearchTerm::new("aa");
        let offsets = wide_search(file.path(), &term).unwrap();
        assert_eq!(offsets, vec![0, 4]);
        let stride = term.utf16le_bytes().len();
        for pair in offsets.windows(2) {
            assert!(pair[1] - pair[0] >= stride);
        }
    }

    #[test]
    fn test_combined_search_unions_both_encodings() {
        // ASCII "secret" followed by the same word in UTF-16LE.
        let mut content = b"secret ".to_vec();
        let wide_start = content.len();
        content.extend("Secret".encode_utf16().flat_map(|u| u.to_le_bytes()));
        let file = file_with(&content);

        let term = SearchTerm::new("secret");
        let raw = raw_search(file.path(), &term).unwrap();
        let wide = wide_search(file.path(), &term).unwrap();
        let combined = combined_search(file.path(), &term).unwrap();

        assert_eq!(raw, vec![0]);
        assert_eq!(wide, vec![wide_start]);
        for offset in raw.iter().chain(wide.iter()) {
            assert!(combined.contains(offset));
        }
        assert!(combined.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_combined_search_dedups_shared_offsets() {
        // A lone NUL after 'a' makes the raw "a" hit at 0 coincide with a
        // wide "a" hit at 0.
        let file = file_with(&[b'a', 0x00, b'x']);
        let term = SearchTerm::new("a");
        let combined = combined_search(file.path(), &term).unwrap();
        assert_eq!(combined, vec![0]);
    }

    #[test]
    fn test_scanners_are_idempotent() {
        let file = file_with(b"repeat repeat repeat");
        let term = SearchTerm::new("repeat");
        assert_eq!(
            raw_search(file.path(), &term).unwrap(),
            raw_search(file.path(), &term).unwrap()
        );
        assert_eq!(
            combined_search(file.path(), &term).unwrap(),
            combined_search(file.path(), &term).unwrap()
        );
    }
}
