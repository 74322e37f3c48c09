//! Structured text extraction for zip-based word-processor documents
//!
//! The structural decoder yields a tree of text-bearing nodes (paragraphs,
//! runs, tables, hyperlinks). The tree is flattened into one newline-joined
//! blob and the lowercased term is tested for containment. Positions are
//! not reconstructable from a flattened tree without loss, so the result is
//! an existence verdict only.

use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableChild, TableCellContent, TableRowChild,
};
use std::fs;
use std::path::Path;

use crate::core::model::{MatchSet, ScanError, SearchTerm};

/// Decode the document, flatten its body, and report whether the term
/// occurs anywhere in the flattened text.
pub fn structured_search(path: &Path, term: &SearchTerm) -> Result<MatchSet, ScanError> {
    let bytes = fs::read(path).map_err(|e| ScanError::io(path, e))?;
    let docx = read_docx(&bytes).map_err(|e| ScanError::decode(path, e))?;

    let flattened = flatten_body(&docx.document.children).to_lowercase();
    Ok(MatchSet::Verdict(flattened.contains(term.as_str())))
}

/// Container nodes contribute the newline-joined flattening of their
/// children; text nodes contribute themselves; anything else contributes
/// empty text.
fn flatten_body(children: &[DocumentChild]) -> String {
    children
        .iter()
        .map(|child| match child {
            DocumentChild::Paragraph(paragraph) => flatten_paragraph(paragraph),
            DocumentChild::Table(table) => flatten_table(table),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn flatten_paragraph(paragraph: &Paragraph) -> String {
    paragraph
        .children
        .iter()
        .map(flatten_paragraph_child)
        .collect()
}

fn flatten_paragraph_child(child: &ParagraphChild) -> String {
    match child {
        ParagraphChild::Run(run) => flatten_run(run),
        ParagraphChild::Insert(insert) => insert
            .children
            .iter()
            .map(|part| match part {
                InsertChild::Run(run) => flatten_run(run),
                _ => String::new(),
            })
            .collect(),
        ParagraphChild::Hyperlink(link) => {
            link.children.iter().map(flatten_paragraph_child).collect()
        }
        _ => String::new(),
    }
}

fn flatten_run(run: &Run) -> String {
    run.children
        .iter()
        .map(|part| match part {
            RunChild::Text(text) => text.text.clone(),
            RunChild::Tab(_) => "\t".to_string(),
            RunChild::Break(_) => "\n".to_string(),
            _ => String::new(),
        })
        .collect()
}

fn flatten_table(table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| match row {
            TableChild::TableRow(row) => row
                .cells
                .iter()
                .map(|cell| match cell {
                    TableRowChild::TableCell(cell) => cell
                        .children
                        .iter()
                        .map(|content| match content {
                            TableCellContent::Paragraph(paragraph) => {
                                flatten_paragraph(paragraph)
                            }
                            TableCellContent::Table(table) => flatten_table(table),
                            _ => String::new(),
                        })
                        .collect::<Vec<_>>()
                        .join("\n"),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
