//! Document model: the ordered paragraphs of a revision-annotated document.
//!
//! The markup tree only lives for the duration of [`TrackedDocument::parse`];
//! each paragraph keeps its full text and its revision marks as owned data.

use crate::container;
use crate::error::ExtractResult;
use crate::revision::{scan_marks, FallbackIds, RevisionKind, RevisionMark};
use crate::runs::{run_text, wml_descendants};
use roxmltree::Node;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

/// One paragraph with its text and tracked changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph index in document order (0-based)
    pub index: usize,
    /// Concatenated `w:t` text of every run below the paragraph
    pub text: String,
    /// Deletion marks in document order
    pub deletions: Vec<RevisionMark>,
    /// Insertion marks in document order
    pub insertions: Vec<RevisionMark>,
}

impl Paragraph {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            deletions: Vec::new(),
            insertions: Vec::new(),
        }
    }

    pub fn with_deletions(mut self, deletions: Vec<RevisionMark>) -> Self {
        self.deletions = deletions;
        self
    }

    pub fn with_insertions(mut self, insertions: Vec<RevisionMark>) -> Self {
        self.insertions = insertions;
        self
    }

    /// Scan a `w:p` element.
    pub fn scan(index: usize, node: Node, fallback: &mut FallbackIds) -> Self {
        Self {
            index,
            text: run_text(wml_descendants(node, "t")),
            deletions: scan_marks(node, RevisionKind::Deletion, fallback),
            insertions: scan_marks(node, RevisionKind::Insertion, fallback),
        }
    }

    pub fn has_revisions(&self) -> bool {
        !self.deletions.is_empty() || !self.insertions.is_empty()
    }
}

/// A revision-annotated document, decomposed into paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedDocument {
    paragraphs: Vec<Paragraph>,
}

impl TrackedDocument {
    /// Open a container from disk and scan its main markup.
    pub fn open(path: &Path) -> ExtractResult<Self> {
        let xml = container::read_document_xml(path)?;
        Self::parse(&xml)
    }

    /// Scan the main markup of an already opened container.
    pub fn from_reader<R: Read + Seek>(reader: R) -> ExtractResult<Self> {
        let xml = container::read_document_xml_from(reader)?;
        Self::parse(&xml)
    }

    /// Parse document markup and scan every paragraph.
    ///
    /// Paragraphs are found anywhere in the tree (body, tables, text boxes),
    /// in document order.
    pub fn parse(xml: &str) -> ExtractResult<Self> {
        let tree = roxmltree::Document::parse(xml)?;
        let mut fallback = FallbackIds::new();

        let document = Self::from_paragraphs(
            wml_descendants(tree.root(), "p")
                .enumerate()
                .map(|(index, node)| Paragraph::scan(index, node, &mut fallback))
                .collect(),
        );

        debug!(
            paragraphs = document.paragraph_count(),
            revised = document.paragraphs().iter().filter(|p| p.has_revisions()).count(),
            marks = document.mark_count(),
            fallback_ids = fallback.issued(),
            "scanned document markup"
        );

        Ok(document)
    }

    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Total number of deletion and insertion marks.
    pub fn mark_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.deletions.len() + p.insertions.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::revision::RevisionId;
    use crate::testing::{del, del_without_id, docx_bytes, document_xml, ins, paragraph, run};
    use std::io::Cursor;

    #[test]
    fn full_text_includes_insertions_not_deletions() {
        let xml = document_xml(&paragraph(&[
            run("The "),
            del("1", "informations"),
            ins("1", "information"),
            run(" is complete."),
        ]));

        let doc = TrackedDocument::parse(&xml).unwrap();
        assert_eq!(doc.paragraph_count(), 1);

        let p = &doc.paragraphs()[0];
        assert_eq!(p.text, "The information is complete.");
        assert_eq!(p.deletions, vec![RevisionMark::deletion("1", "informations")]);
        assert_eq!(p.insertions, vec![RevisionMark::insertion("1", "information")]);
    }

    #[test]
    fn paragraphs_keep_document_order() {
        let xml = document_xml(&format!(
            "{}{}{}",
            paragraph(&[run("First.")]),
            "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>In a cell.</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
            paragraph(&[run("Last.")]),
        ));

        let doc = TrackedDocument::parse(&xml).unwrap();
        let texts: Vec<&str> = doc.paragraphs().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["First.", "In a cell.", "Last."]);
        assert_eq!(doc.paragraphs()[2].index, 2);
    }

    #[test]
    fn fallback_ids_are_document_wide() {
        let xml = document_xml(&format!(
            "{}{}",
            paragraph(&[del_without_id("one")]),
            paragraph(&[del_without_id("two")]),
        ));

        let doc = TrackedDocument::parse(&xml).unwrap();
        assert_eq!(doc.paragraphs()[0].deletions[0].id, RevisionId::Synthetic(1));
        assert_eq!(doc.paragraphs()[1].deletions[0].id, RevisionId::Synthetic(2));
    }

    #[test]
    fn empty_body_has_no_paragraphs() {
        let doc = TrackedDocument::parse(&document_xml("")).unwrap();
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.mark_count(), 0);
    }

    #[test]
    fn malformed_markup_is_parse_error() {
        let err = TrackedDocument::parse("<w:document><w:body>").unwrap_err();
        assert!(matches!(err, ExtractError::MarkupParse { .. }), "{:?}", err);
    }

    #[test]
    fn reads_from_container() {
        let xml = document_xml(&paragraph(&[run("Kept "), ins("3", "new")]));

        let doc = TrackedDocument::from_reader(Cursor::new(docx_bytes(&xml))).unwrap();
        assert_eq!(doc.mark_count(), 1);
        assert_eq!(doc.paragraphs()[0].text, "Kept new");
    }
}
