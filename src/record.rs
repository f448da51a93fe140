//! Change records and their assembly.

use crate::classify::{classify, ChangeType};
use crate::config::ExtractOptions;
use crate::context::{corrected_sentence, surrounding_text};
use crate::correlate::{correlate, Edit};
use crate::document::{Paragraph, TrackedDocument};
use crate::merge::merge_deletions;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One labeled correction, ready for export.
///
/// Serialized field names are the dataset's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Document-wide sequence id
    #[serde(rename = "ID")]
    pub id: u64,
    /// Deleted text; `None` for pure insertions
    #[serde(rename = "original_single")]
    pub original_snippet: Option<String>,
    /// Word window around the original snippet
    #[serde(rename = "original_partial")]
    pub original_context: String,
    /// Paragraph full text
    pub original_sentence: String,
    /// Inserted text; `None` for pure deletions
    #[serde(rename = "correction_single")]
    pub correction_snippet: Option<String>,
    /// Word window around the correction in the corrected sentence.
    ///
    /// Unlike earlier exports of this column, which held the whole corrected
    /// sentence, this is a window; `corrected_sentence` carries the full text.
    #[serde(rename = "correction_partial")]
    pub correction_context: String,
    /// Paragraph text with the change applied
    pub corrected_sentence: String,
    pub change_type: ChangeType,
}

/// Monotonic document-wide record ids, starting at 1.
#[derive(Debug)]
pub struct SequenceIds {
    next: u64,
}

impl SequenceIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn issue(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for SequenceIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds records paragraph by paragraph, in reading order.
#[derive(Debug)]
pub struct RecordAssembler<'o> {
    options: &'o ExtractOptions,
    ids: SequenceIds,
    records: Vec<ChangeRecord>,
}

impl<'o> RecordAssembler<'o> {
    pub fn new(options: &'o ExtractOptions) -> Self {
        Self {
            options,
            ids: SequenceIds::new(),
            records: Vec::new(),
        }
    }

    /// Reconcile one paragraph and append its records.
    ///
    /// Deletion-derived records come first, then standalone insertions.
    pub fn push_paragraph(&mut self, paragraph: &Paragraph) {
        if !paragraph.has_revisions() {
            return;
        }

        let deletions = merge_deletions(&paragraph.deletions);
        let edits = correlate(&deletions, &paragraph.insertions);

        for edit in &edits {
            let record = self.build(&paragraph.text, edit);
            self.records.push(record);
        }

        debug!(
            paragraph = paragraph.index,
            deletion_marks = paragraph.deletions.len(),
            merged_deletions = deletions.len(),
            insertions = paragraph.insertions.len(),
            edits = edits.len(),
            total_records = self.records().len(),
            "reconciled paragraph"
        );
    }

    fn build(&mut self, text: &str, edit: &Edit) -> ChangeRecord {
        let context = &self.options.context;
        let correction = edit.correction();

        let (original_context, corrected) = match edit.original() {
            Some(original) => (
                surrounding_text(text, original, context),
                corrected_sentence(text, original, correction),
            ),
            None => (
                surrounding_text(text, correction.unwrap_or(""), context),
                text.to_string(),
            ),
        };
        let correction_context = surrounding_text(&corrected, correction.unwrap_or(""), context);

        ChangeRecord {
            id: self.ids.issue(),
            original_snippet: edit.original().map(str::to_string),
            original_context,
            original_sentence: text.to_string(),
            correction_snippet: correction.map(str::to_string),
            correction_context,
            corrected_sentence: corrected,
            change_type: classify(edit),
        }
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn finish(self) -> Vec<ChangeRecord> {
        self.records
    }
}

/// Assemble the records of a whole document.
pub fn assemble(document: &TrackedDocument, options: &ExtractOptions) -> Vec<ChangeRecord> {
    let mut assembler = RecordAssembler::new(options);
    for paragraph in document.paragraphs() {
        assembler.push_paragraph(paragraph);
    }
    assembler.finish()
}
