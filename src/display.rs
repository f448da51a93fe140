//! Human-readable rendering of change records.

use crate::record::ChangeRecord;
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Human-readable rendering of a [`ChangeRecord`].
///
/// ```text
/// #3 partial-word modification
///   - informations
///   + information
///   < The informations are listed.
///         ^^^^^^^^^^^^
///   > The information are listed.
/// ```
///
/// The caret line underlines the first occurrence of the snippet in the
/// original sentence and is omitted when the snippet does not occur there.
pub struct RecordDisplay<'a> {
    record: &'a ChangeRecord,
}

impl ChangeRecord {
    pub fn display(&self) -> RecordDisplay<'_> {
        RecordDisplay { record: self }
    }
}

const SENTENCE_INDENT: &str = "  < ";

impl<'a> fmt::Display for RecordDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;

        write!(f, "#{} {}", record.id, record.change_type)?;
        if let Some(original) = &record.original_snippet {
            write!(f, "\n  - {}", original)?;
        }
        if let Some(correction) = &record.correction_snippet {
            write!(f, "\n  + {}", correction)?;
        }

        write!(f, "\n{}{}", SENTENCE_INDENT, record.original_sentence)?;

        let marked = record
            .original_snippet
            .as_deref()
            .or(record.correction_snippet.as_deref())
            .filter(|snippet| !snippet.trim().is_empty());
        if let Some(snippet) = marked {
            if let Some(pos) = record.original_sentence.find(snippet) {
                let offset = SENTENCE_INDENT.width() + record.original_sentence[..pos].width();
                f.write_char('\n')?;
                for _ in 0..offset {
                    f.write_char(' ')?;
                }
                for _ in 0..snippet.width().max(1) {
                    f.write_char('^')?;
                }
            }
        }

        if record.corrected_sentence != record.original_sentence {
            write!(f, "\n  > {}", record.corrected_sentence)?;
        }

        Ok(())
    }
}
