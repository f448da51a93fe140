#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/redline/issues/"
)]

//! Tracked-change extraction for word-processing documents.
//!
//! Reads the revision markup (`w:del` / `w:ins`) of a `.docx` container and
//! turns it into labeled correction records with sentence context.
//!
//! ## Pipeline
//!
//! - [`container`] - opens the zip container and reads the main markup entry
//! - [`runs`] - run-text extraction
//! - [`revision`] - scans a paragraph for deletion and insertion marks
//! - [`merge`] - fuses deletion fragments that share an identifier
//! - [`correlate`] - pairs deletions with insertions into edits
//! - [`classify`] - assigns the change type
//! - [`context`] - word windows and corrected sentences
//! - [`record`] - assembles [`ChangeRecord`]s with document-wide ids
//!
//! ## Example
//!
//! ```no_run
//! use redline::{extract_tracked_changes, ExtractOptions};
//! use std::path::Path;
//!
//! let records = extract_tracked_changes(Path::new("CORR_paper.docx"), &ExtractOptions::default())?;
//! for record in &records {
//!     println!("{}", record.display());
//! }
//! # Ok::<(), redline::ExtractError>(())
//! ```

pub mod classify;
pub mod config;
pub mod container;
pub mod context;
pub mod correlate;
mod display;
pub mod document;
pub mod error;
mod extract;
pub mod merge;
pub mod record;
pub mod revision;
pub mod runs;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use classify::{classify, is_partial_word_modification, ChangeType};
pub use config::{ContextOptions, ExtractOptions, WordJoiner, DEFAULT_WINDOW};
pub use context::{corrected_sentence, surrounding_text};
pub use correlate::{correlate, Edit, InsertionIndex};
pub use display::RecordDisplay;
pub use document::{Paragraph, TrackedDocument};
pub use error::{ExtractError, ExtractResult};
pub use extract::{extract_from_reader, extract_from_xml, extract_tracked_changes};
pub use merge::{merge_deletions, MergedDeletion};
pub use record::{assemble, ChangeRecord, RecordAssembler, SequenceIds};
pub use revision::{FallbackIds, RevisionId, RevisionKind, RevisionMark};
pub use runs::{concat_runs, run_text};
