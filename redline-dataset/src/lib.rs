#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/redline/issues/"
)]

//! Dataset building over a corpus of tracked-change documents.
//!
//! ## Modules
//!
//! - [`config`] - TOML configuration for a batch run
//! - [`loader`] - corpus discovery (publication folders and candidate files)
//! - [`runner`] - batch extraction with per-document failure isolation
//! - [`export`] - record serialization (JSON, JSON lines, RON)
//! - [`formatter`] - batch summary text
//! - [`errors`] - error types

pub mod config;
pub mod errors;
pub mod export;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use config::{DatasetConfig, DEFAULT_CONFIG_FILE, DEFAULT_FILE_PATTERN, DEFAULT_MAX_FILES};
pub use errors::{DatasetError, DatasetResult};
pub use export::{export_records, output_file_name, write_records, ExportFormat, OUTPUT_SUFFIX};
pub use formatter::format_summary;
pub use loader::{discover, PublicationFolder};
pub use runner::{run_batch, BatchReport, FailedDocument, ProcessedDocument};
