//! Batch runner: extracts every publication folder of a corpus and writes
//! one dataset file per folder.

use crate::config::DatasetConfig;
use crate::errors::{DatasetError, DatasetResult};
use crate::export::{export_records, output_file_name};
use crate::loader::{discover, PublicationFolder};
use redline::{extract_tracked_changes, ExtractOptions};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// A document whose records were exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedDocument {
    pub folder: String,
    pub source: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

/// A document that was skipped because extraction failed.
#[derive(Debug)]
pub struct FailedDocument {
    pub folder: String,
    pub source: PathBuf,
    pub error: DatasetError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<ProcessedDocument>,
    pub failures: Vec<FailedDocument>,
}

impl BatchReport {
    /// Total records exported.
    pub fn record_count(&self) -> usize {
        self.processed.iter().map(|doc| doc.records).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run extraction over the corpus described by `config`.
///
/// Per-document extraction failures are recorded in the report and never
/// abort the run. Failing to list the corpus or to write a dataset file
/// does.
pub fn run_batch(config: &DatasetConfig) -> DatasetResult<BatchReport> {
    let pattern = config.file_matcher()?;
    let options = config.extract_options();
    let folders = discover(&config.input_dir, &pattern)?;

    fs::create_dir_all(&config.output_dir).map_err(|e| DatasetError::Io {
        path: config.output_dir.display().to_string(),
        source: e,
    })?;

    info!(
        input = %config.input_dir.display(),
        folders = folders.len(),
        "starting batch"
    );

    let mut report = BatchReport::default();
    for folder in &folders {
        process_folder(folder, config, &options, &mut report)?;

        if let Some(max) = config.max_files() {
            if report.processed.len() >= max {
                info!(max_files = max, "reached document limit");
                break;
            }
        }
    }

    info!(
        processed = report.processed.len(),
        records = report.record_count(),
        failures = report.failures.len(),
        "batch finished"
    );
    Ok(report)
}

/// Try the folder's candidates in order until one extracts.
fn process_folder(
    folder: &PublicationFolder,
    config: &DatasetConfig,
    options: &ExtractOptions,
    report: &mut BatchReport,
) -> DatasetResult<()> {
    for source in &folder.candidates {
        match extract_tracked_changes(source, options) {
            Ok(records) => {
                let output = config
                    .output_dir
                    .join(output_file_name(&folder.name, config.format));
                export_records(&records, &output, config.format)?;

                info!(
                    folder = %folder.name,
                    source = %source.display(),
                    records = records.len(),
                    "exported dataset"
                );
                report.processed.push(ProcessedDocument {
                    folder: folder.name.clone(),
                    source: source.clone(),
                    output,
                    records: records.len(),
                });
                return Ok(());
            }
            Err(e) => {
                let error = DatasetError::Extract {
                    path: source.display().to_string(),
                    source: e,
                };
                warn!(folder = %folder.name, %error, "skipping document");
                report.failures.push(FailedDocument {
                    folder: folder.name.clone(),
                    source: source.clone(),
                    error,
                });
            }
        }
    }

    Ok(())
}
