//! Text summary of a batch run.

use crate::runner::BatchReport;
use std::fmt::Write;
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a summary of a batch run.
pub fn format_summary(report: &BatchReport) -> String {
    let mut output = String::new();

    let status = if report.is_clean() { "DONE" } else { "DONE WITH ERRORS" };
    writeln!(
        output,
        "{}: {} documents, {} records, {} skipped",
        status,
        report.processed.len(),
        report.record_count(),
        report.failures.len()
    )
    .unwrap();

    for doc in &report.processed {
        writeln!(
            output,
            "  ok    {}/{} -> {} ({} records)",
            doc.folder,
            file_name(&doc.source),
            file_name(&doc.output),
            doc.records
        )
        .unwrap();
    }

    for failure in &report.failures {
        writeln!(
            output,
            "  skip  {}/{}: {}",
            failure.folder,
            file_name(&failure.source),
            failure.error
        )
        .unwrap();
    }

    output
}
