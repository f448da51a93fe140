//! Whole-document extraction entry points.

use crate::config::ExtractOptions;
use crate::document::TrackedDocument;
use crate::error::ExtractResult;
use crate::record::{assemble, ChangeRecord};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

/// Extract every tracked change of the container at `path`.
///
/// Returns records in reading order with ids starting at 1. A document
/// without revisions yields an empty list.
pub fn extract_tracked_changes(
    path: &Path,
    options: &ExtractOptions,
) -> ExtractResult<Vec<ChangeRecord>> {
    let document = TrackedDocument::open(path)?;
    let records = assemble(&document, options);
    debug!(path = %path.display(), records = records.len(), "extracted tracked changes");
    Ok(records)
}

/// Extract from an already opened container.
pub fn extract_from_reader<R: Read + Seek>(
    reader: R,
    options: &ExtractOptions,
) -> ExtractResult<Vec<ChangeRecord>> {
    let document = TrackedDocument::from_reader(reader)?;
    Ok(assemble(&document, options))
}

/// Extract from raw document markup.
pub fn extract_from_xml(xml: &str, options: &ExtractOptions) -> ExtractResult<Vec<ChangeRecord>> {
    let document = TrackedDocument::parse(xml)?;
    Ok(assemble(&document, options))
}
