//! Container loading.
//!
//! A document is a zip bundle; the main markup lives in a single entry. The
//! entry is read fully into memory and decoded as UTF-8 before parsing.

use crate::error::{ExtractError, ExtractResult};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Location of the main document markup inside the container.
pub const DOCUMENT_ENTRY: &str = "word/document.xml";

/// Largest markup entry that will be read, in bytes.
pub const MAX_DOCUMENT_BYTES: u64 = 256 * 1024 * 1024;

/// Upper bound on the preallocation taken from the entry's declared size.
const CAPACITY_HINT: u64 = 1 << 24;

/// Read the main markup entry of the container at `path`.
pub fn read_document_xml(path: &Path) -> ExtractResult<String> {
    let file = File::open(path)
        .map_err(|e| ExtractError::container(format!("{}: {}", path.display(), e)))?;
    read_document_xml_from(BufReader::new(file))
}

/// Read the main markup entry from an already opened container.
pub fn read_document_xml_from<R: Read + Seek>(reader: R) -> ExtractResult<String> {
    read_bounded(reader, MAX_DOCUMENT_BYTES)
}

/// The declared entry size is untrusted: it only sizes the initial buffer,
/// and the read itself stops past `limit`.
fn read_bounded<R: Read + Seek>(reader: R, limit: u64) -> ExtractResult<String> {
    let mut archive = zip::ZipArchive::new(reader)
        .map_err(|e| ExtractError::container(format!("not a zip archive: {}", e)))?;

    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|e| ExtractError::container(format!("cannot find {}: {}", DOCUMENT_ENTRY, e)))?;

    let hint = usize::try_from(entry.size().min(CAPACITY_HINT).min(limit)).unwrap_or(0);
    let mut bytes = Vec::with_capacity(hint);
    (&mut entry)
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| ExtractError::container(format!("failed to read {}: {}", DOCUMENT_ENTRY, e)))?;

    if bytes.len() as u64 > limit {
        return Err(ExtractError::container(format!(
            "{} is larger than {} bytes",
            DOCUMENT_ENTRY, limit
        )));
    }

    let xml = String::from_utf8(bytes)
        .map_err(|e| ExtractError::markup(format!("{} is not valid UTF-8: {}", DOCUMENT_ENTRY, e)))?;

    // Word writes a byte order mark on some documents.
    match xml.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(xml),
    }
}
