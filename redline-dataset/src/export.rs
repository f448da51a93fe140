//! Record export.
//!
//! One file per source document, one row (object) per record.

use crate::errors::{DatasetError, DatasetResult};
use redline::ChangeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Suffix appended to the publication folder name for dataset files.
pub const OUTPUT_SUFFIX: &str = "dataset-xml-corrections";

/// Serialization format of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    #[serde(rename = "jsonl")]
    JsonLines,
    /// Pretty-printed RON list
    Ron,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::JsonLines => "jsonl",
            ExportFormat::Ron => "ron",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "jsonl" => Ok(ExportFormat::JsonLines),
            "ron" => Ok(ExportFormat::Ron),
            other => Err(format!(
                "unknown format `{}` (expected json, jsonl or ron)",
                other
            )),
        }
    }
}

/// Dataset file name for a publication folder.
pub fn output_file_name(folder: &str, format: ExportFormat) -> String {
    format!("{}-{}.{}", folder, OUTPUT_SUFFIX, format.extension())
}

/// Serialize records to `writer`.
pub fn write_records<W: Write>(
    records: &[ChangeRecord],
    mut writer: W,
    format: ExportFormat,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
        ExportFormat::JsonLines => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
        ExportFormat::Ron => {
            let text = ron::ser::to_string_pretty(records, ron::ser::PrettyConfig::default())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{}", text)?;
        }
    }
    writer.flush()
}

/// Write records to the file at `path`, replacing it if present.
pub fn export_records(
    records: &[ChangeRecord],
    path: &Path,
    format: ExportFormat,
) -> DatasetResult<()> {
    let file = File::create(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    write_records(records, BufWriter::new(file), format).map_err(|e| DatasetError::Export {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
