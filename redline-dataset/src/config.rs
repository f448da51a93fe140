//! Dataset configuration, loaded from TOML.
//!
//! ```toml
//! input_dir = "dataset-proofreading"
//! output_dir = "results"
//! file_pattern = '^CORR_.*\.docx$'
//! max_files = 10
//! format = "json"
//!
//! [context]
//! window = 5
//! joiner = "space"
//! ```

use crate::errors::{DatasetError, DatasetResult};
use crate::export::ExportFormat;
use redline::{ContextOptions, ExtractOptions};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Documents eligible for extraction: corrected proofs.
pub const DEFAULT_FILE_PATTERN: &str = r"^CORR_.*\.docx$";

/// Configuration file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "redline.toml";

/// Documents processed per run unless configured otherwise.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Configuration for a dataset batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding one sub-directory per publication.
    pub input_dir: PathBuf,
    /// Directory receiving the dataset files.
    pub output_dir: PathBuf,
    /// Regex matched against file names inside a publication folder.
    pub file_pattern: String,
    /// Stop after this many processed documents; 0 means no limit.
    pub max_files: usize,
    pub format: ExportFormat,
    pub context: ContextOptions,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("dataset-proofreading"),
            output_dir: PathBuf::from("results"),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            max_files: DEFAULT_MAX_FILES,
            format: ExportFormat::default(),
            context: ContextOptions::default(),
        }
    }
}

impl DatasetConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    ///
    /// Meant for the implicit [`DEFAULT_CONFIG_FILE`]; use [`Self::open`]
    /// for a path the user named.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::open(path)
    }

    /// Load from a TOML file that must exist.
    pub fn open(path: &Path) -> DatasetResult<Self> {
        if !path.is_file() {
            return Err(DatasetError::Config {
                path: path.display().to_string(),
                message: "no such configuration file".to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content).map_err(|message| DatasetError::Config {
            path: path.display().to_string(),
            message,
        })
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Compile the file name pattern.
    pub fn file_matcher(&self) -> DatasetResult<Regex> {
        Regex::new(&self.file_pattern).map_err(|e| DatasetError::Config {
            path: "file_pattern".to_string(),
            message: e.to_string(),
        })
    }

    /// The document limit, if any.
    pub fn max_files(&self) -> Option<usize> {
        match self.max_files {
            0 => None,
            n => Some(n),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            context: self.context.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline::WordJoiner;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(DatasetConfig::from_toml("").unwrap(), DatasetConfig::default());
    }

    #[test]
    fn reads_all_fields() {
        let config = DatasetConfig::from_toml(
            r#"
input_dir = "proofs"
output_dir = "out"
file_pattern = '^FINAL_.*\.docx$'
max_files = 0
format = "jsonl"

[context]
window = 3
joiner = "concatenate"
"#,
        )
        .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("proofs"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.max_files(), None);
        assert_eq!(config.format, ExportFormat::JsonLines);
        assert_eq!(config.context.window, 3);
        assert_eq!(config.context.joiner, WordJoiner::Concatenate);
        assert!(config.file_matcher().unwrap().is_match("FINAL_draft.docx"));
    }

    #[test]
    fn partial_context_keeps_defaults() {
        let config = DatasetConfig::from_toml("[context]\nwindow = 2\n").unwrap();
        assert_eq!(config.context.window, 2);
        assert_eq!(config.context.joiner, WordJoiner::Space);
        assert_eq!(config.max_files(), Some(DEFAULT_MAX_FILES));
    }

    #[test]
    fn default_pattern_matches_corrected_proofs() {
        let matcher = DatasetConfig::default().file_matcher().unwrap();
        assert!(matcher.is_match("CORR_2023.00274.docx"));
        assert!(!matcher.is_match("2023.00274.docx"));
        assert!(!matcher.is_match("~$CORR_2023.00274.docx"));
        assert!(!matcher.is_match("CORR_notes.txt"));
    }

    #[test]
    fn invalid_pattern_is_config_error() {
        let config = DatasetConfig {
            file_pattern: "(".into(),
            ..DatasetConfig::default()
        };
        assert!(matches!(config.file_matcher(), Err(DatasetError::Config { .. })));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(DatasetConfig::from_toml("format = \"xlsx\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_config_error() {
        let err = DatasetConfig::open(Path::new("/nonexistent/prod.toml")).unwrap_err();
        assert!(matches!(err, DatasetError::Config { .. }), "{:?}", err);
        assert!(err.to_string().contains("prod.toml"));
    }

    #[test]
    fn open_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prod.toml");
        fs::write(&path, "max_files = 3\n").unwrap();

        assert_eq!(DatasetConfig::open(&path).unwrap().max_files(), Some(3));
        assert_eq!(DatasetConfig::load(&path).unwrap().max_files(), Some(3));
    }

    #[test]
    fn missing_file_is_default() {
        let config = DatasetConfig::load(Path::new("/nonexistent/redline.toml")).unwrap();
        assert_eq!(config, DatasetConfig::default());
    }
}
