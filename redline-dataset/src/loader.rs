//! Corpus discovery.
//!
//! The corpus is a directory of publication folders, each holding the
//! documents of one publication. Only direct children are considered.

use crate::errors::{DatasetError, DatasetResult};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// A publication folder and its candidate documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationFolder {
    /// Folder name, used to name the dataset file
    pub name: String,
    pub path: PathBuf,
    /// Matching files, sorted by name
    pub candidates: Vec<PathBuf>,
}

/// List publication folders under `input_dir` with their matching files.
///
/// Folders are returned sorted by name; folders without a matching file are
/// left out.
pub fn discover(input_dir: &Path, pattern: &Regex) -> DatasetResult<Vec<PublicationFolder>> {
    let mut folders = Vec::new();

    for path in sorted_entries(input_dir)? {
        if !path.is_dir() {
            continue;
        }

        let candidates: Vec<PathBuf> = sorted_entries(&path)?
            .into_iter()
            .filter(|candidate| candidate.is_file())
            .filter(|candidate| {
                candidate
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map_or(false, |name| pattern.is_match(name))
            })
            .collect();

        if candidates.is_empty() {
            continue;
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        folders.push(PublicationFolder {
            name,
            path,
            candidates,
        });
    }

    Ok(folders)
}

fn sorted_entries(dir: &Path) -> DatasetResult<Vec<PathBuf>> {
    let io_error = |e: std::io::Error| DatasetError::Io {
        path: dir.display().to_string(),
        source: e,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        paths.push(entry.map_err(io_error)?.path());
    }
    paths.sort();
    Ok(paths)
}
