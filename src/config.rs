//! Extraction configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of words kept on each side of a snippet.
pub const DEFAULT_WINDOW: usize = 5;

/// How the words of a context window are put back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordJoiner {
    /// Separate words with one space.
    #[default]
    Space,
    /// Glue words together with no separator.
    Concatenate,
}

impl WordJoiner {
    pub fn join(self, words: &[&str]) -> String {
        match self {
            WordJoiner::Space => words.join(" "),
            WordJoiner::Concatenate => words.concat(),
        }
    }
}

impl fmt::Display for WordJoiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordJoiner::Space => f.write_str("space"),
            WordJoiner::Concatenate => f.write_str("concatenate"),
        }
    }
}

impl FromStr for WordJoiner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space" => Ok(WordJoiner::Space),
            "concatenate" => Ok(WordJoiner::Concatenate),
            other => Err(format!(
                "unknown joiner `{}` (expected `space` or `concatenate`)",
                other
            )),
        }
    }
}

/// Context window settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    /// Words kept before and after the snippet's first word.
    pub window: usize,
    pub joiner: WordJoiner,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            joiner: WordJoiner::default(),
        }
    }
}

/// Options for a whole extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub context: ContextOptions,
}

impl ExtractOptions {
    pub fn with_window(mut self, window: usize) -> Self {
        self.context.window = window;
        self
    }

    pub fn with_joiner(mut self, joiner: WordJoiner) -> Self {
        self.context.joiner = joiner;
        self
    }
}
