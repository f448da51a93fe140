//! Revision marks: the tracked deletions and insertions inside a paragraph.
//!
//! A mark's identifier comes from author-supplied markup. It is a best-effort
//! correlation key, not a primary key: several physically distinct elements
//! may share one identifier (one logical edit split across differently
//! formatted runs), and an identifier may be missing altogether. Missing
//! identifiers are replaced with a [`RevisionId::Synthetic`] value drawn from
//! an explicit [`FallbackIds`] generator, which never equals a declared id.

use crate::runs::{run_text, wml_attr, wml_descendants};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a revision mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevisionId {
    /// The `w:id` attribute as written in the markup.
    Declared(String),
    /// Substituted for a mark without a `w:id`.
    Synthetic(u64),
}

impl RevisionId {
    pub fn declared(id: impl Into<String>) -> Self {
        RevisionId::Declared(id.into())
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, RevisionId::Synthetic(_))
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionId::Declared(id) => f.write_str(id),
            RevisionId::Synthetic(n) => write!(f, "<fallback {}>", n),
        }
    }
}

/// Monotonic source of synthetic identifiers.
///
/// One generator is threaded through a whole document scan, so every
/// id-less mark in that document receives a distinct identifier.
#[derive(Debug, Default)]
pub struct FallbackIds {
    issued: u64,
}

impl FallbackIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next synthetic identifier (starting at 1).
    pub fn issue(&mut self) -> RevisionId {
        self.issued += 1;
        RevisionId::Synthetic(self.issued)
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Whether a mark removes or adds text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevisionKind {
    Deletion,
    Insertion,
}

impl RevisionKind {
    /// The revision element (`w:del` / `w:ins`).
    fn element(self) -> &'static str {
        match self {
            RevisionKind::Deletion => "del",
            RevisionKind::Insertion => "ins",
        }
    }

    /// The text element carrying the mark's content (`w:delText` / `w:t`).
    fn text_element(self) -> &'static str {
        match self {
            RevisionKind::Deletion => "delText",
            RevisionKind::Insertion => "t",
        }
    }
}

/// A single tracked deletion or insertion, scoped to one paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionMark {
    pub id: RevisionId,
    pub kind: RevisionKind,
    pub text: String,
}

impl RevisionMark {
    pub fn new(id: RevisionId, kind: RevisionKind, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
        }
    }

    /// A deletion with a declared identifier.
    pub fn deletion(id: &str, text: impl Into<String>) -> Self {
        Self::new(RevisionId::declared(id), RevisionKind::Deletion, text)
    }

    /// An insertion with a declared identifier.
    pub fn insertion(id: &str, text: impl Into<String>) -> Self {
        Self::new(RevisionId::declared(id), RevisionKind::Insertion, text)
    }
}

/// Collect the marks of one kind nested anywhere inside `paragraph`, in
/// document order.
///
/// Marks whose text is empty or whitespace-only are dropped.
pub fn scan_marks(
    paragraph: Node,
    kind: RevisionKind,
    fallback: &mut FallbackIds,
) -> Vec<RevisionMark> {
    let mut marks = Vec::new();

    for element in wml_descendants(paragraph, kind.element()) {
        let text = run_text(wml_descendants(element, kind.text_element()));
        if text.trim().is_empty() {
            continue;
        }

        let id = match wml_attr(element, "id") {
            Some(id) => RevisionId::declared(id),
            None => fallback.issue(),
        };
        marks.push(RevisionMark::new(id, kind, text));
    }

    marks
}
