//! Insertion-deletion correlation.
//!
//! A merged deletion and an insertion sharing an identifier form one
//! replacement. Matching does not consume the insertion: two deletions with
//! the same identifier both pair with the first insertion carrying it.
//! Insertions whose identifier matches no deletion become pure insertions.

use crate::merge::MergedDeletion;
use crate::revision::{RevisionId, RevisionMark};
use std::collections::{HashMap, HashSet};

/// A reconciled edit, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Deletion {
        id: RevisionId,
        original: String,
    },
    Insertion {
        id: RevisionId,
        correction: String,
    },
    Replacement {
        id: RevisionId,
        original: String,
        correction: String,
    },
}

impl Edit {
    pub fn id(&self) -> &RevisionId {
        match self {
            Edit::Deletion { id, .. } | Edit::Insertion { id, .. } | Edit::Replacement { id, .. } => {
                id
            }
        }
    }

    /// Text removed by the edit, if any.
    pub fn original(&self) -> Option<&str> {
        match self {
            Edit::Deletion { original, .. } | Edit::Replacement { original, .. } => {
                Some(original.as_str())
            }
            Edit::Insertion { .. } => None,
        }
    }

    /// Text added by the edit, if any.
    pub fn correction(&self) -> Option<&str> {
        match self {
            Edit::Insertion { correction, .. } | Edit::Replacement { correction, .. } => {
                Some(correction.as_str())
            }
            Edit::Deletion { .. } => None,
        }
    }
}

/// Insertions of one paragraph indexed by identifier.
///
/// Identifiers are not unique, so each maps to every insertion carrying it,
/// in document order.
#[derive(Debug)]
pub struct InsertionIndex<'a> {
    insertions: &'a [RevisionMark],
    by_id: HashMap<&'a RevisionId, Vec<usize>>,
}

impl<'a> InsertionIndex<'a> {
    pub fn new(insertions: &'a [RevisionMark]) -> Self {
        let mut by_id: HashMap<&'a RevisionId, Vec<usize>> = HashMap::new();
        for (position, mark) in insertions.iter().enumerate() {
            by_id.entry(&mark.id).or_default().push(position);
        }
        Self { insertions, by_id }
    }

    /// Every insertion carrying `id`, in document order.
    pub fn matching(&self, id: &RevisionId) -> impl Iterator<Item = &'a RevisionMark> + '_ {
        let insertions = self.insertions;
        self.by_id
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&position| &insertions[position])
    }

    /// The first insertion carrying `id`.
    pub fn first(&self, id: &RevisionId) -> Option<&'a RevisionMark> {
        self.matching(id).next()
    }
}

/// Reconcile a paragraph's merged deletions with its insertions.
///
/// Deletion-derived edits come first, in deletion order, followed by the
/// unmatched insertions in document order.
pub fn correlate(deletions: &[MergedDeletion], insertions: &[RevisionMark]) -> Vec<Edit> {
    let index = InsertionIndex::new(insertions);
    let mut edits = Vec::with_capacity(deletions.len() + insertions.len());

    for deletion in deletions {
        let edit = match index.first(&deletion.id) {
            Some(insertion) => Edit::Replacement {
                id: deletion.id.clone(),
                original: deletion.text.clone(),
                correction: insertion.text.clone(),
            },
            None => Edit::Deletion {
                id: deletion.id.clone(),
                original: deletion.text.clone(),
            },
        };
        edits.push(edit);
    }

    let deleted_ids: HashSet<&RevisionId> = deletions.iter().map(|d| &d.id).collect();
    for insertion in insertions {
        if !deleted_ids.contains(&insertion.id) {
            edits.push(Edit::Insertion {
                id: insertion.id.clone(),
                correction: insertion.text.clone(),
            });
        }
    }

    edits
}
