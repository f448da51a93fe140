//! Deletion merging.
//!
//! Word splits one logical deletion into several `w:del` elements when the
//! deleted runs carry different formatting. Consecutive fragments sharing an
//! identifier are fused back into one deletion.

use crate::revision::{RevisionId, RevisionMark};
use serde::{Deserialize, Serialize};

/// One logical deletion, possibly spanning several marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedDeletion {
    pub id: RevisionId,
    pub text: String,
}

impl MergedDeletion {
    pub fn new(id: RevisionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl From<&RevisionMark> for MergedDeletion {
    fn from(mark: &RevisionMark) -> Self {
        Self::new(mark.id.clone(), mark.text.clone())
    }
}

/// Fuse runs of consecutive deletions that share an identifier.
///
/// Fragments are joined with a single space. Only adjacent marks are fused:
/// `[1, 2, 1]` yields three merged deletions.
pub fn merge_deletions(deletions: &[RevisionMark]) -> Vec<MergedDeletion> {
    let mut merged = Vec::new();
    let mut marks = deletions.iter();

    let mut current = match marks.next() {
        Some(first) => MergedDeletion::from(first),
        None => return merged,
    };

    for mark in marks {
        if mark.id == current.id {
            current.text.push(' ');
            current.text.push_str(&mark.text);
        } else {
            merged.push(std::mem::replace(&mut current, MergedDeletion::from(mark)));
        }
    }

    merged.push(current);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::{FallbackIds, RevisionKind};

    #[test]
    fn merges_shared_ids_in_order() {
        let deletions = vec![
            RevisionMark::deletion("1", "A"),
            RevisionMark::deletion("1", "B"),
            RevisionMark::deletion("2", "C"),
        ];

        assert_eq!(
            merge_deletions(&deletions),
            vec![
                MergedDeletion::new(RevisionId::declared("1"), "A B"),
                MergedDeletion::new(RevisionId::declared("2"), "C"),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(merge_deletions(&[]).is_empty());
    }

    #[test]
    fn non_adjacent_fragments_stay_apart() {
        let deletions = vec![
            RevisionMark::deletion("1", "A"),
            RevisionMark::deletion("2", "B"),
            RevisionMark::deletion("1", "C"),
        ];

        let merged = merge_deletions(&deletions);
        let texts: Vec<&str> = merged.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn synthetic_ids_never_merge() {
        let mut fallback = FallbackIds::new();
        let deletions = vec![
            RevisionMark::new(fallback.issue(), RevisionKind::Deletion, "x"),
            RevisionMark::new(fallback.issue(), RevisionKind::Deletion, "y"),
        ];

        assert_eq!(merge_deletions(&deletions).len(), 2);
    }
}
