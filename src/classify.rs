//! Change classification.

use crate::correlate::Edit;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type tag of an emitted change record.
///
/// Serialized as its dataset tag string in every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Deletion,
    Insertion,
    /// A deletion replaced by an insertion with the same identifier.
    Both,
    /// A replacement whose correction is a case-insensitive prefix of the original.
    PartialWordModification,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Deletion => "deletion",
            ChangeType::Insertion => "insertion",
            ChangeType::Both => "both",
            ChangeType::PartialWordModification => "partial-word modification",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deletion" => Ok(ChangeType::Deletion),
            "insertion" => Ok(ChangeType::Insertion),
            "both" => Ok(ChangeType::Both),
            "partial-word modification" => Ok(ChangeType::PartialWordModification),
            other => Err(format!("unknown change type `{}`", other)),
        }
    }
}

impl Serialize for ChangeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChangeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// True when `corrected` shortens `original` from the end, ignoring case.
///
/// Catches stem trims such as "informations" -> "information". The check only
/// runs in this direction: suffix trims, mid-word edits and lengthening
/// corrections ("color" -> "colour") are not detected.
pub fn is_partial_word_modification(original: &str, corrected: &str) -> bool {
    original.chars().count() != corrected.chars().count()
        && original.to_lowercase().starts_with(&corrected.to_lowercase())
}

/// Classify a reconciled edit.
pub fn classify(edit: &Edit) -> ChangeType {
    match edit {
        Edit::Deletion { .. } => ChangeType::Deletion,
        Edit::Insertion { .. } => ChangeType::Insertion,
        Edit::Replacement {
            original,
            correction,
            ..
        } => {
            if is_partial_word_modification(original, correction) {
                ChangeType::PartialWordModification
            } else {
                ChangeType::Both
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::RevisionId;

    fn replacement(original: &str, correction: &str) -> Edit {
        Edit::Replacement {
            id: RevisionId::declared("5"),
            original: original.to_string(),
            correction: correction.to_string(),
        }
    }

    #[test]
    fn trims_are_partial_word_modifications() {
        assert!(is_partial_word_modification("testing", "test"));
        assert!(is_partial_word_modification("informations", "information"));
        assert!(is_partial_word_modification("Datas", "data"));
    }

    #[test]
    fn lengthening_is_not_detected() {
        assert!(!is_partial_word_modification("color", "colour"));
        assert_eq!(classify(&replacement("color", "colour")), ChangeType::Both);
    }

    #[test]
    fn suffix_and_mid_word_edits_are_not_detected() {
        assert!(!is_partial_word_modification("unclear", "clear"));
        assert!(!is_partial_word_modification("organise", "organize"));
    }

    #[test]
    fn equal_length_is_never_partial() {
        assert!(!is_partial_word_modification("Paris", "paris"));
    }

    #[test]
    fn default_types() {
        assert_eq!(
            classify(&Edit::Deletion {
                id: RevisionId::declared("1"),
                original: "very".into()
            }),
            ChangeType::Deletion
        );
        assert_eq!(
            classify(&Edit::Insertion {
                id: RevisionId::declared("2"),
                correction: "newly".into()
            }),
            ChangeType::Insertion
        );
        assert_eq!(
            classify(&replacement("informations", "information")),
            ChangeType::PartialWordModification
        );
    }

    #[test]
    fn parses_dataset_tags() {
        assert_eq!(
            "partial-word modification".parse::<ChangeType>(),
            Ok(ChangeType::PartialWordModification)
        );
        assert!("replace".parse::<ChangeType>().is_err());
        let parsed: ChangeType = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(parsed, ChangeType::Both);
    }

    #[test]
    fn serializes_as_dataset_tags() {
        let tags: Vec<String> = [
            ChangeType::Deletion,
            ChangeType::Insertion,
            ChangeType::Both,
            ChangeType::PartialWordModification,
        ]
        .iter()
        .map(|t| serde_json::to_string(t).unwrap())
        .collect();

        assert_eq!(
            tags,
            vec![
                "\"deletion\"",
                "\"insertion\"",
                "\"both\"",
                "\"partial-word modification\""
            ]
        );
    }
}
