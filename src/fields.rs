//! Enumerations and field types for logged work.
//!
//! Task types are written in the log as a single letter (`F`, `B`, `O`, `L`) and
//! reported under their full name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Category of a logged task.
///
/// Variants are ordered by their source letter, which is also the order rows are
/// listed in within a sprint's report block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TaskType {
    Bug,
    #[default]
    Feature,
    Leave,
    Other,
}

/// Letter used in the log notation for each task type.
const TYPE_LETTERS: [(char, TaskType); 4] = [
    ('B', TaskType::Bug),
    ('F', TaskType::Feature),
    ('L', TaskType::Leave),
    ('O', TaskType::Other),
];

impl TaskType {
    /// Map a one-letter code (case-insensitive) to a task type.
    pub fn from_letter(code: &str) -> Result<Self, FormatError> {
        let mut chars = code.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(FormatError::UnknownTaskType(code.to_string())),
        };
        TYPE_LETTERS
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, t)| *t)
            .ok_or_else(|| FormatError::UnknownTaskType(code.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            TaskType::Bug => "Bug",
            TaskType::Feature => "Feature",
            TaskType::Leave => "Leave",
            TaskType::Other => "Other",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letter_is_case_insensitive() {
        assert_eq!(TaskType::from_letter("b").unwrap(), TaskType::Bug);
        assert_eq!(TaskType::from_letter("F").unwrap(), TaskType::Feature);
        assert_eq!(TaskType::from_letter("o").unwrap(), TaskType::Other);
        assert_eq!(TaskType::from_letter("L").unwrap(), TaskType::Leave);
    }

    #[test]
    fn test_from_letter_rejects_unknown() {
        assert_eq!(
            TaskType::from_letter("X"),
            Err(FormatError::UnknownTaskType("X".to_string()))
        );
        assert!(TaskType::from_letter("").is_err());
        assert!(TaskType::from_letter("FB").is_err());
    }

    #[test]
    fn test_type_order_follows_letters() {
        let mut types = vec![TaskType::Other, TaskType::Feature, TaskType::Leave, TaskType::Bug];
        types.sort();
        assert_eq!(types, vec![TaskType::Bug, TaskType::Feature, TaskType::Leave, TaskType::Other]);
        assert_eq!(TaskType::default(), TaskType::Feature);
        assert_eq!(TaskType::Bug.to_string(), "Bug");
    }
}
