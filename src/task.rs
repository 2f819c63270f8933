//! Task data structure.
//!
//! A `Task` is a single unit of work logged under a day, built from the bracketed
//! metadata of a task line or synthesised from a `DAYOFF` marker.

use serde::{Deserialize, Serialize};

use crate::fields::TaskType;

/// A unit of work logged on a day.
///
/// `percentage` is the share of that day spent on the task. Zero means the share was
/// left unspecified and will be filled in by autocomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_type: TaskType,
    pub description: String,
    #[serde(default)]
    pub percentage: u32,
}

impl Task {
    pub fn new(task_type: TaskType, description: impl Into<String>, percentage: u32) -> Self {
        Task {
            task_type,
            description: description.into(),
            percentage,
        }
    }

    /// Synthetic leave task for a `DAYOFF` day, optionally carrying a reason.
    pub fn day_off(reason: Option<&str>) -> Self {
        let description = match reason {
            Some(reason) => format!("Day off - {}", reason),
            None => "Day off".to_string(),
        };
        Task::new(TaskType::Leave, description, 100)
    }

    pub fn is_unspecified(&self) -> bool {
        self.percentage == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_off_description() {
        assert_eq!(Task::day_off(None), Task::new(TaskType::Leave, "Day off", 100));
        assert_eq!(Task::day_off(Some("Dentist")).description, "Day off - Dentist");
    }

    #[test]
    fn test_serializes_type_by_name() {
        let json = serde_json::to_string(&Task::new(TaskType::Bug, "Crash on save", 40)).unwrap();
        assert_eq!(json, r#"{"task_type":"Bug","description":"Crash on save","percentage":40}"#);
    }
}
