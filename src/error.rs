//! Error types for parsing and reporting.
//!
//! Every failure aborts the run. Format and structural problems found while scanning
//! the log are wrapped in [`Error::AtLine`] with the zero-based line index.

use chrono::NaiveDate;
use thiserror::Error;

/// Malformed bracket metadata or field values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Missing closing ]")]
    MissingClosingBracket,
    #[error("Invalid metadata, expected between 1 and 3 parameters but got {0}")]
    FieldCount(usize),
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("Percentage {0} is out of range, expected 0 to 100")]
    PercentageOutOfRange(u32),
    #[error("Unknown task type '{0}', expected one of F, B, O, L")]
    UnknownTaskType(String),
    #[error("Task description cannot be empty")]
    EmptyDescription,
}

/// Log content that is well-formed line by line but out of place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("Task with no day found!")]
    TaskWithoutDay,
    #[error("Missing sprint number")]
    MissingSprintNumber,
    #[error("First day ({0}) doesn't have a sprint!")]
    FirstDayWithoutSprint(NaiveDate),
}

/// A sprint that breaks one of the reporting invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("SPRINT {sprint}: has {days} days. Sprints must have {expected} days!")]
    TooManyDays { sprint: i32, days: usize, expected: usize },
    #[error("SPRINT {sprint}: Day {date} appears more than once.")]
    DuplicateDay { sprint: i32, date: NaiveDate },
    #[error("SPRINT {sprint}, Day {date}: must have at least 1 task.")]
    NoTasks { sprint: i32, date: NaiveDate },
    #[error("SPRINT {sprint}, Day {date}: Sum of all tasks must be 100% at most.")]
    OverAllocated { sprint: i32, date: NaiveDate },
    #[error("SPRINT {sprint}, Day {date}: Each task must have some percentage assigned when day is already at 100%.")]
    UnspecifiedAtFull { sprint: i32, date: NaiveDate },
    #[error("SPRINT {sprint}, Day {date}: Sum of all task must be 100% when all the tasks have percentages assigned.")]
    UnderAllocated { sprint: i32, date: NaiveDate },
    #[error("SPRINT {sprint}, Day {date}: Autocomplete couldn't get 100% for this day.")]
    AutocompleteFailed { sprint: i32, date: NaiveDate },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{line}: {error}")]
    AtLine { line: usize, error: Box<Error> },
}

impl Error {
    /// Attribute this error to a zero-based input line.
    pub fn at_line(self, line: usize) -> Self {
        Error::AtLine { line, error: Box::new(self) }
    }

    /// The underlying error with any line attribution removed.
    pub fn kind(&self) -> &Error {
        match self {
            Error::AtLine { error, .. } => error.kind(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
