//! # sprep - Sprint Report Generator
//!
//! Turns a free-form daily work log into a per-sprint time allocation report.
//!
//! ## Log Format
//!
//! One line opens each day, starting with its date. Tasks for that day follow on their
//! own lines, annotated with bracketed metadata:
//!
//! ```text
//! 2015-03-02 [SPRINT:12]
//!     Worked on the search page [Search results paging:60]
//!     [B:Crash when saving drafts]
//! 2015-03-03 [DAYOFF:Public holiday]
//! 2015-03-04
//!     [O:Planning meeting:25]
//!     [Search results paging]
//! ```
//!
//! - `[SPRINT:<n>]` on a day line starts sprint `n`. Later days belong to it.
//! - `[DAYOFF]` or `[DAYOFF:<reason>]` logs the whole day as leave.
//! - Task metadata is `[Description]`, `[T:Description]`, `[Description:%]` or
//!   `[T:Description:%]`, where `T` is `F`eature (default), `B`ug, `O`ther or `L`eave.
//! - Tasks without a percentage share whatever is left of their day evenly.
//!
//! ## Report
//!
//! Every sprint of exactly ten days is validated and reported as one tab separated row
//! per task type and description, with the share of the sprint spent on it:
//!
//! ```text
//! 12	Ana	42,5%	Feature	Search results paging
//! ```
//!
//! Shorter sprints are listed with a notice and skipped.
//!
//! ## Key Commands
//!
//! - `sprep report <log> <name>` - Print the report
//! - `sprep parse <log>` - Dump the parsed sprints as JSON
//! - `sprep completions <shell>` - Shell completion script

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod parser;
pub mod report;
pub mod sprint;
pub mod task;

pub use error::{Error, FormatError, Result, StructuralError, ValidationError};
pub use fields::TaskType;
pub use parser::{parse, LogParser};
pub use report::generate_report;
pub use sprint::{Day, Sprint, SPRINT_DAYS};
pub use task::Task;
