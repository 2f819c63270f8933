//! Work log parser.
//!
//! The log is line oriented. A line whose first 10 characters form a date opens a new
//! day; any other line carrying bracketed metadata is a task of the current day.
//! Everything else is ignored.
//!
//! ```text
//! 2015-03-02 [SPRINT:12]
//!   [This is an example feature]
//!   [B:This is an example bug]
//!   [O:This is a task that took 70% of the day:70]
//! 2015-03-03 [DAYOFF:Dentist]
//! ```

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{FormatError, Result, StructuralError};
use crate::fields::TaskType;
use crate::sprint::{build_sprints, Day, Sprint};
use crate::task::Task;

/// Default chrono format for the date that starts a day line.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the date prefix on a day line.
const DATE_PREFIX_LEN: usize = 10;

/// What a single log line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Day(Day),
    Task(Task),
    Nothing,
}

/// Lines scanned so far. The last day is the one tasks attach to.
#[derive(Debug, Default)]
struct Scan {
    days: Vec<Day>,
}

impl Scan {
    fn step(mut self, line: Line) -> Result<Self> {
        match line {
            Line::Day(day) => self.days.push(day),
            Line::Task(task) => self
                .days
                .last_mut()
                .ok_or(StructuralError::TaskWithoutDay)?
                .tasks
                .push(task),
            Line::Nothing => {}
        }
        Ok(self)
    }
}

/// Line classifier configured with the date format used by the log.
#[derive(Debug, Clone)]
pub struct LogParser {
    date_format: String,
}

impl Default for LogParser {
    fn default() -> Self {
        LogParser::new(DEFAULT_DATE_FORMAT)
    }
}

impl LogParser {
    pub fn new(date_format: impl Into<String>) -> Self {
        LogParser {
            date_format: date_format.into(),
        }
    }

    /// Parse the whole log into sprints, keeping only days on or after `cutoff`.
    pub fn parse(&self, notes: &str, cutoff: NaiveDate) -> Result<Vec<Sprint>> {
        build_sprints(self.scan(notes)?, cutoff)
    }

    /// Collect the days of the log in input order, each with its tasks attached.
    ///
    /// Failures are tagged with the zero-based index of the offending line.
    pub fn scan(&self, notes: &str) -> Result<Vec<Day>> {
        let scan = notes
            .lines()
            .enumerate()
            .try_fold(Scan::default(), |scan, (index, raw)| {
                self.classify(raw.trim())
                    .and_then(|line| scan.step(line))
                    .map_err(|e| e.at_line(index))
            })?;
        Ok(scan.days)
    }

    /// Classify one trimmed line.
    pub fn classify(&self, line: &str) -> Result<Line> {
        if let Some(date) = self.day_date(line) {
            return Ok(Line::Day(parse_day(date, line)?));
        }
        Ok(match parse_task(line)? {
            Some(task) => Line::Task(task),
            None => Line::Nothing,
        })
    }

    fn day_date(&self, line: &str) -> Option<NaiveDate> {
        let prefix = line.get(..DATE_PREFIX_LEN)?;
        NaiveDate::parse_from_str(prefix, &self.date_format).ok()
    }
}

/// Parse the log with the default date format.
pub fn parse(notes: &str, cutoff: NaiveDate) -> Result<Vec<Sprint>> {
    LogParser::default().parse(notes, cutoff)
}

/// Build a day from its header line.
///
/// `SPRINT:<n>` opens sprint `n` and `DAYOFF[:reason]` logs a full day of leave. Other
/// keywords are accepted and have no effect.
fn parse_day(date: NaiveDate, line: &str) -> Result<Day> {
    let mut day = Day::new(date);
    let Some(fields) = metadata(line)? else {
        return Ok(day);
    };

    match fields[0].to_uppercase().as_str() {
        "SPRINT" => {
            let number = fields.get(1).ok_or(StructuralError::MissingSprintNumber)?;
            day.sprint_number = Some(parse_number(number)?);
        }
        "DAYOFF" => day.tasks.push(Task::day_off(fields.get(1).copied())),
        _ => {}
    }
    Ok(day)
}

/// Build a task from a non-day line, if it carries metadata.
///
/// Accepted shapes: `[Description]`, `[T:Description]`, `[Description:%]` and
/// `[T:Description:%]`, where `T` is a one-letter task type.
fn parse_task(line: &str) -> Result<Option<Task>> {
    let Some(fields) = metadata(line)? else {
        return Ok(None);
    };

    let task = match fields.as_slice() {
        [description] => Task::new(TaskType::Feature, *description, 0),
        [code, description] if code.chars().count() == 1 => {
            Task::new(TaskType::from_letter(code)?, *description, 0)
        }
        [description, percentage] => Task::new(
            TaskType::Feature,
            *description,
            parse_percentage(percentage)?,
        ),
        [code, description, percentage] => Task::new(
            TaskType::from_letter(code)?,
            *description,
            parse_percentage(percentage)?,
        ),
        _ => return Err(FormatError::FieldCount(fields.len()).into()),
    };

    if task.description.is_empty() {
        return Err(FormatError::EmptyDescription.into());
    }
    Ok(Some(task))
}

/// Split the first `[...]` of a line into its colon separated fields.
fn metadata(line: &str) -> std::result::Result<Option<Vec<&str>>, FormatError> {
    let Some(start) = line.find('[') else {
        return Ok(None);
    };
    let inner = &line[start + 1..];
    let end = inner.find(']').ok_or(FormatError::MissingClosingBracket)?;

    let fields: Vec<&str> = inner[..end].split(':').collect();
    if fields.len() > 3 {
        return Err(FormatError::FieldCount(fields.len()));
    }
    Ok(Some(fields))
}

fn parse_number<T: FromStr>(s: &str) -> std::result::Result<T, FormatError> {
    s.trim()
        .parse()
        .map_err(|_| FormatError::InvalidNumber(s.to_string()))
}

fn parse_percentage(s: &str) -> std::result::Result<u32, FormatError> {
    let percentage: u32 = parse_number(s)?;
    if percentage > 100 {
        return Err(FormatError::PercentageOutOfRange(percentage));
    }
    Ok(percentage)
}
