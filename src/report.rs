//! Sprint validation, percentage autocomplete and the tab separated report.
//!
//! Each full sprint is validated, its unspecified task percentages are filled in, and
//! tasks sharing a type and description are summed into one row:
//!
//! ```text
//! <sprint>\t<name>\t<percent of sprint>%\t<task type>\t<description>
//! ```

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::fields::TaskType;
use crate::sprint::{Day, Sprint, SPRINT_DAYS};

/// Percentage points that make up one full day.
const FULL_DAY: u32 = 100;

/// Validate, autocomplete and render every sprint.
///
/// Sprints shorter than [`SPRINT_DAYS`] only get a notice. The days of reported sprints
/// are replaced by their autocompleted versions.
pub fn generate_report(sprints: &mut [Sprint], name: &str) -> Result<String> {
    let mut report = String::new();

    for sprint in sprints.iter_mut() {
        if sprint.days.len() < SPRINT_DAYS {
            debug!(sprint = sprint.sprint_number, days = sprint.days.len(), "skipping short sprint");
            report.push_str(&format!(
                "SPRINT {} ignored because it has only {} day(s).\n",
                sprint.sprint_number,
                sprint.days.len()
            ));
            report.push('\n');
            continue;
        }

        validate_sprint(sprint)?;
        sprint.days = sprint
            .days
            .iter()
            .map(|day| complete_day(sprint.sprint_number, day))
            .collect::<std::result::Result<_, _>>()?;

        for ((task_type, description), points) in aggregate(sprint) {
            report.push_str(&format!(
                "{}\t{}\t{}%\t{}\t{}\n",
                sprint.sprint_number,
                name,
                format_share(points),
                task_type,
                description
            ));
        }
        report.push('\n');
    }

    Ok(report)
}

/// Check the sprint invariants, stopping at the first rule that is broken.
pub fn validate_sprint(sprint: &Sprint) -> std::result::Result<(), ValidationError> {
    let number = sprint.sprint_number;

    if sprint.days.len() > SPRINT_DAYS {
        return Err(ValidationError::TooManyDays {
            sprint: number,
            days: sprint.days.len(),
            expected: SPRINT_DAYS,
        });
    }

    let mut seen = HashSet::new();
    if let Some(day) = sprint.days.iter().find(|d| !seen.insert(d.date)) {
        return Err(ValidationError::DuplicateDay { sprint: number, date: day.date });
    }

    if let Some(day) = sprint.days.iter().find(|d| d.tasks.is_empty()) {
        return Err(ValidationError::NoTasks { sprint: number, date: day.date });
    }

    if let Some(day) = sprint.days.iter().find(|d| d.total_percentage() > FULL_DAY) {
        return Err(ValidationError::OverAllocated { sprint: number, date: day.date });
    }

    if let Some(day) = sprint
        .days
        .iter()
        .find(|d| d.total_percentage() == FULL_DAY && d.has_unspecified())
    {
        return Err(ValidationError::UnspecifiedAtFull { sprint: number, date: day.date });
    }

    if let Some(day) = sprint
        .days
        .iter()
        .find(|d| d.total_percentage() < FULL_DAY && !d.has_unspecified())
    {
        return Err(ValidationError::UnderAllocated { sprint: number, date: day.date });
    }

    Ok(())
}

/// Spread what is left of the day evenly over its unspecified tasks.
///
/// The share is truncated, so a remainder that does not divide evenly leaves the day
/// short of 100% and fails.
pub fn complete_day(sprint_number: i32, day: &Day) -> std::result::Result<Day, ValidationError> {
    let total = day.total_percentage();
    if total == FULL_DAY {
        return Ok(day.clone());
    }

    let failed = || ValidationError::AutocompleteFailed {
        sprint: sprint_number,
        date: day.date,
    };

    let unspecified = day.tasks.iter().filter(|t| t.is_unspecified()).count() as u32;
    let share = FULL_DAY
        .checked_sub(total)
        .and_then(|left| left.checked_div(unspecified))
        .ok_or_else(failed)?;

    let mut completed = day.clone();
    for task in completed.tasks.iter_mut().filter(|t| t.is_unspecified()) {
        task.percentage = share;
    }

    if completed.total_percentage() != FULL_DAY {
        return Err(failed());
    }
    Ok(completed)
}

/// Sum percentage points per (type, description), ordered by type then description.
fn aggregate(sprint: &Sprint) -> BTreeMap<(TaskType, String), u32> {
    let mut rows = BTreeMap::new();
    for task in sprint.days.iter().flat_map(|d| d.tasks.iter()) {
        *rows
            .entry((task.task_type, task.description.clone()))
            .or_insert(0) += task.percentage;
    }
    rows
}

/// Render day percentage points as a share of the whole sprint, with a decimal comma.
fn format_share(points: u32) -> String {
    // points / (100 / SPRINT_DAYS), kept in hundredths to stay exact.
    let hundredths = points as usize * SPRINT_DAYS;
    let whole = hundredths / 100;
    let fraction = hundredths % 100;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{:02}", fraction);
    format!("{},{}", whole, digits.trim_end_matches('0'))
}
