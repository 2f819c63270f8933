//! Day and sprint records, and grouping of days into sprints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StructuralError};
use crate::task::Task;

/// Number of working days in a sprint.
pub const SPRINT_DAYS: usize = 10;

/// One calendar day of logged activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
    /// Set on the day that opens a sprint; filled in for the rest once grouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_number: Option<i32>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Day {
            date,
            tasks: Vec::new(),
            sprint_number: None,
        }
    }

    /// Sum of the task percentages logged so far.
    pub fn total_percentage(&self) -> u32 {
        self.tasks.iter().map(|t| t.percentage).sum()
    }

    pub fn has_unspecified(&self) -> bool {
        self.tasks.iter().any(Task::is_unspecified)
    }
}

/// A fixed-length iteration made of consecutive logged days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub sprint_number: i32,
    pub days: Vec<Day>,
}

impl Sprint {
    fn open(day: Day, sprint_number: i32) -> Self {
        Sprint {
            sprint_number,
            days: vec![day],
        }
    }
}

/// Group days into sprints.
///
/// Days before `cutoff` are dropped and the rest sorted by date before grouping. Every
/// day that declares a sprint number opens a new sprint, even when the number repeats;
/// other days join the open sprint and take its number.
pub fn build_sprints(days: Vec<Day>, cutoff: NaiveDate) -> Result<Vec<Sprint>> {
    let mut days: Vec<Day> = days.into_iter().filter(|d| d.date >= cutoff).collect();
    days.sort_by_key(|d| d.date);

    let mut sprints: Vec<Sprint> = Vec::new();
    for mut day in days {
        match (day.sprint_number, sprints.last_mut()) {
            (Some(number), _) => sprints.push(Sprint::open(day, number)),
            (None, Some(current)) => {
                day.sprint_number = Some(current.sprint_number);
                current.days.push(day);
            }
            (None, None) => return Err(StructuralError::FirstDayWithoutSprint(day.date).into()),
        }
    }
    Ok(sprints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 3, d).unwrap()
    }

    fn day(d: u32, sprint: Option<i32>) -> Day {
        Day {
            sprint_number: sprint,
            ..Day::new(date(d))
        }
    }

    #[test]
    fn test_days_inherit_open_sprint() {
        let sprints = build_sprints(
            vec![day(2, Some(1)), day(3, None), day(4, Some(2)), day(5, None)],
            date(1),
        )
        .unwrap();
        assert_eq!(sprints.len(), 2);
        assert_eq!(sprints[0].sprint_number, 1);
        assert_eq!(sprints[0].days.len(), 2);
        assert_eq!(sprints[0].days[1].sprint_number, Some(1));
        assert_eq!(sprints[1].days[1].sprint_number, Some(2));
    }

    #[test]
    fn test_days_are_sorted_before_grouping() {
        let sprints = build_sprints(vec![day(5, None), day(3, None), day(2, Some(4))], date(1)).unwrap();
        assert_eq!(sprints.len(), 1);
        let dates: Vec<NaiveDate> = sprints[0].days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2), date(3), date(5)]);
    }

    #[test]
    fn test_repeated_sprint_number_opens_new_sprint() {
        let sprints = build_sprints(vec![day(2, Some(3)), day(3, Some(3)), day(4, Some(1))], date(1)).unwrap();
        let numbers: Vec<i32> = sprints.iter().map(|s| s.sprint_number).collect();
        assert_eq!(numbers, vec![3, 3, 1]);
    }

    #[test]
    fn test_first_day_without_sprint_fails() {
        let err = build_sprints(vec![day(2, None), day(3, Some(1))], date(1)).unwrap_err();
        assert_eq!(err, Error::Structural(StructuralError::FirstDayWithoutSprint(date(2))));
    }

    #[test]
    fn test_cutoff_drops_earlier_days() {
        // The day on the 2nd has no sprint but falls before the cutoff.
        let sprints = build_sprints(vec![day(2, None), day(3, Some(9)), day(4, None)], date(3)).unwrap();
        assert_eq!(sprints.len(), 1);
        assert_eq!(sprints[0].days.len(), 2);
        assert_eq!(sprints[0].days[0].date, date(3));
    }

    #[test]
    fn test_nothing_after_cutoff_yields_no_sprints() {
        assert!(build_sprints(vec![day(2, Some(1))], date(20)).unwrap().is_empty());
        assert!(build_sprints(Vec::new(), date(1)).unwrap().is_empty());
    }
}
