pub mod day;
pub mod time;

use std::fmt::Display;
use std::str::FromStr;

use crate::display::write_selector;

// ScheduleClause

/// Moments that are both in a set of weekdays and in a set of daily times.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ScheduleClause {
    pub weekday: day::WeekdayMatcher,
    pub time: time::TimeMatcher,
}

impl ScheduleClause {
    #[inline]
    pub fn new(weekday: day::WeekdayMatcher, time: time::TimeMatcher) -> Self {
        Self { weekday, time }
    }
}

impl Display for ScheduleClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "weekday: {} time: {}", self.weekday, self.time)
    }
}

// Schedule

/// Union of all moments described by a list of clauses.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Schedule {
    pub clauses: Vec<ScheduleClause>,
}

impl Schedule {
    #[inline]
    pub fn new(clauses: Vec<ScheduleClause>) -> Self {
        Self { clauses }
    }

    /// Return `true` if this schedule doesn't contain any clause, in which
    /// case it never matches.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_selector(f, &self.clauses)
    }
}

// Entry

/// A labeled reminder, as written on a single line of a database.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Entry {
    label: String,
    schedule: Schedule,
}

impl Entry {
    pub fn new(label: impl Into<String>, schedule: Schedule) -> Self {
        Self { label: label.into(), schedule }
    }

    /// Free-form text describing the reminder, with surrounding whitespaces
    /// removed.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.schedule)
    }
}

impl FromStr for Entry {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
