use reminders_syntax::rules::day::{self as ds, weekday_number, Weekday};
use reminders_syntax::rules::time as ts;
use reminders_syntax::rules::{Entry, Schedule, ScheduleClause};
use reminders_syntax::MinuteOfDay;

use crate::moment::Moment;

/// Check if a day of the week belongs to a set of weekdays.
pub trait WeekdayFilter {
    fn filter(&self, wday: Weekday) -> bool;
}

impl WeekdayFilter for ds::WeekdayMatcher {
    fn filter(&self, wday: Weekday) -> bool {
        match self {
            Self::Single(day) => *day == wday,
            Self::Range { start, end } => {
                if self.is_wrapping() {
                    // Handle wrapping ranges
                    return Self::range(*start, Weekday::Sat).filter(wday)
                        || Self::range(Weekday::Sun, *end).filter(wday);
                }

                let range_u8 = weekday_number(*start)..=weekday_number(*end);
                range_u8.contains(&weekday_number(wday))
            }
            Self::Any(matchers) => matchers.iter().any(|matcher| matcher.filter(wday)),
        }
    }
}

/// Check if a time of the day belongs to a set of times.
pub trait TimeFilter {
    fn filter(&self, time: MinuteOfDay) -> bool;
}

impl TimeFilter for ts::TimeMatcher {
    fn filter(&self, time: MinuteOfDay) -> bool {
        match self {
            Self::Range { start, end } => (*start..=*end).contains(&time),
            Self::Any(matchers) => matchers.iter().any(|matcher| matcher.filter(time)),
        }
    }
}

/// Check if a moment of the week is covered by a schedule.
pub trait MomentFilter {
    fn filter(&self, moment: Moment) -> bool;
}

impl MomentFilter for ScheduleClause {
    fn filter(&self, moment: Moment) -> bool {
        self.weekday.filter(moment.weekday) && self.time.filter(moment.time)
    }
}

impl MomentFilter for Schedule {
    fn filter(&self, moment: Moment) -> bool {
        self.clauses.iter().any(|clause| clause.filter(moment))
    }
}

impl MomentFilter for Entry {
    fn filter(&self, moment: Moment) -> bool {
        self.schedule().filter(moment)
    }
}
