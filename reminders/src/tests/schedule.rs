use chrono::Weekday;

use reminders_syntax::rules::day::WeekdayMatcher;
use reminders_syntax::rules::time::TimeMatcher;
use reminders_syntax::rules::{Entry, Schedule, ScheduleClause};
use reminders_syntax::MinuteOfDay;

use super::all_weekdays;
use crate::{at, Moment, MomentFilter};

fn clause(day: Weekday, start: u16, end: u16) -> ScheduleClause {
    ScheduleClause::new(
        WeekdayMatcher::Single(day),
        TimeMatcher::range(
            MinuteOfDay::from_minutes(start).unwrap(),
            MinuteOfDay::from_minutes(end).unwrap(),
        ),
    )
}

#[test]
fn clause_requires_day_and_time() {
    let clause = clause(Weekday::Mon, 600, 720);
    assert!(clause.filter(at!(Mon 10:00)));
    assert!(clause.filter(at!(Mon 12:00)));
    assert!(!clause.filter(at!(Mon 12:01)));
    assert!(!clause.filter(at!(Tue 11:00)));
}

#[test]
fn schedule_is_union_of_clauses() {
    let schedule = Schedule::new(vec![
        clause(Weekday::Mon, 600, 720),
        clause(Weekday::Sat, 0, 59),
    ]);

    assert!(schedule.filter(at!(Mon 11:00)));
    assert!(schedule.filter(at!(Sat 00:30)));
    assert!(!schedule.filter(at!(Sat 11:00)));
    assert!(!schedule.filter(at!(Mon 00:30)));
}

#[test]
fn empty_schedule_never_matches() {
    let schedule = Schedule::default();
    assert!(schedule.is_empty());

    for wday in all_weekdays() {
        for time in MinuteOfDay::all() {
            assert!(!schedule.filter(Moment::new(wday, time)));
        }
    }
}

#[test]
fn entry_with_inverted_time_is_never_active() {
    let entry: Entry = "X; fri-mon 22-6".parse().unwrap();

    for wday in all_weekdays() {
        for time in MinuteOfDay::all() {
            assert!(!entry.filter(Moment::new(wday, time)));
        }
    }
}

#[test]
fn entry_with_wrapping_days() {
    let entry: Entry = "Night shift; fri-mon 22-23:59; fri-mon 0-6".parse().unwrap();

    assert!(entry.filter(at!(Fri 23:00)));
    assert!(entry.filter(at!(Sun 03:00)));
    assert!(entry.filter(at!(Mon 06:00)));
    assert!(!entry.filter(at!(Mon 06:01)));
    assert!(!entry.filter(at!(Tue 23:00)));
    assert!(!entry.filter(at!(Sat 12:00)));
}
