mod database;
mod schedule;

use chrono::Weekday;

use reminders_syntax::rules::day::weekday_from_number;

fn sample() -> impl Iterator<Item = &'static str> {
    include_str!("data/sample.txt").lines()
}

fn all_weekdays() -> impl Iterator<Item = Weekday> {
    (1..=7).map(|num| weekday_from_number(num).expect("invalid weekday number"))
}

/// Build a [`crate::Moment`] from a literal such as `at!(Mon 10:00)`.
#[macro_export]
macro_rules! at {
    ( $wday: ident $hour: literal : $minute: literal ) => {{
        use $crate::{MinuteOfDay, Moment};

        Moment::new(
            chrono::Weekday::$wday,
            MinuteOfDay::new($hour, $minute).expect("invalid time literal"),
        )
    }};
}
