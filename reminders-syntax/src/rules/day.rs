use std::fmt::Display;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

use crate::display::write_selector;

/// Number of a weekday, starting with *1* for sunday and ending with *7* for
/// saturday.
///
/// ```
/// use reminders_syntax::rules::day::{weekday_number, Weekday};
///
/// assert_eq!(weekday_number(Weekday::Sun), 1);
/// assert_eq!(weekday_number(Weekday::Mon), 2);
/// assert_eq!(weekday_number(Weekday::Sat), 7);
/// ```
#[inline]
pub fn weekday_number(wday: Weekday) -> u8 {
    wday.number_from_sunday() as u8
}

/// Inverse of [`weekday_number`], returns `None` outside of *1..=7*.
#[inline]
pub fn weekday_from_number(num: u8) -> Option<Weekday> {
    Some(match num {
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        6 => Weekday::Fri,
        7 => Weekday::Sat,
        _ => return None,
    })
}

// WeekdayMatcher

/// A set of days in the week.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum WeekdayMatcher {
    Single(Weekday),
    /// Inclusive range of days, which wraps around saturday if `start` comes
    /// after `end` in the week.
    Range {
        start: Weekday,
        end: Weekday,
    },
    Any(Vec<WeekdayMatcher>),
}

impl WeekdayMatcher {
    #[inline]
    pub fn range(start: Weekday, end: Weekday) -> Self {
        Self::Range { start, end }
    }

    /// Check if this range goes through the end of the week.
    #[inline]
    pub fn is_wrapping(&self) -> bool {
        match self {
            Self::Range { start, end } => weekday_number(*start) > weekday_number(*end),
            _ => false,
        }
    }
}

impl Display for WeekdayMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(wday) => write!(f, "{}", weekday_number(*wday)),
            Self::Range { start, end } => {
                write!(f, "{}-{}", weekday_number(*start), weekday_number(*end))
            }
            Self::Any(matchers) => write_selector(f, matchers),
        }
    }
}
