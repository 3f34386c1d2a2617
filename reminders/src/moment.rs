use std::fmt::Display;

use chrono::{Datelike, Local, NaiveDateTime};

use reminders_syntax::rules::day::{weekday_from_number, Weekday};
use reminders_syntax::MinuteOfDay;

/// A point in a week, which is what reminders are evaluated against.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Moment {
    pub weekday: Weekday,
    pub time: MinuteOfDay,
}

impl Moment {
    #[inline]
    pub fn new(weekday: Weekday, time: MinuteOfDay) -> Self {
        Self { weekday, time }
    }

    /// Build a moment from a weekday number (*1* for sunday to *7* for
    /// saturday) and a number of minutes since midnight.
    ///
    /// ```
    /// use reminders::{MinuteOfDay, Moment};
    /// use chrono::Weekday;
    ///
    /// assert_eq!(
    ///     Moment::from_numbers(2, 600),
    ///     Some(Moment::new(Weekday::Mon, MinuteOfDay::new(10, 0).unwrap())),
    /// );
    ///
    /// assert!(Moment::from_numbers(0, 600).is_none());
    /// assert!(Moment::from_numbers(1, 1440).is_none());
    /// ```
    pub fn from_numbers(weekday: u8, minutes: u16) -> Option<Self> {
        Some(Self::new(
            weekday_from_number(weekday)?,
            MinuteOfDay::from_minutes(minutes)?,
        ))
    }

    /// Current moment of the week, in the local calendar.
    pub fn now() -> Self {
        Local::now().naive_local().into()
    }
}

impl From<NaiveDateTime> for Moment {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.weekday(), datetime.time().into())
    }
}

impl Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.weekday, self.time)
    }
}
