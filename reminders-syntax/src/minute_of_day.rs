use std::convert::TryInto;
use std::fmt::{Debug, Display};

use chrono::{NaiveTime, Timelike};

/// A time of the day with a resolution of one minute, from *00:00* to
/// *23:59*.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// First minute of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// Last minute of the day.
    pub const LAST: Self = Self(24 * 60 - 1);

    /// Create a new time of the day, this may return `None` if input values
    /// are out of range.
    ///
    /// ```
    /// use reminders_syntax::MinuteOfDay;
    ///
    /// assert!(MinuteOfDay::new(23, 59).is_some());
    /// assert!(MinuteOfDay::new(24, 0).is_none()); // hours are out of bound
    /// assert!(MinuteOfDay::new(12, 60).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            None
        } else {
            Some(Self(60 * hour as u16 + minute as u16))
        }
    }

    /// Build a time of the day from the total number of minutes from midnight
    /// and return `None` if the result is out of bounds.
    ///
    /// ```
    /// use reminders_syntax::MinuteOfDay;
    ///
    /// assert_eq!(MinuteOfDay::from_minutes(9 * 60 + 30), MinuteOfDay::new(9, 30));
    /// assert!(MinuteOfDay::from_minutes(1440).is_none());
    /// ```
    #[inline]
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes > Self::LAST.0 {
            None
        } else {
            Some(Self(minutes))
        }
    }

    /// Get the total number of minutes from *00:00*.
    ///
    /// ```
    /// use reminders_syntax::MinuteOfDay;
    ///
    /// let time = MinuteOfDay::new(17, 30).unwrap();
    /// assert_eq!(time.minutes(), 1050);
    /// ```
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Get the number of full hours in this time.
    #[inline]
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Get the number of remaining minutes in this time.
    #[inline]
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Iterate over every minute of a day, in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIDNIGHT.0..=Self::LAST.0).map(Self)
    }
}

impl Display for MinuteOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Debug for MinuteOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

impl From<NaiveTime> for MinuteOfDay {
    #[inline]
    fn from(time: NaiveTime) -> MinuteOfDay {
        let hour: u8 = time.hour().try_into().expect("invalid NaiveTime");
        let minute: u8 = time.minute().try_into().expect("invalid NaiveTime");
        Self::new(hour, minute).expect("invalid NaiveTime")
    }
}
