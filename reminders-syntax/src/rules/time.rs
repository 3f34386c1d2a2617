use std::fmt::Display;

use crate::display::write_selector;
use crate::minute_of_day::MinuteOfDay;

// TimeMatcher

/// A set of minutes in the day.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum TimeMatcher {
    /// Inclusive range, which is empty if `start` comes after `end`.
    Range {
        start: MinuteOfDay,
        end: MinuteOfDay,
    },
    Any(Vec<TimeMatcher>),
}

impl TimeMatcher {
    #[inline]
    pub fn range(start: MinuteOfDay, end: MinuteOfDay) -> Self {
        Self::Range { start, end }
    }

    /// Check if no minute of the day can ever be part of this set.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Range { start, end } => start > end,
            Self::Any(matchers) => matchers.iter().all(Self::is_empty),
        }
    }
}

impl Display for TimeMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range { start, end } => write!(f, "{}-{}", start.minutes(), end.minutes()),
            Self::Any(matchers) => write_selector(f, matchers),
        }
    }
}
