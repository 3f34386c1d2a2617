#![doc = include_str!("../../README.md")]

pub mod database;
pub mod error;
pub mod filter;
pub mod moment;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::database::{what_to_do, Database};
pub use crate::error::{Error, ParserError};
pub use crate::filter::{MomentFilter, TimeFilter, WeekdayFilter};
pub use crate::moment::Moment;
pub use reminders_syntax::rules::Entry;
pub use reminders_syntax::MinuteOfDay;
