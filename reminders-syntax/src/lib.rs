#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod minute_of_day;
pub mod rules;

mod display;
mod parser;


pub use error::{Error, Result};
pub use minute_of_day::MinuteOfDay;
pub use parser::parse;
