use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons for a line to be rejected as a reminder entry.
#[derive(Clone, Debug)]
pub enum Error {
    /// The line doesn't have the `label;clause` structure.
    Parser(pest::error::Error<Rule>),
    /// None of the clauses of the line held both a weekday and a time range.
    EmptySchedule,
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(pest_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{}", pest_err),
            Self::EmptySchedule => write!(f, "no clause with both a weekday and a time range"),
        }
    }
}

impl std::error::Error for Error {}
