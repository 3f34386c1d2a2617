use std::fmt::Display;
use std::io;
use std::path::PathBuf;

pub use reminders_syntax::error::Error as ParserError;

/// Failure to read a reminders database.
///
/// Invalid lines are not errors: they are skipped while loading.
#[derive(Debug)]
pub enum Error {
    Open { path: PathBuf, source: io::Error },
    Read(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "could not open reminders database `{}`: {source}", path.display())
            }
            Self::Read(source) => write!(f, "could not read reminders database: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Read(source) => Some(source),
        }
    }
}
