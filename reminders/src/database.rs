use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use reminders_syntax::rules::day::Weekday;
use reminders_syntax::rules::Entry;
use reminders_syntax::MinuteOfDay;

use crate::error::Error;
use crate::filter::MomentFilter;
use crate::moment::Moment;

// Database

/// An ordered list of reminders.
///
/// The order of entries is the order of the lines they were read from, which
/// is kept by all queries.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Database {
    entries: Vec<Entry>,
}

impl Database {
    /// Build a database from the lines of a text file, invalid lines are
    /// ignored.
    ///
    /// ```
    /// use reminders::Database;
    ///
    /// let db = Database::from_lines([
    ///     "Pay rent; mon-fri 9:00-17:30",
    ///     "Bad line no semicolon",
    ///     "Call mom; sun 10-12",
    /// ]);
    ///
    /// assert_eq!(db.len(), 2);
    /// ```
    pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
        let mut entries = Vec::new();

        #[cfg(feature = "log")]
        let mut skipped = 0;

        for (_idx, line) in lines.into_iter().enumerate() {
            match reminders_syntax::parse(line.as_ref()) {
                Ok(entry) => {
                    #[cfg(feature = "log")]
                    log::trace!(line = _idx + 1; "Loaded reminder entry: {entry}");

                    entries.push(entry);
                }
                Err(_err) => {
                    #[cfg(feature = "log")]
                    {
                        log::debug!(line = _idx + 1; "Skipping invalid reminder entry: {_err}");
                        skipped += 1;
                    }
                }
            }
        }

        #[cfg(feature = "log")]
        log::info!(
            loaded = entries.len(), skipped = skipped;
            "Loaded {} reminder entries", entries.len()
        );

        Self { entries }
    }

    /// Read all lines from a reader, this only fails if the reader does.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD` so that a
    /// corrupted line doesn't prevent the others from being loaded.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        let mut lines = Vec::new();

        for line in reader.split(b'\n') {
            let mut line = line.map_err(Error::Read)?;

            if line.last() == Some(&b'\r') {
                line.pop();
            }

            lines.push(String::from_utf8_lossy(&line).into_owned());
        }

        Ok(Self::from_lines(lines))
    }

    /// Load the database stored in a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let file =
            File::open(path).map_err(|source| Error::Open { path: path.to_owned(), source })?;

        Self::from_reader(BufReader::new(file))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List the entries that are active at a given moment.
    ///
    /// ```
    /// use reminders::{Database, Moment};
    ///
    /// let db = Database::from_lines(["Pay rent; mon-fri 9:00-17:30"]);
    /// let monday_10am = Moment::from_numbers(2, 600).unwrap();
    /// let sunday_10am = Moment::from_numbers(1, 600).unwrap();
    ///
    /// assert_eq!(db.what_to_do(monday_10am).len(), 1);
    /// assert!(db.what_to_do(sunday_10am).is_empty());
    /// ```
    pub fn what_to_do(&self, moment: Moment) -> Vec<&Entry> {
        what_to_do(&self.entries, moment.weekday, moment.time)
    }
}

impl FromIterator<Entry> for Database {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Filter the entries that are active at a given day and time, preserving
/// their order.
pub fn what_to_do(entries: &[Entry], weekday: Weekday, time: MinuteOfDay) -> Vec<&Entry> {
    let moment = Moment::new(weekday, time);

    entries
        .iter()
        .filter(|entry| entry.filter(moment))
        .collect()
}
