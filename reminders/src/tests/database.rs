use std::io::{self, BufReader, Cursor, Read};

use super::sample;
use crate::{Database, Error};

const SAMPLE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/reminders/src/tests/data/sample.txt"
);

fn labels(db: &Database) -> Vec<&str> {
    db.entries().iter().map(|entry| entry.label()).collect()
}

#[test]
fn invalid_lines_are_skipped() {
    let db = Database::from_lines(sample());

    assert_eq!(
        labels(&db),
        [
            "Pay rent",
            "Call mom",
            "X",
            "Water plants",
            "Weekend brunch",
            "Stand-up",
        ]
    );
}

#[test]
fn only_invalid_lines() {
    let db = Database::from_lines(["Bad line no semicolon", "", "X;", "Y; xyz 10-12"]);
    assert!(db.is_empty());
    assert_eq!(db.len(), 0);
}

#[test]
fn from_reader() -> Result<(), Error> {
    let raw = "Pay rent; mon-fri 9:00-17:30\r\nnope\nCall mom; sun 10-12\n";
    let db = Database::from_reader(Cursor::new(raw))?;
    assert_eq!(labels(&db), ["Pay rent", "Call mom"]);
    Ok(())
}

#[test]
fn load_from_file() -> Result<(), Error> {
    let db = Database::load(SAMPLE_PATH)?;
    assert_eq!(db, Database::from_lines(sample()));
    Ok(())
}

#[test]
fn load_missing_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/no/such/reminders.txt");

    match Database::load(path) {
        Err(Error::Open { path: err_path, .. }) => assert_eq!(err_path.to_str(), Some(path)),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn invalid_utf8_line() -> Result<(), Error> {
    let raw = b"Pay rent; mon-fri 9:00-17:30\nCaf\xe9; sun 10-12\n\xff\xfe;\nCall mom; sun 10-12\n";
    let db = Database::from_reader(Cursor::new(&raw[..]))?;
    assert_eq!(labels(&db), ["Pay rent", "Caf\u{FFFD}", "Call mom"]);
    Ok(())
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn read_failure() {
    let res = Database::from_reader(BufReader::new(BrokenReader));
    assert!(matches!(res, Err(Error::Read(_))));
}

#[test]
fn collect_entries() {
    let db = Database::from_lines(sample());
    let copy: Database = db.entries().iter().cloned().collect();
    assert_eq!(copy, db);

    let mut count = 0;

    for entry in &db {
        assert!(!entry.schedule().is_empty());
        count += 1;
    }

    assert_eq!(count, db.len());
}
