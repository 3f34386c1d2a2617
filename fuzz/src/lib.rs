//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
use arbitrary::Arbitrary;

use reminders::{Entry, Moment, MomentFilter, TimeFilter, WeekdayFilter};

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub line: String,
    pub weekday: u8,
    pub minutes: u16,
}

/// Parse the input line and evaluate it at the input moment, returning
/// `false` if the example is not worth keeping in the corpus.
pub fn run_fuzz_entry(data: Data) -> bool {
    let Some(moment) = Moment::from_numbers(data.weekday % 7 + 1, data.minutes % 1440) else {
        return false;
    };

    let Ok(entry) = data.line.parse::<Entry>() else {
        return false;
    };

    assert!(!entry.schedule().is_empty());
    assert_eq!(data.line.parse::<Entry>().ok().as_ref(), Some(&entry));

    // Evaluating the whole entry must be the same as checking its clauses
    // one by one.
    let expected = entry.schedule().clauses.iter().any(|clause| {
        clause.weekday.filter(moment.weekday) && clause.time.filter(moment.time)
    });

    assert_eq!(entry.filter(moment), expected);
    let _ = entry.to_string();
    true
}

#[cfg(test)]
mod tests {
    use super::{run_fuzz_entry, Data};

    #[test]
    fn run_on_examples() {
        let examples = [
            ("Pay rent; mon-fri 9:00-17:30", 1, 600, true),
            ("Bad line no semicolon", 1, 600, false),
            ("X; fri-mon 22-6", 5, 1439, true),
            (";;;,,,-:-", 0, 0, false),
            ("é; MON É 9:é-10", 255, u16::MAX, true),
        ];

        for (line, weekday, minutes, keep) in examples {
            let data = Data { line: line.to_string(), weekday, minutes };
            assert_eq!(run_fuzz_entry(data), keep);
        }
    }
}
