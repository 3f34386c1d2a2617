use std::convert::TryInto;

use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::minute_of_day::MinuteOfDay;
use crate::rules as rl;
use crate::rules::day as ds;
use crate::rules::time as ts;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct EntryParser;

/// Parse a line of a reminders database.
///
/// The line must hold a label followed by at least one clause that has both
/// a weekday and a time range. Any other unrecognized word is ignored.
pub fn parse(data: &str) -> Result<rl::Entry> {
    let entry_pair = EntryParser::parse(Rule::input_entry, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no entry found");

    build_entry(entry_pair)
}

// ---
// --- Entry
// ---

fn unexpected_token<T>(found: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{found:?}` inside of `{parent:?}`")
}

fn build_entry(pair: Pair<Rule>) -> Result<rl::Entry> {
    assert_eq!(pair.as_rule(), Rule::entry);
    let mut pairs = pair.into_inner();
    let label = build_label(pairs.next().expect("grammar error: entry without label"));
    let mut clauses = Vec::new();

    for pair in pairs {
        match pair.as_rule() {
            Rule::clause => clauses.extend(build_clause(pair)),
            other => unexpected_token(other, Rule::entry),
        }
    }

    if clauses.is_empty() {
        return Err(Error::EmptySchedule);
    }

    Ok(rl::Entry::new(label, rl::Schedule::new(clauses)))
}

fn build_label<'i>(pair: Pair<'i, Rule>) -> &'i str {
    assert_eq!(pair.as_rule(), Rule::label);
    pair.as_str().trim()
}

// ---
// --- Clause
// ---

fn build_clause(pair: Pair<Rule>) -> Option<rl::ScheduleClause> {
    assert_eq!(pair.as_rule(), Rule::clause);
    let mut weekdays = Vec::new();
    let mut times = Vec::new();

    for pair in pair.into_inner() {
        let token = build_token(pair);

        let starts_with_digit = token.starts_with(|c: char| c.is_ascii_digit());

        if starts_with_digit {
            match build_time_range(&token) {
                Some(time) => times.push(time),
                None => log_ignored("time range", &token),
            }
        } else {
            match build_weekday_range(&token) {
                Some(wday) => weekdays.push(wday),
                None => log_ignored("weekday", &token),
            }
        }
    }

    if weekdays.is_empty() || times.is_empty() {
        return None;
    }

    Some(rl::ScheduleClause::new(
        ds::WeekdayMatcher::Any(weekdays),
        ts::TimeMatcher::Any(times),
    ))
}

fn build_token(pair: Pair<Rule>) -> String {
    assert_eq!(pair.as_rule(), Rule::token);
    pair.as_str().to_lowercase()
}

#[cfg_attr(not(feature = "log"), allow(unused_variables))]
fn log_ignored(kind: &str, token: &str) {
    #[cfg(feature = "log")]
    log::debug!("Ignoring invalid {kind} `{token}` in reminder entry");
}

// ---
// --- Weekday
// ---

fn build_weekday_range(token: &str) -> Option<ds::WeekdayMatcher> {
    let mut parts = token.split('-').filter(|part| !part.is_empty());

    match (parts.next(), parts.next(), parts.next()) {
        (Some(day), None, None) => Some(ds::WeekdayMatcher::Single(build_wday(day)?)),
        (Some(start), Some(end), None) => Some(ds::WeekdayMatcher::range(
            build_wday(start)?,
            build_wday(end)?,
        )),
        _ => None,
    }
}

fn build_wday(raw: &str) -> Option<ds::Weekday> {
    Some(match raw {
        "t2" | "mon" => ds::Weekday::Mon,
        "t3" | "tue" => ds::Weekday::Tue,
        "t4" | "wed" => ds::Weekday::Wed,
        "t5" | "thu" => ds::Weekday::Thu,
        "t6" | "fri" => ds::Weekday::Fri,
        "t7" | "sat" => ds::Weekday::Sat,
        "cn" | "sun" => ds::Weekday::Sun,
        _ => return None,
    })
}

// ---
// --- Time
// ---

fn build_time_range(token: &str) -> Option<ts::TimeMatcher> {
    let mut parts = token.split('-');

    let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    Some(ts::TimeMatcher::range(
        build_minute_of_day(start)?,
        build_minute_of_day(end)?,
    ))
}

fn build_minute_of_day(raw: &str) -> Option<MinuteOfDay> {
    let (hour, minute): (i32, i32) = {
        if raw.contains(':') {
            let mut parts = raw.split(':').filter(|part| !part.is_empty());

            let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next())
            else {
                return None;
            };

            if !hour.starts_with(|c: char| c.is_ascii_digit()) {
                return None;
            }

            (hour.parse().ok()?, minute.parse().unwrap_or(0))
        } else {
            (raw.parse().ok()?, 0)
        }
    };

    MinuteOfDay::new(hour.try_into().ok()?, minute.try_into().ok()?)
}
