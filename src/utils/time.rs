//! Time utilities: parsing HH:MM variants and finding clock tokens in free text.

use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

/// Matches clock tokens like 7:30, 07:30, 7.30 or 7,30.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}[:.,]\d{2}").expect("valid regex"));

/// A clock time found in a line, together with the byte span it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToken {
    pub value: NaiveTime,
    pub start: usize,
    pub end: usize,
}

/// Returns every valid clock time in `line`, in order of appearance.
/// Matches that are not a real time of day (e.g. 77:88) are not tokens and
/// do not occupy a token position.
pub fn find_times(line: &str) -> Vec<TimeToken> {
    TIME_RE
        .find_iter(line)
        .filter_map(|m| {
            parse_time(m.as_str()).map(|value| TimeToken {
                value,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Parses a clock token, accepting `:`, `.` or `,` as separator.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(&t.replace(['.', ','], ":"), "%H:%M").ok()
}
