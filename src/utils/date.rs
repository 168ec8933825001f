//! Date utilities: finding DD/MM/YYYY tokens in free text, weekday names.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Matches the date shape used by the timesheet (e.g. 01/03/2024).
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}/\d{2}/\d{4}").expect("valid regex"));

/// Italian weekday names, Monday first.
pub const GIORNI: [&str; 7] = [
    "lunedì",
    "martedì",
    "mercoledì",
    "giovedì",
    "venerdì",
    "sabato",
    "domenica",
];

/// Returns the first substring of `line` that is a real calendar date.
/// Date-shaped matches that are not valid dates (e.g. 40/40/2024) are skipped.
pub fn find_date(line: &str) -> Option<NaiveDate> {
    DATE_RE
        .find_iter(line)
        .find_map(|m| NaiveDate::parse_from_str(m.as_str(), "%d/%m/%Y").ok())
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    GIORNI[date.weekday().num_days_from_monday() as usize]
}
