//! Line parsing: one raw text line into an attendance record.

use crate::models::AttendanceRecord;
use crate::utils::time::TimeToken;
use crate::utils::{date, time};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

/// Reason label carrying no information for the reader, dropped on sight.
pub const SUPPRESSED_REASON: &str = "COMANDO E LOGISTICA";

/// Regex to collapse runs of whitespace inside the reason column.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Parses one extracted line into an attendance record.
///
/// A line matches when it carries a date and at least two clock times; the
/// first two times are the entry and exit punches. Lines where both punches
/// are 00:00 are placeholder rows (holidays and the like) and produce no
/// record.
pub fn parse_line(raw: &str) -> Option<AttendanceRecord> {
    let line = raw.trim_start_matches(['*', ' ']).trim();

    let date = date::find_date(line)?;
    let times = time::find_times(line);
    if times.len() < 2 {
        return None;
    }

    let entry = times[0].value;
    let exit = times[1].value;
    if entry == NaiveTime::MIN && exit == NaiveTime::MIN {
        return None;
    }

    let reason = extract_reason(line, &times);
    Some(AttendanceRecord::new(date, entry, exit, reason))
}

/// Cuts the reason (causale) column out of the line. The span starts after
/// the 3rd time token when one exists, otherwise after the 2nd; it ends at
/// the 4th token when one exists, otherwise at end of line.
fn extract_reason(line: &str, times: &[TimeToken]) -> String {
    let start = if times.len() >= 3 {
        times[2].end
    } else {
        times[1].end
    };
    let end = if times.len() >= 4 {
        times[3].start
    } else {
        line.len()
    };

    let collapsed = WHITESPACE_RE.replace_all(line[start..end].trim(), " ");
    let reason = collapsed
        .trim_matches(|c: char| !(c.is_alphanumeric() || c == '_'))
        .to_string();

    if reason.is_empty() || reason.chars().all(|c| c == '-' || c == ' ') {
        return String::new();
    }
    if reason == SUPPRESSED_REASON {
        return String::new();
    }
    reason
}
