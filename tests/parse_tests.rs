use chrono::{NaiveDate, NaiveTime};
use rbuonipasto::core::parse;
use rbuonipasto::utils::{date, time};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date")
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

#[test]
fn test_parse_plain_day_line() {
    let r = parse::parse_line("01/03/2024 07:30 21:00").expect("record");
    assert_eq!(r.date, d(1));
    assert_eq!(r.entry, t(7, 30));
    assert_eq!(r.exit, t(21, 0));
    assert_eq!(r.reason, "");
}

#[test]
fn test_reason_after_two_times_runs_to_end_of_line() {
    let r = parse::parse_line("01/03/2024  07:30  21:00  Lavoro straordinario extra")
        .expect("record");
    assert_eq!(r.reason, "Lavoro straordinario extra");
}

#[test]
fn test_worked_hours_token_shifts_reason_start() {
    // "13.30" parses as a clock time, so the reason starts after it
    let r = parse::parse_line("01/03/2024 07:30 21:00 13.30 MISSIONE").expect("record");
    assert_eq!(r.entry, t(7, 30));
    assert_eq!(r.exit, t(21, 0));
    assert_eq!(r.reason, "MISSIONE");
}

#[test]
fn test_fourth_token_ends_reason_span() {
    let r = parse::parse_line("01/03/2024 07:30 21:00 13.30 MISSIONE 09:00").expect("record");
    assert_eq!(r.reason, "MISSIONE");
}

#[test]
fn test_both_midnight_is_a_placeholder_row() {
    assert!(parse::parse_line("06/03/2024 00:00 00:00").is_none());
}

#[test]
fn test_single_midnight_is_kept() {
    let r = parse::parse_line("06/03/2024 00:00 08:30").expect("record");
    assert_eq!(r.entry, t(0, 0));
    assert_eq!(r.exit, t(8, 30));
}

#[test]
fn test_line_without_date_is_skipped() {
    assert!(parse::parse_line("Totale ore 07:30 21:00").is_none());
}

#[test]
fn test_line_with_one_time_is_skipped() {
    assert!(parse::parse_line("01/03/2024 07:30").is_none());
}

#[test]
fn test_leading_star_prefix_is_stripped() {
    let r = parse::parse_line("** 01/03/2024 07:30 21:00").expect("record");
    assert_eq!(r.date, d(1));
    assert_eq!(r.entry, t(7, 30));
}

#[test]
fn test_dot_and_comma_separators() {
    let r = parse::parse_line("01/03/2024 7.30 21,00").expect("record");
    assert_eq!(r.entry, t(7, 30));
    assert_eq!(r.exit, t(21, 0));
}

#[test]
fn test_invalid_time_is_not_a_token() {
    // 77:88 matches the shape of a clock time but is not one
    let r = parse::parse_line("01/03/2024 77:88 07:30 21:00").expect("record");
    assert_eq!(r.entry, t(7, 30));
    assert_eq!(r.exit, t(21, 0));
}

#[test]
fn test_dash_only_reason_is_dropped() {
    let r = parse::parse_line("01/03/2024 07:30 21:00 -").expect("record");
    assert_eq!(r.reason, "");

    let r = parse::parse_line("01/03/2024 07:30 21:00 - -").expect("record");
    assert_eq!(r.reason, "");
}

#[test]
fn test_comando_e_logistica_is_suppressed() {
    let r = parse::parse_line("01/03/2024 08:00 21:00 13.00 COMANDO E LOGISTICA").expect("record");
    assert_eq!(r.reason, "");
}

#[test]
fn test_reason_punctuation_is_trimmed() {
    let r = parse::parse_line("01/03/2024 07:30 21:00 (MISSIONE)").expect("record");
    assert_eq!(r.reason, "MISSIONE");
}

#[test]
fn test_reason_inner_whitespace_is_collapsed() {
    let r = parse::parse_line("01/03/2024 07:30 21:00 MISSIONE  A   ROMA").expect("record");
    assert_eq!(r.reason, "MISSIONE A ROMA");
}

#[test]
fn test_time_tokens_carry_spans() {
    let ts = time::find_times("07:30 e 21:00");
    assert_eq!(ts.len(), 2);
    assert_eq!((ts[0].start, ts[0].end), (0, 5));
    assert_eq!((ts[1].start, ts[1].end), (8, 13));
    assert_eq!(ts[0].value, t(7, 30));
    assert_eq!(ts[1].value, t(21, 0));
}

#[test]
fn test_parse_time_variants() {
    assert_eq!(time::parse_time("07:30"), Some(t(7, 30)));
    assert_eq!(time::parse_time("7.30"), Some(t(7, 30)));
    assert_eq!(time::parse_time("21,00"), Some(t(21, 0)));
    assert_eq!(time::parse_time("23:59"), Some(t(23, 59)));
    assert_eq!(time::parse_time("24:00"), None);
    assert_eq!(time::parse_time("07:60"), None);
}

#[test]
fn test_find_date_skips_invalid_candidates() {
    assert_eq!(date::find_date("99/99/2024 04/03/2024"), Some(d(4)));
    assert_eq!(date::find_date("senza data"), None);
}

#[test]
fn test_weekday_name() {
    assert_eq!(date::weekday_name(d(1)), "venerdì");
    assert_eq!(date::weekday_name(d(3)), "domenica");
    assert_eq!(date::weekday_name(d(4)), "lunedì");
}
