//! Tests for the confdata record model, parser and schedule set.

use time::macros::date;

use super::*;
use crate::error::{ChartError, EmptyScheduleError, FormatError, HeaderError, ValidationError};

const TWO_ENTRIES: &str = "#! confdata 2
CONFITEM AAAA 2010/06/28-2010/06/30 2010/04/09 2010/05/14
CONFITEM BBBB 2010/12/15-2010/12/18 2010/05/11 <unknown>
";

fn entry(name: &str, deadline: time::Date, start: time::Date, end: time::Date) -> ConferenceEntry {
    ConferenceEntry::new(name, start, end, deadline, None).unwrap()
}

// =============================================================================
// DATES
// =============================================================================

#[test]
fn parse_date_accepts_slash_form() {
    assert_eq!(parse_date("2010/06/28").unwrap(), date!(2010 - 06 - 28));
}

#[test]
fn parse_date_rejects_other_shapes() {
    for bad in ["2010-06-28", "2010/6/28", "10/06/28", "2010/06/28x", "", "2010/02/30", "2010/13/01", "abcd/ef/gh"] {
        assert_eq!(
            parse_date(bad),
            Err(FormatError::BadDate { text: bad.to_owned() }),
            "{bad:?} should be rejected"
        );
    }
}

// =============================================================================
// RECORD MODEL
// =============================================================================

#[test]
fn entry_accepts_single_day_conference() {
    let e = ConferenceEntry::new(
        "ONEDAY",
        date!(2010 - 06 - 28),
        date!(2010 - 06 - 28),
        date!(2010 - 04 - 09),
        Some(date!(2010 - 05 - 14)),
    )
    .unwrap();
    assert_eq!(e.name(), "ONEDAY");
    assert_eq!(e.notification_date(), Some(date!(2010 - 05 - 14)));
}

#[test]
fn entry_rejects_empty_name() {
    let err = ConferenceEntry::new("", date!(2010 - 06 - 28), date!(2010 - 06 - 30), date!(2010 - 04 - 09), None);
    assert_eq!(err, Err(ValidationError::EmptyName));
}

#[test]
fn entry_rejects_long_name_even_with_valid_dates() {
    let err = ConferenceEntry::new(
        "SIGGRAPH2010",
        date!(2010 - 07 - 25),
        date!(2010 - 07 - 29),
        date!(2010 - 01 - 18),
        Some(date!(2010 - 03 - 20)),
    );
    assert!(matches!(err, Err(ValidationError::NameTooLong { max: MAX_CONF_NAME_LENGTH, .. })));
}

#[test]
fn entry_name_limit_counts_characters() {
    assert!(
        ConferenceEntry::new("ÉÉÉÉÉÉÉÉ", date!(2010 - 06 - 28), date!(2010 - 06 - 30), date!(2010 - 04 - 09), None)
            .is_ok()
    );
}

#[test]
fn entry_rejects_end_before_start() {
    let err = ConferenceEntry::new("X", date!(2010 - 06 - 28), date!(2010 - 06 - 27), date!(2010 - 04 - 09), None);
    assert!(matches!(err, Err(ValidationError::EndBeforeStart { .. })));
}

#[test]
fn entry_rejects_deadline_on_start_day() {
    let err = ConferenceEntry::new("X", date!(2010 - 06 - 28), date!(2010 - 06 - 30), date!(2010 - 06 - 28), None);
    assert!(matches!(err, Err(ValidationError::DeadlineNotBeforeStart { .. })));
}

#[test]
fn entry_rejects_notification_outside_window() {
    let start = date!(2010 - 06 - 28);
    let end = date!(2010 - 06 - 30);
    let deadline = date!(2010 - 04 - 09);

    let on_deadline = ConferenceEntry::new("X", start, end, deadline, Some(deadline));
    assert!(matches!(on_deadline, Err(ValidationError::NotificationNotAfterDeadline { .. })));

    let on_start = ConferenceEntry::new("X", start, end, deadline, Some(start));
    assert!(matches!(on_start, Err(ValidationError::NotificationNotBeforeStart { .. })));
}

#[test]
fn entry_checks_run_in_fixed_order() {
    // Long name and reversed dates: the name check comes first.
    let err = ConferenceEntry::new(
        "TOOLONGNAME",
        date!(2010 - 06 - 28),
        date!(2010 - 06 - 01),
        date!(2010 - 07 - 01),
        None,
    );
    assert!(matches!(err, Err(ValidationError::NameTooLong { .. })));
}

#[test]
fn padded_name_fills_to_max_length() {
    let short = entry("EG", date!(2010 - 04 - 09), date!(2010 - 06 - 28), date!(2010 - 06 - 30));
    assert_eq!(short.padded_name(), "EG______");
    let full = entry("EGSR2010", date!(2010 - 04 - 09), date!(2010 - 06 - 28), date!(2010 - 06 - 30));
    assert_eq!(full.padded_name(), "EGSR2010");
    assert_eq!(short.padded_name().chars().count(), MAX_CONF_NAME_LENGTH);
}

// =============================================================================
// PARSER
// =============================================================================

#[test]
fn header_accepts_version_two() {
    assert_eq!(parse_header("#! confdata 2"), Ok(()));
    assert_eq!(parse_header("  #!   confdata\t2  "), Ok(()));
}

#[test]
fn header_rejects_deviations() {
    assert_eq!(parse_header(""), Err(HeaderError::Missing));
    assert_eq!(parse_header("#! confdata"), Err(HeaderError::Missing));
    assert_eq!(parse_header("#! confdata 2 extra"), Err(HeaderError::Missing));
    assert!(matches!(parse_header("#! schedule 2"), Err(HeaderError::Malformed { .. })));
    assert!(matches!(parse_header("# confdata 2"), Err(HeaderError::Malformed { .. })));
    assert_eq!(parse_header("#! confdata 1"), Err(HeaderError::UnsupportedVersion { found: "1".to_owned() }));
}

#[test]
fn parse_two_entries_in_file_order() {
    let data = parse(TWO_ENTRIES).unwrap();
    let names: Vec<&str> = data.schedule.iter().map(ConferenceEntry::name).collect();
    assert_eq!(names, ["AAAA", "BBBB"]);
    assert_eq!(data.schedule.entries()[0].notification_date(), Some(date!(2010 - 05 - 14)));
    assert_eq!(data.schedule.entries()[1].notification_date(), None);
}

#[test]
fn parse_skips_comments_and_blank_lines() {
    let input = "#! confdata 2\n\n# comment\n   # indented comment\n   \nCONFITEM A 2010/06/28-2010/06/30 2010/04/09 <unknown>\n";
    let data = parse(input).unwrap();
    assert_eq!(data.schedule.len(), 1);
}

#[test]
fn parse_handles_crlf_line_endings() {
    let input = "#! confdata 2\r\nCONFITEM A 2010/06/28-2010/06/30 2010/04/09 <unknown>\r\n";
    assert_eq!(parse(input).unwrap().schedule.len(), 1);
}

#[test]
fn parse_keeps_datelines_without_scheduling_them() {
    let input = "#! confdata 2\nDATELINE 2010/05/11 11th_May\nCONFITEM A 2010/06/28-2010/06/30 2010/04/09 <unknown>\n";
    let data = parse(input).unwrap();
    assert_eq!(data.schedule.len(), 1);
    assert_eq!(data.datelines, vec![DateLine { date: date!(2010 - 05 - 11), label: "11th_May".to_owned() }]);
}

#[test]
fn parse_empty_input_is_header_error() {
    let err = parse("").unwrap_err();
    assert!(matches!(err, ChartError::Header { line: 1, reason: HeaderError::Missing }));
}

#[test]
fn parse_requires_header_on_first_line() {
    let err = parse("# comment\n#! confdata 2\n").unwrap_err();
    assert!(matches!(err, ChartError::Header { line: 1, .. }));
}

#[test]
fn parse_reports_unknown_command_with_line() {
    let input = "#! confdata 2\n# ok\nDEADLINE A 2010/06/28 x y\n";
    let err = parse(input).unwrap_err();
    assert!(matches!(&err, ChartError::UnknownCommand { line: 3, command } if command == "DEADLINE"));
    assert_eq!(err.line(), Some(3));
    assert!(err.to_string().starts_with("line 3: "));
}

#[test]
fn parse_rejects_wrong_field_counts() {
    let short = parse("#! confdata 2\nCONFITEM A 2010/06/28-2010/06/30 2010/04/09\n").unwrap_err();
    assert!(matches!(
        short,
        ChartError::Format { line: 2, source: FormatError::TokenCount { expected: 5, found: 4, .. } }
    ));

    let long = parse("#! confdata 2\nDATELINE 2010/05/11 a b\n").unwrap_err();
    assert!(matches!(
        long,
        ChartError::Format { line: 2, source: FormatError::TokenCount { expected: 3, found: 4, .. } }
    ));
}

#[test]
fn parse_rejects_range_without_dash() {
    let err = parse("#! confdata 2\nCONFITEM A 2010/06/28 2010/04/09 <unknown>\n").unwrap_err();
    assert!(matches!(err, ChartError::Format { line: 2, source: FormatError::BadDateRange { .. } }));
}

#[test]
fn parse_aborts_on_invalid_entry() {
    let input = "#! confdata 2
CONFITEM OK 2010/06/28-2010/06/30 2010/04/09 2010/05/14
CONFITEM X 2010/06/28-2010/06/27 2010/04/09 2010/05/14
CONFITEM LATER 2010/06/28-2010/06/30 2010/04/09 2010/05/14
";
    let err = parse(input).unwrap_err();
    assert!(matches!(err, ChartError::Validation { line: 3, source: ValidationError::EndBeforeStart { .. } }));
}

#[test]
fn parse_rejects_long_name() {
    let err = parse("#! confdata 2\nCONFITEM NINECHARS 2010/06/28-2010/06/30 2010/04/09 <unknown>\n").unwrap_err();
    assert!(matches!(err, ChartError::Validation { line: 2, source: ValidationError::NameTooLong { .. } }));
}

// =============================================================================
// SCHEDULE SET
// =============================================================================

#[test]
fn sort_orders_by_deadline() {
    let mut set = ScheduleSet::new();
    set.push(entry("LATE", date!(2010 - 05 - 11), date!(2010 - 12 - 15), date!(2010 - 12 - 18)));
    set.push(entry("EARLY", date!(2010 - 04 - 09), date!(2010 - 06 - 28), date!(2010 - 06 - 30)));
    set.sort_by_deadline();
    let names: Vec<&str> = set.iter().map(ConferenceEntry::name).collect();
    assert_eq!(names, ["EARLY", "LATE"]);
}

#[test]
fn sort_is_stable_and_idempotent() {
    let mut set = ScheduleSet::new();
    set.push(entry("B", date!(2010 - 04 - 09), date!(2010 - 06 - 28), date!(2010 - 06 - 30)));
    set.push(entry("Z", date!(2010 - 01 - 01), date!(2010 - 02 - 01), date!(2010 - 02 - 02)));
    set.push(entry("A", date!(2010 - 04 - 09), date!(2010 - 06 - 25), date!(2010 - 06 - 27)));

    set.sort_by_deadline();
    let once = set.clone();
    set.sort_by_deadline();
    assert_eq!(set, once);

    let names: Vec<&str> = set.iter().map(ConferenceEntry::name).collect();
    assert_eq!(names, ["Z", "B", "A"]);
}

#[test]
fn aggregates_fail_on_empty_set() {
    let set = ScheduleSet::new();
    assert_eq!(set.min_by_deadline(), Err(EmptyScheduleError));
    assert_eq!(set.max_by_end_date(), Err(EmptyScheduleError));
}

#[test]
fn aggregates_break_ties_by_first_entry() {
    let mut set = ScheduleSet::new();
    set.push(entry("FIRST", date!(2010 - 04 - 09), date!(2010 - 06 - 28), date!(2010 - 12 - 18)));
    set.push(entry("SECOND", date!(2010 - 04 - 09), date!(2010 - 12 - 15), date!(2010 - 12 - 18)));
    assert_eq!(set.min_by_deadline().unwrap().name(), "FIRST");
    assert_eq!(set.max_by_end_date().unwrap().name(), "FIRST");
}

#[test]
fn aggregates_pick_extremes() {
    let data = parse(TWO_ENTRIES).unwrap();
    assert_eq!(data.schedule.min_by_deadline().unwrap().name(), "AAAA");
    assert_eq!(data.schedule.max_by_end_date().unwrap().name(), "BBBB");
}
