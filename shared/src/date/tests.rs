use super::*;
use chrono::Timelike;

#[test]
fn parses_rfc3339_with_offset() {
    let dt = parse_timestamp("2024-01-15T10:00:00+00:00").unwrap();
    assert_eq!(dt.hour(), 10);
}

#[test]
fn parses_naive_as_utc() {
    let dt = parse_timestamp("2024-01-15T10:00:00").unwrap();
    assert_eq!(dt, parse_timestamp("2024-01-15T10:00:00Z").unwrap());
}

#[test]
fn parses_fractional_seconds() {
    assert!(parse_timestamp("2024-01-15T10:00:00.123456").is_some());
}

#[test]
fn rejects_garbage() {
    assert!(parse_timestamp("not a date").is_none());
}

#[test]
fn displays_in_ist() {
    // 10:00 UTC is 15:30 IST.
    assert_eq!(display_ist("2024-01-15T10:00:00Z"), "15/1/2024, 3:30:00 pm");
}

#[test]
fn displays_morning_hours() {
    // 22:45 UTC the previous day is 04:15 IST.
    assert_eq!(display_ist("2024-01-14T22:45:00Z"), "15/1/2024, 4:15:00 am");
}

#[test]
fn unparseable_input_passes_through() {
    assert_eq!(display_ist("???"), "???");
}

#[test]
fn optional_display_defaults_to_empty() {
    assert_eq!(display_ist_opt(None), "");
    assert_eq!(
        display_ist_opt(Some("2024-01-15T10:00:00Z")),
        "15/1/2024, 3:30:00 pm"
    );
}

#[test]
fn edited_marker_rules() {
    assert!(!was_edited(Some("a"), Some("a")));
    assert!(was_edited(Some("a"), Some("b")));
    assert!(!was_edited(Some("a"), None));
    assert!(was_edited(None, Some("b")));
    assert!(!was_edited(None, None));
}
