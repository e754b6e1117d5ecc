use super::*;

#[test]
fn counts_use_thousands_separators() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn minutes_format_as_hours_and_minutes() {
    assert_eq!(format_minutes(0), "0m");
    assert_eq!(format_minutes(45), "45m");
    assert_eq!(format_minutes(120), "2h");
    assert_eq!(format_minutes(135), "2h 15m");
    assert_eq!(format_minutes(60_000), "1,000h");
}

#[test]
fn duration_label_skips_missing_or_zero() {
    assert_eq!(format_duration(Some(45)).as_deref(), Some("45 min"));
    assert_eq!(format_duration(Some(0)), None);
    assert_eq!(format_duration(None), None);
}

#[test]
fn analytics_days_clamp_to_backend_range() {
    assert_eq!(clamp_days(0), 1);
    assert_eq!(clamp_days(30), 30);
    assert_eq!(clamp_days(365), 90);
    assert!(ANALYTICS_WINDOWS.contains(&DEFAULT_ANALYTICS_DAYS));
}

#[test]
fn timestamps_render_human_readable() {
    assert_eq!(format_timestamp("2024-03-01T10:05:00Z"), "Mar 1, 2024 10:05 AM");
    assert_eq!(format_timestamp("2024-12-25T18:30:00+00:00"), "Dec 25, 2024 6:30 PM");
}

#[test]
fn unparseable_timestamp_passes_through() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
}
