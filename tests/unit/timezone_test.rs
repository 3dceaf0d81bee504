use chrono::{TimeZone, Timelike, Utc};
use sevadesk::core::timezone::{parse_api_timestamp, DisplayZone, IST_OFFSET_MINUTES};

#[test]
fn test_default_zone_is_ist() {
    assert_eq!(DisplayZone::default(), DisplayZone::ist());
    assert_eq!(
        DisplayZone::default(),
        DisplayZone::from_offset_minutes(IST_OFFSET_MINUTES).unwrap()
    );
}

#[test]
fn test_deleted_at_rendered_in_ist() {
    // Deleted at 20:00 UTC shows as 01:30 the next day in India
    let deleted_at = Utc.with_ymd_and_hms(2025, 11, 1, 20, 0, 0).unwrap();
    let rendered = DisplayZone::ist().format(deleted_at);

    assert_eq!(rendered, "2025-11-02 01:30 +05:30");
}

#[test]
fn test_utc_zone_passthrough() {
    let utc_time = Utc.with_ymd_and_hms(2025, 11, 3, 10, 0, 0).unwrap();
    let converted = DisplayZone::utc().convert(utc_time);

    assert_eq!(converted.hour(), 10);
    assert_eq!(DisplayZone::utc().format(utc_time), "2025-11-03 10:00 +00:00");
}

#[test]
fn test_negative_offset() {
    let zone = DisplayZone::from_offset_minutes(-300).unwrap();
    let utc_time = Utc.with_ymd_and_hms(2025, 11, 3, 2, 0, 0).unwrap();

    assert_eq!(zone.format(utc_time), "2025-11-02 21:00 -05:00");
}

#[test]
fn test_parse_timestamp_shapes() {
    let expected = Utc.with_ymd_and_hms(2025, 11, 1, 10, 0, 0).unwrap();

    assert_eq!(parse_api_timestamp("2025-11-01T10:00:00.000Z"), Some(expected));
    assert_eq!(parse_api_timestamp("2025-11-01T15:30:00+05:30"), Some(expected));
    assert_eq!(parse_api_timestamp("2025-11-01T10:00:00"), Some(expected));
    assert_eq!(parse_api_timestamp("2025-11-01 10:00:00"), Some(expected));
    assert_eq!(
        parse_api_timestamp(&expected.timestamp_millis().to_string()),
        Some(expected)
    );
}

#[test]
fn test_extreme_offsets_are_errors() {
    for minutes in [i32::MIN, i32::MIN + 1, -14 * 60 - 1, 14 * 60 + 1, i32::MAX] {
        assert!(
            DisplayZone::from_offset_minutes(minutes).is_err(),
            "offset {minutes} should be rejected"
        );
    }
    assert!(DisplayZone::from_offset_minutes(14 * 60).is_ok());
}

#[test]
fn test_round_trip_through_display_zone() {
    let original = Utc.with_ymd_and_hms(2025, 11, 3, 10, 0, 0).unwrap();
    let local = DisplayZone::ist().convert(original);

    assert_eq!(local.with_timezone(&Utc), original);
}
