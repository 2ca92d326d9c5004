use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// =============================================================
// parse_lenient
// =============================================================

#[test]
fn parse_lenient_accepts_rfc3339() {
    let dt = parse_lenient("2024-03-05T10:30:00.000Z").expect("timestamp");
    assert_eq!(dt.date_naive(), date(2024, 3, 5));
}

#[test]
fn parse_lenient_normalizes_offsets_to_utc() {
    let dt = parse_lenient("2024-03-05T01:00:00+02:00").expect("timestamp");
    assert_eq!(dt.date_naive(), date(2024, 3, 4));
}

#[test]
fn parse_lenient_accepts_bare_date_as_midnight() {
    let dt = parse_lenient("2024-01-01").expect("timestamp");
    assert_eq!(dt, midnight_utc(date(2024, 1, 1)));
}

#[test]
fn parse_lenient_rejects_garbage() {
    assert!(parse_lenient("yesterday").is_none());
    assert!(parse_lenient("").is_none());
}

#[test]
fn parse_date_input_trims() {
    assert_eq!(parse_date_input(" 2023-12-31 "), Some(date(2023, 12, 31)));
    assert_eq!(parse_date_input("31/12/2023"), None);
}

// =============================================================
// format_long_date
// =============================================================

#[test]
fn format_long_date_uses_ordinals() {
    assert_eq!(format_long_date(date(2024, 1, 1)), "January 1st, 2024");
    assert_eq!(format_long_date(date(2024, 2, 2)), "February 2nd, 2024");
    assert_eq!(format_long_date(date(2024, 3, 3)), "March 3rd, 2024");
    assert_eq!(format_long_date(date(2024, 4, 4)), "April 4th, 2024");
}

#[test]
fn format_long_date_teens_use_th() {
    assert_eq!(format_long_date(date(2024, 5, 11)), "May 11th, 2024");
    assert_eq!(format_long_date(date(2024, 5, 12)), "May 12th, 2024");
    assert_eq!(format_long_date(date(2024, 5, 13)), "May 13th, 2024");
}

#[test]
fn format_long_date_twenties_and_thirties() {
    assert_eq!(format_long_date(date(2024, 6, 21)), "June 21st, 2024");
    assert_eq!(format_long_date(date(2024, 6, 22)), "June 22nd, 2024");
    assert_eq!(format_long_date(date(2024, 6, 23)), "June 23rd, 2024");
    assert_eq!(format_long_date(date(2024, 7, 31)), "July 31st, 2024");
}

// =============================================================
// serde helpers
// =============================================================

#[derive(serde::Deserialize)]
struct Stamped {
    #[serde(deserialize_with = "deserialize_lenient")]
    at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    maybe: Option<DateTime<Utc>>,
}

#[test]
fn deserialize_helpers_accept_both_shapes() {
    let v: Stamped = serde_json::from_str(r#"{"at":"2024-01-01","maybe":"2024-02-01T00:00:00Z"}"#).expect("decode");
    assert_eq!(v.at.date_naive(), date(2024, 1, 1));
    assert_eq!(v.maybe.map(|d| d.date_naive()), Some(date(2024, 2, 1)));
}

#[test]
fn deserialize_optional_accepts_null_and_missing() {
    let v: Stamped = serde_json::from_str(r#"{"at":"2024-01-01","maybe":null}"#).expect("decode");
    assert!(v.maybe.is_none());
    let v: Stamped = serde_json::from_str(r#"{"at":"2024-01-01"}"#).expect("decode");
    assert!(v.maybe.is_none());
}

#[test]
fn deserialize_rejects_invalid_timestamp() {
    assert!(serde_json::from_str::<Stamped>(r#"{"at":"soon"}"#).is_err());
}
