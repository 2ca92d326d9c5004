use super::*;

// =============================================================
// Decoding
// =============================================================

#[test]
fn company_decodes_camel_case_wire_shape() {
    let raw = r#"{
        "id": "c1",
        "name": "Acme",
        "website": "https://acme.test",
        "description": null,
        "logo": null,
        "industryId": "i1",
        "locationId": "l1",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-02T00:00:00.000Z"
    }"#;
    let company: Company = serde_json::from_str(raw).expect("company");
    assert_eq!(company.industry_id, "i1");
    assert_eq!(company.location_id, "l1");
    assert!(company.description.is_none());
    assert!(company.created_at.is_some());
}

#[test]
fn company_decodes_without_optional_fields() {
    let raw = r#"{"id":"c1","name":"Acme","website":"https://acme.test","industryId":"i1","locationId":"l1"}"#;
    let company: Company = serde_json::from_str(raw).expect("company");
    assert!(company.logo.is_none());
    assert!(company.created_at.is_none());
}

#[test]
fn metric_decodes_type_field() {
    let raw = r#"{"id":"m1","name":"ARR","type":"NUMBER","description":null,"annualized":true}"#;
    let metric: Metric = serde_json::from_str(raw).expect("metric");
    assert_eq!(metric.kind, MetricType::Number);
    assert!(metric.annualized);
}

#[test]
fn metric_type_rejects_lowercase() {
    assert!(serde_json::from_str::<MetricType>("\"number\"").is_err());
    assert_eq!(serde_json::from_str::<MetricType>("\"DATETIME\"").expect("type"), MetricType::Datetime);
}

#[test]
fn snapshot_decodes_bare_capture_date() {
    let raw = r#"{"id":"s1","companyId":"c1","metricId":"m1","value":10,"capturedAt":"2024-01-01"}"#;
    let snapshot: MetricSnapshot = serde_json::from_str(raw).expect("snapshot");
    assert_eq!(snapshot.value, 10.0);
    assert_eq!(snapshot.captured_at.date_naive().to_string(), "2024-01-01");
    assert!(snapshot.string_value.is_none());
    assert!(snapshot.date_time_value.is_none());
}

// =============================================================
// Readings
// =============================================================

fn snapshot() -> MetricSnapshot {
    MetricSnapshot {
        id: "s1".to_owned(),
        value: 42.5,
        string_value: Some("FY2023".to_owned()),
        date_time_value: crate::datetime::parse_lenient("2023-06-15"),
        captured_at: crate::datetime::parse_lenient("2024-01-01").expect("date"),
        metric_id: "m1".to_owned(),
        company_id: "c1".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn reading_follows_metric_type() {
    let s = snapshot();
    assert_eq!(s.reading(Some(MetricType::Number)), MetricReading::Number(42.5));
    assert_eq!(s.reading(Some(MetricType::String)), MetricReading::Text("FY2023".to_owned()));
    assert_eq!(s.reading(Some(MetricType::Datetime)).to_string(), "June 15th, 2023");
}

#[test]
fn reading_falls_back_to_number() {
    let mut s = snapshot();
    s.string_value = None;
    assert_eq!(s.reading(Some(MetricType::String)), MetricReading::Number(42.5));
    assert_eq!(s.reading(None), MetricReading::Number(42.5));
}

#[test]
fn number_reading_displays_like_plain_numbers() {
    assert_eq!(MetricReading::Number(10.0).to_string(), "10");
    assert_eq!(MetricReading::Number(42.5).to_string(), "42.5");
}

// =============================================================
// Permission / Named
// =============================================================

#[test]
fn permission_parses_case_insensitively() {
    assert_eq!("admin".parse::<Permission>(), Ok(Permission::Admin));
    assert_eq!(" Write ".parse::<Permission>(), Ok(Permission::Write));
    assert!("owner".parse::<Permission>().is_err());
}

#[test]
fn permission_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Permission::Read).expect("json"), "\"READ\"");
}

#[test]
fn find_by_id_returns_matching_record() {
    let industries = vec![
        Industry { id: "1".to_owned(), name: "Fintech".to_owned(), created_at: None, updated_at: None },
        Industry { id: "2".to_owned(), name: "Health".to_owned(), created_at: None, updated_at: None },
    ];
    assert_eq!(find_by_id(&industries, "2").map(Named::name), Some("Health"));
    assert!(find_by_id(&industries, "3").is_none());
}
