use super::*;
use crate::datetime::parse_lenient;
use crate::entity::MetricType;

fn company(id: &str, industry_id: &str, location_id: &str) -> Company {
    Company {
        id: id.to_owned(),
        name: "Acme".to_owned(),
        website: "https://acme.test".to_owned(),
        description: None,
        logo: None,
        industry_id: industry_id.to_owned(),
        location_id: location_id.to_owned(),
        created_at: None,
        updated_at: None,
    }
}

fn industry(id: &str, name: &str) -> Industry {
    Industry { id: id.to_owned(), name: name.to_owned(), created_at: None, updated_at: None }
}

fn location(id: &str, name: &str) -> Location {
    Location {
        id: id.to_owned(),
        name: name.to_owned(),
        state: "California".to_owned(),
        country: "USA".to_owned(),
        pincode: "94102".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

fn metric(id: &str, name: &str, kind: MetricType) -> Metric {
    Metric {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
        description: None,
        annualized: false,
        created_at: None,
        updated_at: None,
    }
}

fn snapshot(id: &str, company_id: &str, metric_id: &str, value: f64, captured: &str) -> MetricSnapshot {
    MetricSnapshot {
        id: id.to_owned(),
        value,
        string_value: None,
        date_time_value: None,
        captured_at: parse_lenient(captured).expect("date"),
        metric_id: metric_id.to_owned(),
        company_id: company_id.to_owned(),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn resolve_joins_industry_and_location() {
    let detail = CompanyDetail::resolve(
        &company("c1", "i1", "l1"),
        &[industry("i0", "Health"), industry("i1", "Tech")],
        &[location("l1", "San Francisco")],
        &[],
        &[],
    );
    assert_eq!(detail.industry_label(), "Tech");
    assert_eq!(detail.location_label(), "San Francisco");
    assert!(detail.snapshots.is_empty());
}

#[test]
fn resolve_filters_snapshots_by_company() {
    let detail = CompanyDetail::resolve(
        &company("c1", "i1", "l1"),
        &[],
        &[],
        &[metric("m1", "ARR", MetricType::Number)],
        &[
            snapshot("s1", "c1", "m1", 10.0, "2024-01-01"),
            snapshot("s2", "c2", "m1", 99.0, "2024-01-02"),
        ],
    );
    assert_eq!(detail.snapshots.len(), 1);
    let line = &detail.snapshots[0];
    assert_eq!(line.id, "s1");
    assert_eq!(line.metric_label(), "ARR");
    assert_eq!(line.reading.to_string(), "10");
    assert_eq!(line.captured_on, "January 1st, 2024");
}

#[test]
fn resolve_keeps_snapshot_order() {
    let detail = CompanyDetail::resolve(
        &company("c1", "i1", "l1"),
        &[],
        &[],
        &[],
        &[
            snapshot("s2", "c1", "m1", 2.0, "2024-02-01"),
            snapshot("s1", "c1", "m1", 1.0, "2024-01-01"),
        ],
    );
    let ids: Vec<&str> = detail.snapshots.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s2", "s1"]);
}

#[test]
fn missing_references_render_unknown() {
    let detail = CompanyDetail::resolve(
        &company("c1", "gone", "gone"),
        &[industry("i1", "Tech")],
        &[],
        &[],
        &[snapshot("s1", "c1", "m-missing", 3.0, "2024-01-01")],
    );
    assert!(detail.industry.is_none());
    assert_eq!(detail.industry_label(), UNKNOWN);
    assert_eq!(detail.location_label(), UNKNOWN);
    assert_eq!(detail.snapshots[0].metric_label(), UNKNOWN);
}

#[test]
fn text_metric_reading_uses_string_value() {
    let mut s = snapshot("s1", "c1", "m1", 0.0, "2024-01-01");
    s.string_value = Some("FY2023".to_owned());
    let detail = CompanyDetail::resolve(
        &company("c1", "i1", "l1"),
        &[],
        &[],
        &[metric("m1", "Fiscal Year", MetricType::String)],
        &[s],
    );
    assert_eq!(detail.snapshots[0].reading.to_string(), "FY2023");
}
