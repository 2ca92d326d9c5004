use super::*;

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest { email: email.to_owned(), password: password.to_owned() }
}

fn snapshot_input<'a>(metric: Option<(&'a str, MetricType)>, captured_on: &'a str, value: &'a str) -> SnapshotInput<'a> {
    SnapshotInput { company_id: "c1", metric, captured_on, value }
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_password_boundary() {
    assert!(login("a@b.co", "123456").validate().is_ok());
    let errors = login("a@b.co", "12345").validate().expect_err("short password");
    assert!(errors.message_for("password").is_some());
    assert!(errors.message_for("email").is_none());
}

#[test]
fn login_reports_bad_email() {
    let errors = login("not-an-email", "secret123").validate().expect_err("bad email");
    assert_eq!(errors.message_for("email"), Some("Invalid email"));
}

#[test]
fn login_serializes_email_and_password() {
    let body = serde_json::to_value(login("a@b.co", "secret")).expect("json");
    assert_eq!(body, serde_json::json!({ "email": "a@b.co", "password": "secret" }));
}

#[test]
fn auth_token_decodes() {
    let token = LoginRequest::decode_response(r#"{"token":"abc"}"#).expect("token");
    assert_eq!(token.token, "abc");
    assert!(RegisterRequest::decode_response("{}").is_err());
}

#[test]
fn register_requires_permission_choice() {
    let mut req = RegisterRequest {
        email: "john@base10.com".to_owned(),
        password: "hunter22".to_owned(),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        permissions: None,
    };
    let errors = req.validate().expect_err("permission missing");
    assert!(errors.message_for("permissions").is_some());

    req.permissions = Some(Permission::Write);
    assert!(req.validate().is_ok());
    let body = serde_json::to_value(&req).expect("json");
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["permissions"], "WRITE");
}

#[test]
fn auth_payloads_invalidate_nothing() {
    assert_eq!(LoginRequest::INVALIDATES, None);
    assert_eq!(RegisterRequest::INVALIDATES, None);
    assert_eq!(LoginRequest::ENDPOINT, Endpoint::Login);
    assert_eq!(RegisterRequest::ENDPOINT, Endpoint::Register);
}

// =============================================================
// Entity payloads
// =============================================================

#[test]
fn industry_name_min_length() {
    assert!(NewIndustry { name: "Fintech".to_owned() }.validate().is_ok());
    assert!(NewIndustry { name: "AI".to_owned() }.validate().is_err());
    assert_eq!(NewIndustry::INVALIDATES, Some(ListKey::Industries));
}

#[test]
fn location_pincode_must_be_five_chars() {
    let mut loc = NewLocation {
        name: "San Francisco".to_owned(),
        state: "California".to_owned(),
        country: "United States".to_owned(),
        pincode: "94102".to_owned(),
    };
    assert!(loc.validate().is_ok());

    loc.pincode = "ABCDE".to_owned();
    assert!(loc.validate().is_ok());

    loc.pincode = "941".to_owned();
    let errors = loc.validate().expect_err("short pincode");
    assert_eq!(errors.message_for("pincode"), Some("Must contain exactly 5 character(s)"));
}

#[test]
fn location_reports_every_short_field() {
    let loc = NewLocation {
        name: "SF".to_owned(),
        state: "CA".to_owned(),
        country: "US".to_owned(),
        pincode: "94102".to_owned(),
    };
    let errors = loc.validate().expect_err("short fields");
    assert_eq!(errors.0.len(), 3);
    assert_eq!(NewLocation::ENDPOINT.path(), "/api/location");
}

#[test]
fn company_from_form_drops_blank_optionals() {
    let company = NewCompany::from_form("Stripe", " https://stripe.com ", "  ", "", Some("i1".to_owned()), Some("l1".to_owned()));
    assert_eq!(company.website, "https://stripe.com");
    assert!(company.description.is_none());
    assert!(company.logo.is_none());
    assert!(company.validate().is_ok());

    let body = serde_json::to_value(&company).expect("json");
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Stripe",
            "website": "https://stripe.com",
            "industryId": "i1",
            "locationId": "l1"
        })
    );
}

#[test]
fn company_validates_optional_fields_when_present() {
    let company = NewCompany::from_form(
        "Stripe",
        "https://stripe.com",
        "Payments",
        "stripe.com/logo.png",
        Some("i1".to_owned()),
        Some("l1".to_owned()),
    );
    let errors = company.validate().expect_err("bad optionals");
    assert!(errors.message_for("description").is_some());
    assert_eq!(errors.message_for("logo"), Some("Invalid url"));
}

#[test]
fn company_requires_picker_selections() {
    let company = NewCompany::from_form("Stripe", "https://stripe.com", "", "", None, Some(String::new()));
    let errors = company.validate().expect_err("no selections");
    assert!(errors.message_for("industryId").is_some());
    assert!(errors.message_for("locationId").is_some());
    assert_eq!(NewCompany::INVALIDATES, Some(ListKey::Companies));
}

// =============================================================
// Metric snapshots
// =============================================================

#[test]
fn snapshot_accepts_two_decimal_number() {
    let snap = NewMetricSnapshot::from_input(snapshot_input(Some(("m1", MetricType::Number)), "2024-01-01", "42.5"))
        .expect("valid snapshot");
    assert_eq!(snap.reading, MetricReading::Number(42.5));
    assert_eq!(snap.company_id, "c1");
}

#[test]
fn snapshot_rejects_three_decimal_number() {
    let errors = NewMetricSnapshot::from_input(snapshot_input(Some(("m1", MetricType::Number)), "2024-01-01", "42.567"))
        .expect_err("too precise");
    assert!(errors.message_for("value").is_some());
}

#[test]
fn snapshot_reports_missing_metric_and_date() {
    let errors = NewMetricSnapshot::from_input(snapshot_input(None, "", "1")).expect_err("missing fields");
    assert!(errors.message_for("metricId").is_some());
    assert!(errors.message_for("capturedAt").is_some());
}

#[test]
fn snapshot_number_serializes_numeric_value_only() {
    let snap = NewMetricSnapshot::from_input(snapshot_input(Some(("m1", MetricType::Number)), "2024-01-01", "10"))
        .expect("valid");
    let body = serde_json::to_value(&snap).expect("json");
    assert_eq!(
        body,
        serde_json::json!({
            "value": 10.0,
            "capturedAt": "2024-01-01T00:00:00Z",
            "metricId": "m1",
            "companyId": "c1"
        })
    );
}

#[test]
fn snapshot_text_reading_is_exclusive() {
    let snap = NewMetricSnapshot::from_input(snapshot_input(Some(("m2", MetricType::String)), "2024-01-01", "FY2023"))
        .expect("valid");
    let body = serde_json::to_value(&snap).expect("json");
    assert_eq!(body["value"], 0.0);
    assert_eq!(body["stringValue"], "FY2023");
    assert!(body.get("dateTimeValue").is_none());
}

#[test]
fn snapshot_date_reading_is_exclusive() {
    let snap = NewMetricSnapshot::from_input(snapshot_input(Some(("m3", MetricType::Datetime)), "2024-01-01", "2021-05-10"))
        .expect("valid");
    let body = serde_json::to_value(&snap).expect("json");
    assert_eq!(body["dateTimeValue"], "2021-05-10T00:00:00Z");
    assert!(body.get("stringValue").is_none());
}

#[test]
fn snapshot_blank_text_is_rejected() {
    let errors = NewMetricSnapshot::from_input(snapshot_input(Some(("m2", MetricType::String)), "2024-01-01", "   "))
        .expect_err("blank text");
    assert_eq!(errors.message_for("value"), Some("Enter a value"));
}

#[test]
fn snapshot_endpoint_and_invalidation() {
    assert_eq!(NewMetricSnapshot::ENDPOINT, Endpoint::MetricSnapshots);
    assert_eq!(NewMetricSnapshot::INVALIDATES, Some(ListKey::MetricSnapshots));
}
