//! Request bodies posted to the API, each bound to one endpoint.
//!
//! DESIGN
//! ======
//! A [`Payload`] carries everything the submit workflow needs to know about a
//! form: where it goes, how it validates, how its response decodes and which
//! cached list becomes stale once it succeeds. Callers stay generic over it.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::datetime::{midnight_utc, parse_date_input};
use crate::endpoint::{Endpoint, ListKey};
use crate::entity::{MetricReading, MetricType, Permission};
use crate::validate::{self, ValidationErrors};

/// A validated request body bound to one API endpoint.
pub trait Payload: Serialize {
    /// Decoded success response.
    type Response;

    /// Endpoint the payload is posted to.
    const ENDPOINT: Endpoint;

    /// Cached list made stale by a successful submission.
    const INVALIDATES: Option<ListKey>;

    /// Check field shapes before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Decode the success body.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the body does not match [`Self::Response`].
    fn decode_response(body: &str) -> Result<Self::Response, serde_json::Error>;
}

/// `{token}` returned by login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Payload for LoginRequest {
    type Response = AuthToken;
    const ENDPOINT: Endpoint = Endpoint::Login;
    const INVALIDATES: Option<ListKey> = None;

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("email", validate::email(&self.email));
        errors.check("password", validate::min_chars(&self.password, 6));
        errors.into_result()
    }

    fn decode_response(body: &str) -> Result<AuthToken, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub permissions: Option<Permission>,
}

impl Payload for RegisterRequest {
    type Response = AuthToken;
    const ENDPOINT: Endpoint = Endpoint::Register;
    const INVALIDATES: Option<ListKey> = None;

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("email", validate::email(&self.email));
        errors.check("password", validate::min_chars(&self.password, 6));
        if self.permissions.is_none() {
            errors.push("permissions", "Select access permissions");
        }
        errors.into_result()
    }

    fn decode_response(body: &str) -> Result<AuthToken, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewIndustry {
    pub name: String,
}

impl Payload for NewIndustry {
    type Response = ();
    const ENDPOINT: Endpoint = Endpoint::Industry;
    const INVALIDATES: Option<ListKey> = Some(ListKey::Industries);

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("name", validate::min_chars(&self.name, 3));
        errors.into_result()
    }

    fn decode_response(_body: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewLocation {
    /// City name.
    pub name: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

impl Payload for NewLocation {
    type Response = ();
    const ENDPOINT: Endpoint = Endpoint::Location;
    const INVALIDATES: Option<ListKey> = Some(ListKey::Locations);

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("name", validate::min_chars(&self.name, 3));
        errors.check("state", validate::min_chars(&self.state, 3));
        errors.check("country", validate::min_chars(&self.country, 3));
        errors.check("pincode", validate::exact_chars(&self.pincode, 5));
        errors.into_result()
    }

    fn decode_response(_body: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub website: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub industry_id: Option<String>,
    pub location_id: Option<String>,
}

impl NewCompany {
    /// Build from raw form text; blank optional fields become `None`.
    #[must_use]
    pub fn from_form(
        name: &str,
        website: &str,
        description: &str,
        logo: &str,
        industry_id: Option<String>,
        location_id: Option<String>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            website: website.trim().to_owned(),
            description: validate::non_blank(Some(description)),
            logo: validate::non_blank(Some(logo)),
            industry_id,
            location_id,
        }
    }
}

impl Payload for NewCompany {
    type Response = ();
    const ENDPOINT: Endpoint = Endpoint::Companies;
    const INVALIDATES: Option<ListKey> = Some(ListKey::Companies);

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("name", validate::min_chars(&self.name, 3));
        errors.check("website", validate::url(&self.website));
        if let Some(description) = &self.description {
            errors.check("description", validate::min_chars(description, 10));
        }
        if let Some(logo) = &self.logo {
            errors.check("logo", validate::url(logo));
        }
        if self.industry_id.as_deref().is_none_or(str::is_empty) {
            errors.push("industryId", "Select an industry");
        }
        if self.location_id.as_deref().is_none_or(str::is_empty) {
            errors.push("locationId", "Select a location");
        }
        errors.into_result()
    }

    fn decode_response(_body: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

/// Raw metric snapshot form values.
#[derive(Clone, Copy, Debug)]
pub struct SnapshotInput<'a> {
    pub company_id: &'a str,
    /// Selected metric id and its declared type.
    pub metric: Option<(&'a str, MetricType)>,
    /// `YYYY-MM-DD` capture date.
    pub captured_on: &'a str,
    /// Reading as typed; interpreted by the metric's type.
    pub value: &'a str,
}

/// A metric reading for one company on one date.
///
/// Exactly one typed reading is carried; the wire still requires a numeric
/// `value`, which is `0` for text and date readings.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMetricSnapshot {
    pub metric_id: String,
    pub company_id: String,
    pub captured_on: NaiveDate,
    pub reading: MetricReading,
}

impl NewMetricSnapshot {
    /// Parse raw form values, tagging the reading by the metric's type.
    ///
    /// # Errors
    ///
    /// Returns every field that is missing, unparsable or fails its rule.
    pub fn from_input(input: SnapshotInput<'_>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let captured_on = parse_date_input(input.captured_on);
        if captured_on.is_none() {
            errors.push("capturedAt", "Pick the date the metric was captured");
        }

        let reading = match input.metric {
            None => {
                errors.push("metricId", "Select a metric");
                None
            }
            Some((_, kind)) => match parse_reading(kind, input.value) {
                Ok(reading) => Some(reading),
                Err(message) => {
                    errors.push("value", message);
                    None
                }
            },
        };

        match (input.metric, captured_on, reading) {
            (Some((metric_id, _)), Some(captured_on), Some(reading)) if errors.is_empty() => {
                let snapshot = Self {
                    metric_id: metric_id.to_owned(),
                    company_id: input.company_id.to_owned(),
                    captured_on,
                    reading,
                };
                snapshot.validate()?;
                Ok(snapshot)
            }
            _ => Err(errors),
        }
    }
}

fn parse_reading(kind: MetricType, raw: &str) -> Result<MetricReading, String> {
    match kind {
        MetricType::Number => validate::parse_number(raw).map(MetricReading::Number),
        MetricType::String => validate::non_blank(Some(raw))
            .map(MetricReading::Text)
            .ok_or_else(|| "Enter a value".to_owned()),
        MetricType::Datetime => parse_date_input(raw)
            .map(MetricReading::Date)
            .ok_or_else(|| "Pick a date".to_owned()),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotWire<'a> {
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    string_value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_time_value: Option<DateTime<Utc>>,
    captured_at: DateTime<Utc>,
    metric_id: &'a str,
    company_id: &'a str,
}

impl Serialize for NewMetricSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (value, string_value, date_time_value) = match &self.reading {
            MetricReading::Number(v) => (*v, None, None),
            MetricReading::Text(text) => (0.0, Some(text.as_str()), None),
            MetricReading::Date(date) => (0.0, None, Some(midnight_utc(*date))),
        };
        SnapshotWire {
            value,
            string_value,
            date_time_value,
            captured_at: midnight_utc(self.captured_on),
            metric_id: &self.metric_id,
            company_id: &self.company_id,
        }
        .serialize(serializer)
    }
}

impl Payload for NewMetricSnapshot {
    type Response = ();
    const ENDPOINT: Endpoint = Endpoint::MetricSnapshots;
    const INVALIDATES: Option<ListKey> = Some(ListKey::MetricSnapshots);

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.metric_id.is_empty() {
            errors.push("metricId", "Select a metric");
        }
        match &self.reading {
            MetricReading::Number(v) => errors.check("value", validate::two_decimals(*v)),
            MetricReading::Text(text) if text.trim().is_empty() => errors.push("value", "Enter a value"),
            MetricReading::Text(_) | MetricReading::Date(_) => {}
        }
        errors.into_result()
    }

    fn decode_response(_body: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}
