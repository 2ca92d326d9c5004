//! Server-owned entities mirrored from the remote API.
//!
//! DESIGN
//! ======
//! Ids are opaque strings minted by the API; the client never creates them.
//! Reference fields (`industry_id`, `location_id`, `metric_id`, `company_id`)
//! are resolved by lookups in `detail`, never trusted to exist.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime::{deserialize_lenient, deserialize_lenient_opt, format_long_date};

/// A record that can be offered in a reference picker.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(impl Named for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        })*
    };
}

impl_named!(Company, Industry, Location, Metric);

/// Find a record by id.
pub fn find_by_id<'a, T: Named>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub website: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Logo image URL.
    #[serde(default)]
    pub logo: Option<String>,
    pub industry_id: String,
    pub location_id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    /// City name.
    pub name: String,
    pub state: String,
    pub country: String,
    /// Five-character postal code.
    pub pincode: String,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Declared value type of a metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricType {
    #[default]
    Number,
    String,
    Datetime,
}

impl MetricType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Datetime => "DATETIME",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MetricType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub annualized: bool,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSnapshot {
    pub id: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub string_value: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub date_time_value: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub captured_at: DateTime<Utc>,
    pub metric_id: String,
    pub company_id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MetricSnapshot {
    /// The reading recorded for a metric of type `kind`.
    ///
    /// Falls back to the numeric value when the metric is unknown or the
    /// typed field is missing.
    #[must_use]
    pub fn reading(&self, kind: Option<MetricType>) -> MetricReading {
        match kind {
            Some(MetricType::String) => match &self.string_value {
                Some(text) => MetricReading::Text(text.clone()),
                None => MetricReading::Number(self.value),
            },
            Some(MetricType::Datetime) => match self.date_time_value {
                Some(at) => MetricReading::Date(at.date_naive()),
                None => MetricReading::Number(self.value),
            },
            Some(MetricType::Number) | None => MetricReading::Number(self.value),
        }
    }
}

/// A single snapshot reading, tagged by the metric's declared type.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricReading {
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for MetricReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Date(date) => f.write_str(&format_long_date(*date)),
        }
    }
}

/// Access level requested at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Permission {
    Admin,
    Read,
    Write,
}

impl Permission {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Read, Self::Write];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            other => Err(format!("unknown permission: {other}")),
        }
    }
}
