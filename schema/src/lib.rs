//! Shared record model for the Base11 knowledge base.
//!
//! This crate owns every entity shape, request payload, endpoint path and
//! field rule used by both `client` and `cli`. Each shape is declared once so
//! the validation layer and the data-fetching layer cannot drift apart.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod datetime;
pub mod detail;
pub mod endpoint;
pub mod entity;
pub mod payload;
pub mod validate;

pub use detail::{CompanyDetail, SnapshotLine};
pub use endpoint::{Endpoint, ListKey, api_base_url};
pub use entity::{
    Company, Industry, Location, Metric, MetricReading, MetricSnapshot, MetricType, Named, Permission, find_by_id,
};
pub use payload::{
    AuthToken, LoginRequest, NewCompany, NewIndustry, NewLocation, NewMetricSnapshot, Payload, RegisterRequest,
    SnapshotInput,
};
pub use validate::{FieldError, ValidationErrors};

/// A list response decoded for one [`ListKey`].
#[derive(Clone, Debug, PartialEq)]
pub enum ListPayload {
    Companies(Vec<Company>),
    Industries(Vec<Industry>),
    Locations(Vec<Location>),
    Metrics(Vec<Metric>),
    MetricSnapshots(Vec<MetricSnapshot>),
}

impl ListPayload {
    /// Decode a JSON array body fetched from `key`'s endpoint.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the body is not an array of the key's entity.
    pub fn decode(key: ListKey, body: &str) -> Result<Self, serde_json::Error> {
        Ok(match key {
            ListKey::Companies => Self::Companies(serde_json::from_str(body)?),
            ListKey::Industries => Self::Industries(serde_json::from_str(body)?),
            ListKey::Locations => Self::Locations(serde_json::from_str(body)?),
            ListKey::Metrics => Self::Metrics(serde_json::from_str(body)?),
            ListKey::MetricSnapshots => Self::MetricSnapshots(serde_json::from_str(body)?),
        })
    }

    /// The key this payload was decoded for.
    #[must_use]
    pub fn key(&self) -> ListKey {
        match self {
            Self::Companies(_) => ListKey::Companies,
            Self::Industries(_) => ListKey::Industries,
            Self::Locations(_) => ListKey::Locations,
            Self::Metrics(_) => ListKey::Metrics,
            Self::MetricSnapshots(_) => ListKey::MetricSnapshots,
        }
    }
}
