//! API endpoint paths and list cache keys.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Hosted API used when no base URL is supplied at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://b11-api-57a95f225119.herokuapp.com";

/// Base URL of the remote API, fixed at build time.
///
/// `BASE11_API_URL` set while compiling overrides the hosted default.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("BASE11_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Join a base URL and an absolute API path without doubling slashes.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Write endpoints accepted by the remote API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    Companies,
    Industry,
    Location,
    MetricSnapshots,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/api/login",
            Self::Register => "/api/register",
            Self::Companies => "/api/companies",
            Self::Industry => "/api/industry",
            Self::Location => "/api/location",
            Self::MetricSnapshots => "/api/metricsnapshots",
        }
    }

    /// Whether requests to this endpoint need the session token.
    #[must_use]
    pub fn requires_token(self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }
}

/// Cache key of one fetched entity list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListKey {
    Companies,
    Industries,
    Locations,
    Metrics,
    MetricSnapshots,
}

impl ListKey {
    /// Every list the dashboard depends on, in fetch order.
    pub const ALL: [Self; 5] = [
        Self::Companies,
        Self::Industries,
        Self::Locations,
        Self::Metrics,
        Self::MetricSnapshots,
    ];

    /// `GET` path for the list.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Companies => "/api/companies",
            Self::Industries => "/api/industries",
            Self::Locations => "/api/locations",
            Self::Metrics => "/api/metrics",
            Self::MetricSnapshots => "/api/metricsnapshots",
        }
    }

    /// Stable cache key name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Industries => "industries",
            Self::Locations => "locations",
            Self::Metrics => "metrics",
            Self::MetricSnapshots => "metricsnapshots",
        }
    }
}

impl std::fmt::Display for ListKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
