//! HTTP adapter for the remote Base11 API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since the
//! API is only ever reached from the browser.
//!
//! DESIGN
//! ======
//! URLs are built from one base URL fixed at compile time. The session token
//! is read from the caller's `SessionState` at request time and sent verbatim
//! in an `authorization` header, with no `Bearer ` prefix.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies each map to an
//! `ApiError` variant. Callers turn them into a toast and a console warning;
//! nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::{Endpoint, ListKey, ListPayload, Payload, api_base_url, endpoint::join_url};

use crate::state::session::SessionState;

pub const AUTHORIZATION_HEADER: &str = "authorization";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map an HTTP status to success or `ApiError::Status`.
///
/// # Errors
///
/// Returns `ApiError::Status` for anything outside 200..=299.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self { base_url: base_url.into(), token }
    }

    /// Client for the built-in base URL carrying the session's token.
    #[must_use]
    pub fn from_session(session: &SessionState) -> Self {
        Self::new(api_base_url(), session.token.clone())
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Token to send for `endpoint`, if it needs one and one is held.
    #[must_use]
    pub fn authorization(&self, endpoint: Endpoint) -> Option<&str> {
        if endpoint.requires_token() { self.list_authorization() } else { None }
    }

    /// Token to send with list reads.
    #[must_use]
    pub fn list_authorization(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// `GET` the list behind `key`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status or a body
    /// that does not decode as the key's entity list.
    pub async fn fetch_list(&self, key: ListKey) -> Result<ListPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(key.path());
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(token) = self.list_authorization() {
                request = request.header(AUTHORIZATION_HEADER, token);
            }
            let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(response.status())?;
            let body = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            ListPayload::decode(key, &body).map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a payload to its endpoint and decode the response.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on encode or transport failure, non-2xx status,
    /// or a body that does not match the payload's response type.
    pub async fn post<P: Payload>(&self, payload: &P) -> Result<P::Response, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(P::ENDPOINT.path());
            let mut request = gloo_net::http::Request::post(&url);
            if let Some(token) = self.authorization(P::ENDPOINT) {
                request = request.header(AUTHORIZATION_HEADER, token);
            }
            let response = request
                .json(payload)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(response.status())?;
            let body = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            P::decode_response(&body).map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }
}
