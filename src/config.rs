//! Host server configuration from the environment.
//!
//! DESIGN
//! ======
//! Only the listen port is ours to configure; Leptos reads its own options
//! from `[package.metadata.leptos]` and `LEPTOS_*` variables. Lookups go
//! through a closure so tests never touch the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`: expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` when `PORT` is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` when `PORT` is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()) {
            None => DEFAULT_PORT,
            Some(raw) if raw.is_empty() => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
        };
        Ok(Self { port })
    }

    /// Listen on every interface, as container platforms expect.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
