//! Networking modules for the remote HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs single requests; `loader` feeds list responses into the
//! shared catalog cache.

pub mod api;
pub mod loader;
