//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `catalog`, `toast`, etc.) so each
//! component depends on a small focused model. Every model is plain data
//! with pure transitions; `App` wraps each in an `RwSignal` context.

pub mod catalog;
pub mod dashboard;
pub mod form;
pub mod picker;
pub mod session;
pub mod toast;
pub mod ui;
