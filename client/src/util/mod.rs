//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! navigation effects) from page and component logic.

pub mod auth;
pub mod notify;
pub mod storage;
pub mod submit;
