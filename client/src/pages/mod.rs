//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, initial fetches) and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod signin;
pub mod signup;
