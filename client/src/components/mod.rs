//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render forms, overlays and dashboard panels while reading and
//! writing shared state from Leptos context providers.

pub mod company_detail;
pub mod company_form;
pub mod company_list;
pub mod field;
pub mod industry_form;
pub mod left_nav;
pub mod location_form;
pub mod metric_snapshot_form;
pub mod reference_picker;
pub mod sheet;
pub mod signin_form;
pub mod signup_form;
pub mod toaster;
