//! Derived views for the dashboard's master list and detail panel.
//!
//! DESIGN
//! ======
//! The five lists load independently. The company list only depends on the
//! companies slot, but the detail panel waits for every slot: joining before
//! that would render references that merely have not arrived yet as missing.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use schema::{Company, CompanyDetail, ListKey, find_by_id};

use crate::state::catalog::{CatalogState, ListStatus};

/// Shown wherever a list fetch failed.
pub const API_ERROR: &str = "API Error";

#[derive(Clone, Debug, PartialEq)]
pub enum CompanyListView {
    Loading,
    Failed,
    Items(Vec<Company>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailView {
    /// Nothing selected, or the selection is no longer in the list.
    Empty,
    Loading,
    Failed(ListKey),
    Ready(Box<CompanyDetail>),
}

#[must_use]
pub fn company_list_view(catalog: &CatalogState) -> CompanyListView {
    match catalog.status(ListKey::Companies) {
        ListStatus::Ready => CompanyListView::Items(catalog.companies.items_or_empty().to_vec()),
        ListStatus::Failed => CompanyListView::Failed,
        ListStatus::Idle | ListStatus::Loading => CompanyListView::Loading,
    }
}

#[must_use]
pub fn detail_view(catalog: &CatalogState, selected: Option<&str>) -> DetailView {
    let Some(selected) = selected else {
        return DetailView::Empty;
    };
    if let Some((key, _)) = catalog.first_failure(&ListKey::ALL) {
        return DetailView::Failed(key);
    }
    if !catalog.all_ready(&ListKey::ALL) {
        return DetailView::Loading;
    }
    let Some(company) = find_by_id(catalog.companies.items_or_empty(), selected) else {
        return DetailView::Empty;
    };
    DetailView::Ready(Box::new(CompanyDetail::resolve(
        company,
        catalog.industries.items_or_empty(),
        catalog.locations.items_or_empty(),
        catalog.metrics.items_or_empty(),
        catalog.snapshots.items_or_empty(),
    )))
}
