//! Fetch-and-cache glue between `ApiClient` and `CatalogState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `ensure_all` from an effect on mount; form submissions call
//! `refresh` for the list their payload invalidates. Both only run in the
//! browser, because effects and event handlers never run during SSR.

use leptos::prelude::*;
use schema::ListKey;

use crate::net::api::ApiClient;
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;

/// Fetch `key` now, superseding any fetch already in flight for it.
pub fn refresh(session: RwSignal<SessionState>, catalog: RwSignal<CatalogState>, key: ListKey) {
    let Some(seq) = catalog.try_update(|c| c.begin(key)) else {
        return;
    };
    let client = session.with_untracked(ApiClient::from_session);
    leptos::task::spawn_local(async move {
        let result = client.fetch_list(key).await.map_err(|e| {
            #[cfg(feature = "hydrate")]
            log::warn!("fetching {key} failed: {e}");
            e.to_string()
        });
        catalog.try_update(|c| {
            c.finish(key, seq, result);
        });
    });
}

/// Fetch `key` unless it is cached or loading. A list that failed before it
/// ever loaded is fetched again.
pub fn ensure(session: RwSignal<SessionState>, catalog: RwSignal<CatalogState>, key: ListKey) {
    if catalog.with_untracked(|c| c.needs_fetch(key)) {
        refresh(session, catalog, key);
    }
}

pub fn ensure_all(session: RwSignal<SessionState>, catalog: RwSignal<CatalogState>, keys: &[ListKey]) {
    for &key in keys {
        ensure(session, catalog, key);
    }
}
