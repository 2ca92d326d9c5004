//! Protected dashboard: navigation shell, company list and detail.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only authenticated route. On entry it re-syncs the session
//! from storage, then asks the catalog for all five lists. Each list loads on
//! its own; the detail panel decides when the joins may run.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use schema::ListKey;

use crate::components::company_detail::CompanyDetailPanel;
use crate::components::company_list::CompanyList;
use crate::components::left_nav::LeftNav;
use crate::net::loader;
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/` when the session holds no token.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    install_unauth_redirect(session, use_navigate());

    Effect::new(move || {
        if session.with(SessionState::is_authenticated) {
            loader::ensure_all(session, catalog, &ListKey::ALL);
        }
    });

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if session.with(|s| s.restored) { "Redirecting to login..." } else { "Loading..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <LeftNav/>
                <main class="dashboard-page__content">
                    <CompanyList/>
                    <CompanyDetailPanel/>
                </main>
            </div>
        </Show>
    }
}
