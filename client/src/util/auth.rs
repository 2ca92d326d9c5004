//! Session guard and sign-in/sign-out flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes install `install_unauth_redirect`; the landing and auth
//! pages install `install_authed_redirect`. Both react to the `SessionState`
//! context, so a successful login or a logout moves the user without the
//! form or the navigation shell holding a navigator.
//!
//! DESIGN
//! ======
//! Storage is re-read on every protected-route entry, so a token removed in
//! another tab is noticed the next time the dashboard mounts. Redirects wait
//! for `restored`, which only becomes true in the browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::catalog::CatalogState;
use crate::state::form::DASHBOARD_ROUTE;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage;

/// Route unauthenticated users are sent to.
pub const LANDING_ROUTE: &str = "/";

/// Whether a protected page should send the user to the landing route.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.restored && !state.is_authenticated()
}

/// Whether an auth page should send the user on to the dashboard.
pub fn should_redirect_authed(state: &SessionState) -> bool {
    state.restored && state.is_authenticated()
}

/// Sync the session with the token in storage.
///
/// When storage is unavailable the in-memory token is kept as is.
pub fn restore_session(session: RwSignal<SessionState>) {
    match storage::load_token() {
        Some(token) => session.update(|s| s.restore(token)),
        None => session.update(|s| s.restored = true),
    }
}

pub fn sign_in(session: RwSignal<SessionState>, token: String) {
    storage::save_token(&token);
    session.update(|s| s.sign_in(token));
}

/// Forget the token and everything fetched with it.
pub fn sign_out(session: RwSignal<SessionState>, catalog: RwSignal<CatalogState>, ui: RwSignal<UiState>) {
    storage::remove_token();
    catalog.update(CatalogState::clear);
    ui.update(UiState::reset_for_logout);
    session.update(SessionState::sign_out);
}

/// Re-read storage on entry, then redirect to `/` whenever the session
/// holds no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || restore_session(session));
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LANDING_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard once the session holds a token.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&session.get()) {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });
}
