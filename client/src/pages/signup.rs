//! Standalone registration route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::signup_form::SignupForm;
use crate::state::session::SessionState;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_authed_redirect(session, use_navigate());

    view! {
        <main class="auth-page">
            <SignupForm/>
            <p class="auth-page__switch">"Already registered? " <a href="/signin">"Log in"</a></p>
        </main>
    }
}
