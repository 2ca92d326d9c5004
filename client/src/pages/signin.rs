//! Standalone sign-in route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::signin_form::SigninForm;
use crate::state::session::SessionState;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn SigninPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_authed_redirect(session, use_navigate());

    view! {
        <main class="auth-page">
            <SigninForm/>
            <p class="auth-page__switch">"No account yet? " <a href="/signup">"Register"</a></p>
        </main>
    }
}
