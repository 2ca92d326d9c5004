//! Landing page with Login / Register tabs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::signin_form::SigninForm;
use crate::components::signup_form::SignupForm;
use crate::state::session::SessionState;
use crate::state::ui::{HomeTab, UiState};
use crate::util::auth::install_authed_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_authed_redirect(session, use_navigate());

    let tab = Memo::new(move |_| ui.with(|u| u.home_tab));
    let tab_button = move |target: HomeTab, label: &'static str| {
        view! {
            <button
                type="button"
                role="tab"
                class=move || if tab.get() == target { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
                aria-selected=move || (tab.get() == target).to_string()
                on:click=move |_| ui.update(|u| u.home_tab = target)
            >
                {label}
            </button>
        }
    };

    view! {
        <main class="auth-page">
            <div class="tabs">
                <div class="tabs__list" role="tablist">
                    {tab_button(HomeTab::Login, "Login")}
                    {tab_button(HomeTab::Register, "Register")}
                </div>
                {move || match tab.get() {
                    HomeTab::Login => view! { <SigninForm/> }.into_any(),
                    HomeTab::Register => view! { <SignupForm/> }.into_any(),
                }}
            </div>
        </main>
    }
}
