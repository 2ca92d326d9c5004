//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{dashboard::DashboardPage, home::HomePage, signin::SigninPage, signup::SignupPage};
use crate::state::{catalog::CatalogState, session::SessionState, toast::ToastState, ui::UiState};
use crate::util::auth::restore_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(catalog);
    provide_context(toasts);
    provide_context(ui);

    // Effects only run in the browser, so the token is read after hydration.
    Effect::new(move || restore_session(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/base11.css"/>
        <Title text="Base11"/>
        <Meta name="description" content="Base11 Companies Interface."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
