//! Persistent side panel with entity-creation triggers and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the dashboard. Opening a trigger only records the sheet in
//! `UiState`; the sheet itself mounts here so it overlays the whole page.
//! Logout clears session, cache and selection; the dashboard's guard then
//! performs the redirect.

use leptos::prelude::*;

use crate::components::sheet::EntitySheet;
use crate::state::catalog::CatalogState;
use crate::state::session::SessionState;
use crate::state::ui::{Sheet, UiState};
use crate::util::auth;

#[component]
pub fn LeftNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let open_sheet = Memo::new(move |_| ui.with(|u| u.open_sheet));
    let on_logout = move |_| auth::sign_out(session, catalog, ui);

    view! {
        <nav class="left-nav">
            <div class="left-nav__brand">"Base" <span class="left-nav__brand-accent">"11"</span></div>
            <div class="left-nav__section">
                <div class="left-nav__heading">"Add Entities"</div>
                {Sheet::ALL
                    .into_iter()
                    .map(|sheet| {
                        view! {
                            <button class="btn btn--ghost left-nav__item" type="button" on:click=move |_| ui.update(|u| u.open(sheet))>
                                {sheet.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="btn btn--destructive left-nav__logout" type="button" on:click=on_logout>
                "Log Out"
            </button>
        </nav>
        {move || open_sheet.get().map(|sheet| view! { <EntitySheet sheet=sheet/> })}
    }
}
