//! Side sheet overlay hosting one entity-creation form.

use leptos::prelude::*;

use crate::components::company_form::CompanyForm;
use crate::components::industry_form::IndustryForm;
use crate::components::location_form::LocationForm;
use crate::state::ui::{Sheet, UiState};

/// Overlay for `sheet`. Closes on backdrop click, the close button or Escape.
#[component]
pub fn EntitySheet(sheet: Sheet) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = Callback::new(move |()| ui.update(UiState::close_sheet));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close.run(());
        }
    };

    let body = match sheet {
        Sheet::Company => view! { <CompanyForm/> }.into_any(),
        Sheet::Location => view! { <LocationForm/> }.into_any(),
        Sheet::Industry => view! { <IndustryForm/> }.into_any(),
    };

    view! {
        <div class="sheet-backdrop" on:click=move |_| close.run(())>
            <aside
                class="sheet"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="sheet__header">
                    <h2 class="sheet__title">{sheet.title()}</h2>
                    <button class="sheet__close" type="button" title="Close" on:click=move |_| close.run(())>
                        "×"
                    </button>
                </header>
                <p class="sheet__description">{sheet.description()}</p>
                {body}
            </aside>
        </div>
    }
}
