//! Searchable single-select bound to a cached reference list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the company form (industry, location) and the metric snapshot
//! form (metric). The picker makes sure its list is fetched on mount and
//! otherwise shares the dashboard's cache entry. A list that failed before
//! it ever loaded is fetched again on mount and offers a manual retry.

use leptos::prelude::*;

use crate::components::field::FieldMessage;
use crate::net::loader;
use crate::state::catalog::CatalogState;
use crate::state::form::FormState;
use crate::state::picker::{PickerSource, PickerState, PickerView};
use crate::state::session::SessionState;

#[component]
pub fn ReferencePicker(
    label: &'static str,
    field: &'static str,
    source: PickerSource,
    state: RwSignal<PickerState>,
    form: RwSignal<FormState>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    Effect::new(move || loader::ensure(session, catalog, source.key()));

    let items = Memo::new(move |_| catalog.with(|c| source.items(c)));
    let label_text = move || {
        let selected = items.with(|items| state.with(|s| s.label(items.as_deref())));
        selected.unwrap_or_else(|| source.placeholder())
    };
    let status = Memo::new(move |_| catalog.with(|c| source.status(c)));
    let picker_view = move || items.with(|items| state.with(|s| s.view(items.as_deref(), status.get())));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            state.update(|s| s.open = false);
        }
    };

    view! {
        <div class="field picker" on:keydown=on_keydown>
            <span class="field__label">{label}</span>
            <button
                type="button"
                class=move || {
                    if state.with(|s| s.selected.is_none()) {
                        "picker__trigger picker__trigger--placeholder"
                    } else {
                        "picker__trigger"
                    }
                }
                on:click=move |_| state.update(|s| s.open = !s.open)
            >
                {label_text}
            </button>
            <Show when=move || state.with(|s| s.open)>
                <div class="picker__popover">
                    <input
                        class="picker__search"
                        type="text"
                        placeholder=format!("Search {}...", source.noun())
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                    />
                    {move || match picker_view() {
                        PickerView::Loading => view! { <div class="picker__spinner" aria-label="Loading"></div> }.into_any(),
                        PickerView::Failed => view! {
                            <div class="picker__error" role="alert">
                                <p>{source.error_text()}</p>
                                <button
                                    class="btn"
                                    type="button"
                                    on:click=move |_| loader::refresh(session, catalog, source.key())
                                >
                                    "Try again"
                                </button>
                            </div>
                        }
                        .into_any(),
                        PickerView::Empty => view! { <p class="picker__empty">{source.empty_text()}</p> }.into_any(),
                        PickerView::Items(found) => view! {
                            <ul class="picker__list" role="listbox">
                                {found
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id.clone();
                                        let check_id = item.id.clone();
                                        view! {
                                            <li
                                                class="picker__item"
                                                role="option"
                                                aria-selected=move || state.with(|s| s.selected.as_deref() == Some(check_id.as_str())).to_string()
                                                on:click=move |_| state.update(|s| s.select(&id))
                                            >
                                                {item.name}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any(),
                    }}
                </div>
            </Show>
            <FieldMessage form=form field=field/>
        </div>
    }
}
