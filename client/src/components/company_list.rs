//! Master list of companies on the dashboard.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::dashboard::{API_ERROR, CompanyListView, company_list_view};
use crate::state::ui::UiState;

const SKELETON_ROWS: usize = 5;

#[component]
pub fn CompanyList() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let list = Memo::new(move |_| catalog.with(company_list_view));
    let selected = Memo::new(move |_| ui.with(|u| u.selected_company.clone()));

    view! {
        <section class="company-list">
            <h2 class="company-list__title">"Companies"</h2>
            {move || match list.get() {
                CompanyListView::Loading => view! {
                    <ul class="company-list__items" aria-busy="true">
                        {(0..SKELETON_ROWS)
                            .map(|_| view! { <li class="company-list__skeleton"></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any(),
                CompanyListView::Failed => view! { <p class="company-list__error">{API_ERROR}</p> }.into_any(),
                CompanyListView::Items(companies) if companies.is_empty() => {
                    view! { <p class="company-list__empty">"No companies yet."</p> }.into_any()
                }
                CompanyListView::Items(companies) => view! {
                    <ul class="company-list__items">
                        {companies
                            .into_iter()
                            .map(|company| {
                                let id = company.id.clone();
                                let active_id = company.id;
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class=move || {
                                                if selected.with(|s| s.as_deref() == Some(active_id.as_str())) {
                                                    "company-list__item company-list__item--active"
                                                } else {
                                                    "company-list__item"
                                                }
                                            }
                                            on:click=move |_| ui.update(|u| u.select_company(&id))
                                        >
                                            <span class="company-list__name">{company.name}</span>
                                            <span class="company-list__website">{company.website}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}
