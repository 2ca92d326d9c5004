//! Detail card for the selected company.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever `state::dashboard::detail_view` decides; it never joins
//! lists itself. The card also hosts the "Add Metric Snapshot" dialog.

use leptos::prelude::*;
use schema::CompanyDetail;

use crate::components::metric_snapshot_form::MetricSnapshotDialog;
use crate::state::catalog::CatalogState;
use crate::state::dashboard::{API_ERROR, DetailView, detail_view};
use crate::state::ui::UiState;

#[component]
pub fn CompanyDetailPanel() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let detail = Memo::new(move |_| {
        let selected = ui.with(|u| u.selected_company.clone());
        catalog.with(|c| detail_view(c, selected.as_deref()))
    });

    view! {
        <section class="company-detail">
            {move || match detail.get() {
                DetailView::Empty => view! {
                    <p class="company-detail__hint">"Select a company to see its details."</p>
                }
                .into_any(),
                DetailView::Loading => view! {
                    <div class="company-detail__loading" aria-busy="true">"Loading..."</div>
                }
                .into_any(),
                DetailView::Failed(key) => view! {
                    <p class="company-detail__error" title=format!("{key} failed to load")>{API_ERROR}</p>
                }
                .into_any(),
                DetailView::Ready(detail) => view! { <DetailCard detail=*detail/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn DetailCard(detail: CompanyDetail) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let company_id = detail.company.id.clone();
    let industry = detail.industry_label().to_owned();
    let location = detail.location_label().to_owned();
    let company = detail.company;
    let website = company.website.clone();

    let dialog_open = Memo::new(move |_| ui.with(|u| u.snapshot_dialog_open));
    let on_close = Callback::new(move |()| ui.update(|u| u.snapshot_dialog_open = false));

    let snapshots = if detail.snapshots.is_empty() {
        view! { <p class="company-detail__empty">"No metric snapshots yet."</p> }.into_any()
    } else {
        view! {
            <table class="company-detail__snapshots">
                <thead>
                    <tr>
                        <th>"Metric"</th>
                        <th>"Value"</th>
                        <th>"Captured On"</th>
                    </tr>
                </thead>
                <tbody>
                    {detail
                        .snapshots
                        .into_iter()
                        .map(|line| {
                            view! {
                                <tr>
                                    <td>{line.metric_label().to_owned()}</td>
                                    <td>{line.reading.to_string()}</td>
                                    <td>{line.captured_on}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <article class="company-detail__card">
            <header class="company-detail__header">
                {company.logo.map(|logo| view! { <img class="company-detail__logo" src=logo alt=""/> })}
                <h2 class="company-detail__name">{company.name}</h2>
            </header>
            {company.description.map(|text| view! { <p class="company-detail__description">{text}</p> })}
            <dl class="company-detail__facts">
                <dt>"Website"</dt>
                <dd>
                    <a href=website.clone() target="_blank" rel="noreferrer">{website.clone()}</a>
                </dd>
                <dt>"Location"</dt>
                <dd>{location}</dd>
                <dt>"Industry"</dt>
                <dd>{industry}</dd>
            </dl>
            <div class="company-detail__metrics-header">
                <h3>"Metrics"</h3>
                <button
                    class="btn btn--primary"
                    type="button"
                    on:click=move |_| ui.update(|u| u.snapshot_dialog_open = true)
                >
                    "Add Metric Snapshot"
                </button>
            </div>
            {snapshots}
            <Show when=move || dialog_open.get()>
                <MetricSnapshotDialog company_id=company_id.clone() on_close=on_close/>
            </Show>
        </article>
    }
}
