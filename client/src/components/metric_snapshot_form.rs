//! "Add a metric snapshot" dialog opened from the company detail card.
//!
//! DESIGN
//! ======
//! The value input follows the selected metric's declared type: a number
//! field for `NUMBER`, free text for `STRING`, a date picker for `DATETIME`.
//! The payload carries exactly one typed reading.

#[cfg(test)]
#[path = "metric_snapshot_form_test.rs"]
mod metric_snapshot_form_test;

use leptos::prelude::*;
use schema::{MetricType, NewMetricSnapshot, SnapshotInput, find_by_id};

use crate::components::field::{FieldMessage, SubmitButton, TextField};
use crate::components::reference_picker::ReferencePicker;
use crate::state::form::FormState;
use crate::state::picker::{PickerSource, PickerState};
use crate::util::submit::{SubmitContext, submit};

fn value_input_type(kind: Option<MetricType>) -> &'static str {
    match kind {
        Some(MetricType::Datetime) => "date",
        Some(MetricType::String) => "text",
        Some(MetricType::Number) | None => "number",
    }
}

#[component]
pub fn MetricSnapshotDialog(company_id: String, on_close: Callback<()>) -> impl IntoView {
    let ctx = SubmitContext::from_context();
    let form = RwSignal::new(FormState::default());
    let metric = RwSignal::new(PickerState::default());
    let value = RwSignal::new(String::new());
    let captured_on = RwSignal::new(String::new());
    let company_id = StoredValue::new(company_id);

    let metric_kind = Memo::new(move |_| {
        let selected = metric.with(|p| p.selected.clone())?;
        ctx.catalog.with(|c| find_by_id(c.metrics.items_or_empty(), &selected).map(|m| m.kind))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let selected = metric.with_untracked(|p| p.selected.clone());
        let kind = metric_kind.get_untracked();
        let raw_value = value.get_untracked();
        let raw_date = captured_on.get_untracked();
        let built = company_id.with_value(|company_id| {
            NewMetricSnapshot::from_input(SnapshotInput {
                company_id,
                metric: selected.as_deref().zip(kind),
                captured_on: &raw_date,
                value: &raw_value,
            })
        });
        submit(ctx, form, built, "Metric Snapshot added successfully!", move |()| {
            metric.update(PickerState::reset);
            value.set(String::new());
            captured_on.set(String::new());
            on_close.run(());
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>"Add a metric snapshot"</h2>
                <form class="entity-form" on:submit=on_submit>
                    <ReferencePicker label="Metric" field="metricId" source=PickerSource::Metrics state=metric form=form/>
                    <label class="field">
                        <span class="field__label">"Value"</span>
                        <input
                            class="field__input"
                            type=move || value_input_type(metric_kind.get())
                            step="0.01"
                            placeholder="42"
                            prop:value=move || value.get()
                            on:input=move |ev| value.set(event_target_value(&ev))
                        />
                        <FieldMessage form=form field="value"/>
                    </label>
                    <TextField
                        label="Date Captured On"
                        field="capturedAt"
                        value=captured_on
                        form=form
                        input_type="date"
                    />
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <SubmitButton form=form label="Submit" busy_label="Saving..."/>
                    </div>
                </form>
            </div>
        </div>
    }
}

