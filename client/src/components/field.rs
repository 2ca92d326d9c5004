//! Labelled form inputs that show their field's validation message.

use leptos::prelude::*;

use crate::state::form::FormState;

/// Single-line input bound to a string signal.
#[component]
pub fn TextField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    form: RwSignal<FormState>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                name=field
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldMessage form=form field=field/>
        </label>
    }
}

/// Multi-line variant of [`TextField`].
#[component]
pub fn TextAreaField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    form: RwSignal<FormState>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--multiline"
                name=field
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <FieldMessage form=form field=field/>
        </label>
    }
}

/// Validation message for `field`, rendered only while it has one.
#[component]
pub fn FieldMessage(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    move || {
        form.with(|f| f.error(field))
            .map(|message| view! { <p class="field__error">{message}</p> })
    }
}

/// Submit button that disables itself while the form is in flight.
#[component]
pub fn SubmitButton(form: RwSignal<FormState>, label: &'static str, busy_label: &'static str) -> impl IntoView {
    view! {
        <button class="btn btn--primary" type="submit" disabled=move || form.with(FormState::is_submitting)>
            {move || if form.with(FormState::is_submitting) { busy_label } else { label }}
        </button>
    }
}
