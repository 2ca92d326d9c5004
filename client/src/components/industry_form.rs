//! Industry creation form hosted in the "Industry" sheet.

use leptos::prelude::*;
use schema::NewIndustry;

use crate::components::field::{SubmitButton, TextField};
use crate::state::form::FormState;
use crate::util::submit::{SubmitContext, submit};

#[component]
pub fn IndustryForm() -> impl IntoView {
    let ctx = SubmitContext::from_context();
    let form = RwSignal::new(FormState::default());
    let name = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = NewIndustry { name: name.get_untracked() };
        submit(ctx, form, Ok(payload), "Industry added successfully!", move |()| name.set(String::new()));
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <TextField label="Name" field="name" value=name form=form placeholder="Fintech"/>
            <SubmitButton form=form label="Submit" busy_label="Saving..."/>
        </form>
    }
}
