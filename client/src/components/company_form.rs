//! Company creation form hosted in the "Company" sheet.

use leptos::prelude::*;
use schema::NewCompany;

use crate::components::field::{SubmitButton, TextAreaField, TextField};
use crate::components::reference_picker::ReferencePicker;
use crate::state::form::FormState;
use crate::state::picker::{PickerSource, PickerState};
use crate::util::submit::{SubmitContext, submit};

#[component]
pub fn CompanyForm() -> impl IntoView {
    let ctx = SubmitContext::from_context();
    let form = RwSignal::new(FormState::default());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let logo = RwSignal::new(String::new());
    let industry = RwSignal::new(PickerState::default());
    let location = RwSignal::new(PickerState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = NewCompany::from_form(
            &name.get_untracked(),
            &website.get_untracked(),
            &description.get_untracked(),
            &logo.get_untracked(),
            industry.with_untracked(|p| p.selected.clone()),
            location.with_untracked(|p| p.selected.clone()),
        );
        submit(ctx, form, Ok(payload), "Company added successfully!", move |()| {
            for field in [name, description, website, logo] {
                field.set(String::new());
            }
            industry.update(PickerState::reset);
            location.update(PickerState::reset);
        });
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <TextField label="Name" field="name" value=name form=form placeholder="Stripe"/>
            <TextAreaField label="Description" field="description" value=description form=form placeholder="Payments Infra"/>
            <TextField label="Website" field="website" value=website form=form placeholder="https://www.stripe.com"/>
            <TextField label="Logo URL" field="logo" value=logo form=form placeholder="https://www.stripe.com/logo.png"/>
            <ReferencePicker label="Industry" field="industryId" source=PickerSource::Industries state=industry form=form/>
            <ReferencePicker label="Location" field="locationId" source=PickerSource::Locations state=location form=form/>
            <SubmitButton form=form label="Submit" busy_label="Saving..."/>
        </form>
    }
}
