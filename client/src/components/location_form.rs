//! Location creation form hosted in the "Location" sheet.

use leptos::prelude::*;
use schema::NewLocation;

use crate::components::field::{SubmitButton, TextField};
use crate::state::form::FormState;
use crate::util::submit::{SubmitContext, submit};

#[component]
pub fn LocationForm() -> impl IntoView {
    let ctx = SubmitContext::from_context();
    let form = RwSignal::new(FormState::default());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let pincode = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = NewLocation {
            name: city.get_untracked(),
            state: state.get_untracked(),
            country: country.get_untracked(),
            pincode: pincode.get_untracked(),
        };
        submit(ctx, form, Ok(payload), "Location added successfully!", move |()| {
            for field in [city, state, country, pincode] {
                field.set(String::new());
            }
        });
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <TextField label="City" field="name" value=city form=form placeholder="San Francisco"/>
            <TextField label="State" field="state" value=state form=form placeholder="California"/>
            <TextField label="Country" field="country" value=country form=form placeholder="United States of America"/>
            <TextField label="Zipcode" field="pincode" value=pincode form=form placeholder="94102"/>
            <SubmitButton form=form label="Submit" busy_label="Saving..."/>
        </form>
    }
}
