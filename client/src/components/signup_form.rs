//! Registration card; a successful sign-up signs the user in.

use leptos::prelude::*;
use schema::{Permission, RegisterRequest};

use crate::components::field::{FieldMessage, SubmitButton, TextField};
use crate::state::form::FormState;
use crate::util::auth;
use crate::util::submit::{SubmitContext, submit};

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = SubmitContext::from_context();
    let form = RwSignal::new(FormState::default());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let permissions = RwSignal::new(None::<Permission>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = RegisterRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            permissions: permissions.get_untracked(),
        };
        submit(ctx, form, Ok(payload), "Login successful!", move |token| {
            auth::sign_in(ctx.session, token.token);
        });
    };

    view! {
        <div class="auth-card">
            <h1 class="auth-card__title">
                "Register for the " <span class="auth-card__accent">"Companies Interface"</span>
            </h1>
            <p class="auth-card__subtitle">"Create an account to use the Base11 knowledge base"</p>
            <form class="entity-form" on:submit=on_submit>
                <TextField label="Email" field="email" value=email form=form input_type="email" placeholder="johndoe@base11.com"/>
                <div class="entity-form__row">
                    <TextField label="First Name" field="firstName" value=first_name form=form placeholder="John"/>
                    <TextField label="Last Name" field="lastName" value=last_name form=form placeholder="Doe"/>
                </div>
                <TextField label="Password" field="password" value=password form=form input_type="password" placeholder="********"/>
                <label class="field">
                    <span class="field__label">"Permissions"</span>
                    <select
                        class="field__input"
                        name="permissions"
                        on:change=move |ev| permissions.set(event_target_value(&ev).parse().ok())
                    >
                        <option value="" selected=move || permissions.get().is_none()>
                            "Select access permissions"
                        </option>
                        {Permission::ALL
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option value=p.as_str() selected=move || permissions.get() == Some(p)>
                                        {p.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <FieldMessage form=form field="permissions"/>
                </label>
                <SubmitButton form=form label="Submit" busy_label="Registering..."/>
            </form>
        </div>
    }
}
