//! Email + password login card.

use leptos::prelude::*;
use schema::LoginRequest;

use crate::components::field::{SubmitButton, TextField};
use crate::state::form::FormState;
use crate::util::auth;
use crate::util::submit::{SubmitContext, submit};

#[component]
pub fn SigninForm() -> impl IntoView {
    let ctx = SubmitContext::from_context();
    let form = RwSignal::new(FormState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = LoginRequest { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        submit(ctx, form, Ok(payload), "Login successful!", move |token| {
            auth::sign_in(ctx.session, token.token);
        });
    };

    view! {
        <div class="auth-card">
            <h1 class="auth-card__title">
                "Welcome to the " <span class="auth-card__accent">"Companies Interface"</span>
            </h1>
            <p class="auth-card__subtitle">"Log in to use the Base11 knowledge base"</p>
            <form class="entity-form" on:submit=on_submit>
                <TextField label="Email" field="email" value=email form=form input_type="email" placeholder="johndoe@base11.com"/>
                <TextField label="Password" field="password" value=password form=form input_type="password" placeholder="********"/>
                <SubmitButton form=form label="Submit" busy_label="Signing in..."/>
            </form>
        </div>
    }
}
