//! Viewport rendering the notification queue.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let title = (!toast.title.is_empty()).then_some(toast.title);
                        view! {
                            <li class=toast.variant.class() role="status">
                                <div class="toast__body">
                                    {title.map(|title| view! { <p class="toast__title">{title}</p> })}
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                {toast.action.map(|label| {
                                    view! {
                                        <button
                                            class="btn toast__action"
                                            type="button"
                                            on:click=move |_| toasts.update(|t| t.activate_action(id))
                                        >
                                            {label}
                                        </button>
                                    }
                                })}
                                <button
                                    class="toast__close"
                                    type="button"
                                    title="Close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}
