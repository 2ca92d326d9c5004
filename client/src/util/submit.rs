//! The one submission pipeline every form runs through.
//!
//! DESIGN
//! ======
//! validate -> post -> toast -> invalidate-and-refetch. A payload names the
//! list it makes stale, so no form decides on its own what to reload and no
//! form reloads the page.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors stay on the form. Request failures become the generic
//! destructive toast plus a console warning; the form's fields are kept so
//! the user can try again by hand.

use leptos::prelude::*;
use schema::{Payload, ValidationErrors};

use crate::net::api::ApiClient;
use crate::net::loader;
use crate::state::catalog::CatalogState;
use crate::state::form::FormState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::notify;

/// App-wide contexts a submission touches.
#[derive(Clone, Copy)]
pub struct SubmitContext {
    pub session: RwSignal<SessionState>,
    pub catalog: RwSignal<CatalogState>,
    pub toasts: RwSignal<ToastState>,
}

impl SubmitContext {
    /// Pull the contexts provided by `App`.
    pub fn from_context() -> Self {
        Self {
            session: expect_context::<RwSignal<SessionState>>(),
            catalog: expect_context::<RwSignal<CatalogState>>(),
            toasts: expect_context::<RwSignal<ToastState>>(),
        }
    }
}

/// Validate and send `built`, then report the outcome.
///
/// `built` is the payload or the errors found while assembling it from raw
/// fields. `success` is the toast text; `on_success` runs after the toast
/// and the refetch are issued.
pub fn submit<P, F>(
    ctx: SubmitContext,
    form: RwSignal<FormState>,
    built: Result<P, ValidationErrors>,
    success: &'static str,
    on_success: F,
) where
    P: Payload + 'static,
    P::Response: 'static,
    F: FnOnce(P::Response) + 'static,
{
    let payload = match built {
        Ok(payload) => payload,
        Err(errors) => {
            form.update(|f| {
                f.begin(Err(errors));
            });
            return;
        }
    };
    let started = form.try_update(|f| f.begin(payload.validate())).unwrap_or(false);
    if !started {
        return;
    }

    let client = ctx.session.with_untracked(ApiClient::from_session);
    leptos::task::spawn_local(async move {
        match client.post(&payload).await {
            Ok(response) => {
                form.update(FormState::succeed);
                notify::success(ctx.toasts, success);
                if let Some(key) = P::INVALIDATES {
                    loader::refresh(ctx.session, ctx.catalog, key);
                }
                on_success(response);
            }
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("POST {} failed: {e}", P::ENDPOINT.path());
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                form.update(FormState::fail);
                notify::failure(ctx.toasts);
            }
        }
    });
}
