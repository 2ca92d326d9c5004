//! Toast helpers that also schedule auto-dismissal.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

pub fn success(toasts: RwSignal<ToastState>, description: &str) {
    let Some(id) = toasts.try_update(|t| t.success(description)) else {
        return;
    };
    schedule_dismiss(toasts, id, ToastVariant::Success);
}

pub fn failure(toasts: RwSignal<ToastState>) {
    toasts.update(|t| {
        t.failure();
    });
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64, variant: ToastVariant) {
    let Some(ttl) = variant.ttl() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ttl).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, ttl);
    }
}
