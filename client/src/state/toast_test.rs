use super::*;

#[test]
fn success_toast_auto_dismisses() {
    let mut state = ToastState::default();
    let id = state.success("Company added successfully!");
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].variant, ToastVariant::Success);
    assert_eq!(ToastVariant::Success.ttl(), Some(Duration::from_secs(5)));
    assert!(state.toasts[0].action.is_none());
    assert!(state.toasts[0].title.is_empty());
}

#[test]
fn failure_toast_persists_with_retry_action() {
    let mut state = ToastState::default();
    let id = state.failure();
    let toast = &state.toasts[0];
    assert_eq!(toast.id, id);
    assert_eq!(toast.title, "Uh oh! Something went wrong.");
    assert_eq!(toast.description, "There was a problem with your request.");
    assert_eq!(toast.action, Some("Try again"));
    assert_eq!(ToastVariant::Destructive.ttl(), None);
}

#[test]
fn action_only_dismisses() {
    let mut state = ToastState::default();
    let id = state.failure();
    state.activate_action(id);
    assert!(state.toasts.is_empty());
}

#[test]
fn limit_drops_oldest() {
    let mut state = ToastState::default();
    let first = state.success("one");
    for n in 0..TOAST_LIMIT {
        state.success(format!("more {n}"));
    }
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert!(state.toasts.iter().all(|t| t.id != first));
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_unique() {
    let mut state = ToastState::default();
    let a = state.success("a");
    let b = state.failure();
    assert_ne!(a, b);
}
