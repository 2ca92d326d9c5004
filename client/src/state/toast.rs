//! Notification queue rendered by the toaster.
//!
//! DESIGN
//! ======
//! At most `TOAST_LIMIT` toasts are visible; pushing past the limit drops the
//! oldest. Success toasts auto-dismiss, destructive ones stay until the user
//! closes them or presses their action.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

pub const TOAST_LIMIT: usize = 3;

/// How long a success toast stays up.
pub const SUCCESS_TTL: Duration = Duration::from_secs(5);

pub const FAILURE_TITLE: &str = "Uh oh! Something went wrong.";
pub const FAILURE_DESCRIPTION: &str = "There was a problem with your request.";
pub const RETRY_ACTION: &str = "Try again";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

impl ToastVariant {
    /// Auto-dismiss delay, or `None` for toasts that persist.
    #[must_use]
    pub fn ttl(self) -> Option<Duration> {
        match self {
            Self::Success => Some(SUCCESS_TTL),
            Self::Destructive => None,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast",
            Self::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
    /// Label of the single action button, if any.
    pub action: Option<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    fn push(&mut self, variant: ToastVariant, title: String, description: String, action: Option<&'static str>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, variant, title, description, action });
        if self.toasts.len() > TOAST_LIMIT {
            let excess = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..excess);
        }
        id
    }

    /// A title-less confirmation such as "Company added successfully!".
    pub fn success(&mut self, description: impl Into<String>) -> u64 {
        self.push(ToastVariant::Success, String::new(), description.into(), None)
    }

    /// The generic request-failure toast with its "Try again" action.
    pub fn failure(&mut self) -> u64 {
        self.push(
            ToastVariant::Destructive,
            FAILURE_TITLE.to_owned(),
            FAILURE_DESCRIPTION.to_owned(),
            Some(RETRY_ACTION),
        )
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Run a toast's action. The only action is "Try again", which dismisses;
    /// resubmitting is left to the user.
    pub fn activate_action(&mut self, id: u64) {
        self.dismiss(id);
    }
}
