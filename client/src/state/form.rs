//! Submission lifecycle shared by every entity and auth form.
//!
//! DESIGN
//! ======
//! Forms own their raw field signals; this state only tracks where the
//! submission is and which fields failed. A form is in flight from the moment
//! validation passes until the API call settles, and further submits are
//! ignored during that window.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use schema::ValidationErrors;

/// Route reached after a successful sign-in or sign-up.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub phase: FormPhase,
    pub errors: ValidationErrors,
}

impl FormState {
    /// Start a submission if the form is free and `checked` passed.
    ///
    /// Returns `true` when the caller should send the request. Validation
    /// errors are stored for display and leave the form idle.
    pub fn begin(&mut self, checked: Result<(), ValidationErrors>) -> bool {
        if self.is_submitting() {
            return false;
        }
        match checked {
            Ok(()) => {
                self.errors = ValidationErrors::new();
                self.phase = FormPhase::Submitting;
                true
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = FormPhase::Idle;
                false
            }
        }
    }

    pub fn succeed(&mut self) {
        self.phase = FormPhase::Succeeded;
    }

    pub fn fail(&mut self) {
        self.phase = FormPhase::Failed;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Message to show under `field`, if it failed validation.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.message_for(field).map(str::to_owned)
    }
}
