//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once from `App` as `RwSignal<SessionState>`. Route guards, the
//! HTTP adapter and the navigation shell read it; the sign-in, sign-up and
//! logout flows are the only writers.
//!
//! DESIGN
//! ======
//! The token is opaque: nothing here decodes claims or checks expiry. The
//! `restored` flag separates "storage not read yet" from "no token", so a
//! guard never redirects during server rendering or before hydration has had a
//! chance to read `localStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub restored: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Apply the token read from storage. Blank tokens count as absent.
    pub fn restore(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
        self.restored = true;
    }

    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.restored = true;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.restored = true;
    }
}
