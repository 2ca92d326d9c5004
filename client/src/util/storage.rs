//! Browser `localStorage` access for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `util::auth` touches these helpers; everything else reads the token
//! from the `SessionState` context.

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "token";

/// Read the stored token.
///
/// The outer `None` means storage itself is unavailable (server render or a
/// browser that refuses access); the inner one means no token is stored.
pub fn load_token() -> Option<Option<String>> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        Some(storage.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn remove_token() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
