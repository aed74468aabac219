//! Browser localStorage persistence for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the session layer's `TokenStore` trait over
//! `window.localStorage` so a signed-in session survives reloads. On the
//! server and in native tests every operation is a no-op miss, matching
//! the rest of the hydrate-gated browser glue.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use crate::state::session::TokenStore;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "eventra_auth_token";

/// [`TokenStore`] backed by the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            let _ = storage.set_item(STORAGE_KEY, token);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
