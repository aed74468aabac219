//! Auth session state and its transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole app shares one `RwSignal<Session>` provided from the root
//! component. Route guards, the navbar, and every page read it; only the
//! [`SessionStore`] entry points produce new values for it. Each entry
//! point returns the complete next [`Session`] so the caller commits it
//! with a single `set`, and observers never see a half-updated
//! identity/token pair.
//!
//! DESIGN
//! ======
//! Token persistence sits behind the [`TokenStore`] trait. The browser
//! implementation (`util::token_storage`) wraps `localStorage`; tests
//! inject an in-memory store and exercise the same transitions natively.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use crate::util::claims::{self, ClaimKeys};

/// Role value granting event creation and management.
pub const ROLE_CREATOR: &str = "Creator";

/// Role value for a plain attendee account.
pub const ROLE_ATTENDEE: &str = "User";

/// Decoded, application-usable form of the bearer token's claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub roles: BTreeSet<String>,
    /// Backend user id (subject claim); compared against an event's
    /// creator id for ownership checks.
    pub subject: Option<String>,
}

impl Identity {
    /// Whether this account may create and manage events.
    #[must_use]
    pub fn is_creator(&self) -> bool {
        self.roles.contains(ROLE_CREATOR)
    }
}

/// Session restore progress.
///
/// Guards must not commit a navigation decision while the persisted
/// token is still being restored, so the pre-restore window is a state
/// of its own rather than an empty session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Initializing,
    Ready,
}

/// Who is signed in, if anyone.
///
/// `identity` is `Some` exactly when `token` is `Some`: a token that
/// fails to decode never reaches this struct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub token: Option<String>,
    pub phase: SessionPhase,
}

impl Session {
    /// Whether session restore has completed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }

    fn signed_out() -> Self {
        Self {
            identity: None,
            token: None,
            phase: SessionPhase::Ready,
        }
    }

    fn signed_in(identity: Identity, token: String) -> Self {
        Self {
            identity: Some(identity),
            token: Some(token),
            phase: SessionPhase::Ready,
        }
    }
}

/// Where the raw bearer token is persisted between visits.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Sole producer of session transitions.
pub struct SessionStore {
    tokens: Box<dyn TokenStore>,
    keys: ClaimKeys,
}

impl SessionStore {
    pub fn new(tokens: impl TokenStore + 'static, keys: ClaimKeys) -> Self {
        Self {
            tokens: Box::new(tokens),
            keys,
        }
    }

    /// Restore the persisted session, if any. Always lands on `Ready`.
    ///
    /// A persisted token that no longer decodes is discarded here so the
    /// next visit starts clean instead of failing the same way again.
    #[must_use]
    pub fn initialize(&self) -> Session {
        match self.tokens.load() {
            Some(token) => self.decode_or_discard(token),
            None => Session::signed_out(),
        }
    }

    /// Persist `token` and enter the signed-in state it describes.
    ///
    /// A token the backend just issued should always decode; if it does
    /// not, the result is the signed-out state with storage cleared,
    /// same as a corrupt restore.
    #[must_use]
    pub fn login(&self, token: String) -> Session {
        self.tokens.save(&token);
        self.decode_or_discard(token)
    }

    /// Drop the persisted token and return to the signed-out state.
    /// Idempotent: signing out twice is the same as once.
    #[must_use]
    pub fn logout(&self) -> Session {
        self.tokens.clear();
        Session::signed_out()
    }

    fn decode_or_discard(&self, token: String) -> Session {
        match claims::decode_identity(&token, &self.keys) {
            Ok(identity) => Session::signed_in(identity, token),
            Err(err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("discarding stored bearer token: {err}");
                #[cfg(not(feature = "hydrate"))]
                let _ = err;
                self.tokens.clear();
                Session::signed_out()
            }
        }
    }
}
