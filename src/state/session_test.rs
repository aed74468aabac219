use super::*;

use std::sync::{Arc, Mutex};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::util::claims::{ROLE_CLAIM, SUBJECT_CLAIM};

// ============================================================================
// Helpers
// ============================================================================

/// In-memory stand-in for browser `localStorage`. Clones share one slot
/// so tests can inspect what the store persisted.
#[derive(Clone, Default)]
struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    fn seeded(token: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.to_owned()))),
        }
    }

    fn stored(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

fn creator_token() -> String {
    token_with(&serde_json::json!({
        "email": "amy@example.com",
        ROLE_CLAIM: ROLE_CREATOR,
        SUBJECT_CLAIM: "42",
    }))
}

fn attendee_token() -> String {
    token_with(&serde_json::json!({
        "email": "bob@example.com",
        ROLE_CLAIM: ROLE_ATTENDEE,
        SUBJECT_CLAIM: "7",
    }))
}

fn store_over(tokens: MemoryTokenStore) -> SessionStore {
    SessionStore::new(tokens, ClaimKeys::default())
}

// ============================================================================
// Session and Identity basics
// ============================================================================

#[test]
fn default_session_is_initializing_and_empty() {
    let session = Session::default();
    assert_eq!(session.phase, SessionPhase::Initializing);
    assert!(!session.is_ready());
    assert!(session.identity.is_none());
    assert!(session.token.is_none());
}

#[test]
fn creator_role_grants_creator_capability() {
    let store = store_over(MemoryTokenStore::default());
    let session = store.login(creator_token());
    assert!(session.identity.unwrap().is_creator());
}

#[test]
fn attendee_role_does_not_grant_creator_capability() {
    let store = store_over(MemoryTokenStore::default());
    let session = store.login(attendee_token());
    assert!(!session.identity.unwrap().is_creator());
}

// ============================================================================
// initialize
// ============================================================================

#[test]
fn initialize_without_persisted_token_is_signed_out() {
    let store = store_over(MemoryTokenStore::default());
    let session = store.initialize();
    assert!(session.is_ready());
    assert!(session.identity.is_none());
    assert!(session.token.is_none());
}

#[test]
fn initialize_restores_identity_from_persisted_token() {
    let token = creator_token();
    let store = store_over(MemoryTokenStore::seeded(&token));
    let session = store.initialize();
    assert!(session.is_ready());
    assert_eq!(session.token.as_deref(), Some(token.as_str()));
    let identity = session.identity.unwrap();
    assert_eq!(identity.email, "amy@example.com");
    assert_eq!(identity.subject.as_deref(), Some("42"));
}

#[test]
fn initialize_discards_malformed_persisted_token() {
    let tokens = MemoryTokenStore::seeded("garbage-not-a-jwt");
    let store = store_over(tokens.clone());
    let session = store.initialize();
    assert!(session.is_ready());
    assert!(session.identity.is_none());
    assert!(session.token.is_none());
    assert_eq!(tokens.stored(), None);
}

#[test]
fn initialize_discards_token_without_email_claim() {
    let token = token_with(&serde_json::json!({ ROLE_CLAIM: ROLE_ATTENDEE }));
    let tokens = MemoryTokenStore::seeded(&token);
    let store = store_over(tokens.clone());
    let session = store.initialize();
    assert!(session.identity.is_none());
    assert_eq!(tokens.stored(), None);
}

// ============================================================================
// login
// ============================================================================

#[test]
fn login_persists_token_and_decodes_identity() {
    let tokens = MemoryTokenStore::default();
    let store = store_over(tokens.clone());
    let token = attendee_token();
    let session = store.login(token.clone());
    assert!(session.is_ready());
    assert_eq!(session.identity.unwrap().email, "bob@example.com");
    assert_eq!(tokens.stored(), Some(token));
}

#[test]
fn login_with_malformed_token_clears_storage() {
    let tokens = MemoryTokenStore::default();
    let store = store_over(tokens.clone());
    let session = store.login("broken".to_owned());
    assert!(session.is_ready());
    assert!(session.identity.is_none());
    assert_eq!(tokens.stored(), None);
}

#[test]
fn login_then_initialize_round_trips_identity() {
    let tokens = MemoryTokenStore::default();
    let store = store_over(tokens.clone());
    let logged_in = store.login(creator_token());

    let restored = store_over(tokens).initialize();
    assert_eq!(restored, logged_in);
}

// ============================================================================
// logout
// ============================================================================

#[test]
fn logout_clears_persisted_token() {
    let tokens = MemoryTokenStore::seeded(&creator_token());
    let store = store_over(tokens.clone());
    let session = store.logout();
    assert!(session.is_ready());
    assert!(session.identity.is_none());
    assert_eq!(tokens.stored(), None);
}

#[test]
fn logout_twice_is_idempotent() {
    let tokens = MemoryTokenStore::seeded(&attendee_token());
    let store = store_over(tokens.clone());
    let first = store.logout();
    let second = store.logout();
    assert_eq!(first, second);
    assert_eq!(tokens.stored(), None);
}
