//! Shared routing and ownership decisions derived from the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard components in `components::guards` wrap every route and
//! apply these decisions reactively. Keeping the decisions as pure
//! functions over [`Session`] means the redirect policy is testable
//! without a browser and identical across all guarded routes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Event;
use crate::state::session::{Identity, Session};

/// Route-guard state machine.
///
/// A mounted guard is `Initializing` until session restore finishes,
/// then settles `Authorized` or `Unauthorized`. Login and logout replace
/// the session and re-enter the same two-way decision; `Initializing`
/// never recurs after the first restore.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Restore pending: render a placeholder, never redirect.
    Initializing,
    /// The guarded content may render.
    Authorized,
    /// The guard must redirect away.
    Unauthorized,
}

/// Decision for routes that require a signed-in user.
#[must_use]
pub fn protected_access(session: &Session) -> RouteAccess {
    if !session.is_ready() {
        return RouteAccess::Initializing;
    }
    if session.identity.is_some() {
        RouteAccess::Authorized
    } else {
        RouteAccess::Unauthorized
    }
}

/// Decision for routes reserved for signed-out visitors, such as the
/// login and registration forms.
#[must_use]
pub fn guest_access(session: &Session) -> RouteAccess {
    if !session.is_ready() {
        return RouteAccess::Initializing;
    }
    if session.identity.is_none() {
        RouteAccess::Authorized
    } else {
        RouteAccess::Unauthorized
    }
}

/// Whether `identity` created `event`.
///
/// Not every payload carries the creator id, and a token may lack a
/// subject claim; either absence means "not the owner" rather than an
/// error.
#[must_use]
pub fn owns_event(identity: &Identity, event: &Event) -> bool {
    match (&identity.subject, &event.user_id) {
        (Some(subject), Some(creator)) => subject == creator,
        _ => false,
    }
}
