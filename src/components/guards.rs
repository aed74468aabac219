//! Render-time gates applying session-based navigation policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route is wrapped in one of these guards so redirect behavior
//! stays identical across pages. The decision logic itself lives in
//! `util::auth`; the components add the reactive plumbing: a redirect
//! effect that only fires once the session is `Ready`, and a placeholder
//! while restore is pending so a stored session never flashes through
//! the login screen on reload.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::{RouteAccess, guest_access, protected_access};

/// Wrapper for routes that require a signed-in user. Anonymous visitors
/// are sent to `/login` once the session is known.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if protected_access(&session.get()) == RouteAccess::Unauthorized {
            navigate("/login", replace_navigation());
        }
    });

    view! {
        <Show
            when=move || protected_access(&session.get()) == RouteAccess::Authorized
            fallback=move || guard_placeholder(session, "Redirecting to login...")
        >
            {children()}
        </Show>
    }
}

/// Wrapper for routes reserved for signed-out visitors. A signed-in user
/// landing here is sent home once the session is known.
#[component]
pub fn GuestRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if guest_access(&session.get()) == RouteAccess::Unauthorized {
            navigate("/", replace_navigation());
        }
    });

    view! {
        <Show
            when=move || guest_access(&session.get()) == RouteAccess::Authorized
            fallback=move || guard_placeholder(session, "Redirecting home...")
        >
            {children()}
        </Show>
    }
}

/// Redirects replace the history entry so Back does not bounce through
/// the guarded page again.
fn replace_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

fn guard_placeholder(session: RwSignal<Session>, redirect_text: &'static str) -> impl IntoView {
    view! {
        <div class="guard-placeholder">
            <p>
                {move || {
                    if session.get().is_ready() { redirect_text } else { "Loading..." }
                }}
            </p>
        </div>
    }
}
