//! Top navigation bar.
//!
//! Shows session-aware links: signed-in users get Home (plus My
//! Registrations for attendees), their email, and Logout; visitors get
//! Login and Register. Plain `<a href>` links are fine here since the
//! router intercepts same-origin navigation.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast_tray::show_toast;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::{Session, SessionStore};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Attendees manage their registrations; creators manage events from the
/// home page instead.
fn registrations_link_visible(session: &Session) -> bool {
    session
        .identity
        .as_ref()
        .is_some_and(|identity| !identity.is_creator())
}

fn signed_in_email(session: &Session) -> Option<String> {
    session.identity.as_ref().map(|identity| identity.email.clone())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<StoredValue<SessionStore>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let next = store.with_value(SessionStore::logout);
        session.set(next);
        show_toast(notify, ToastKind::Success, "You have been logged out.");
        navigate("/login", NavigateOptions::default());
    };

    let on_toggle_theme = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Eventra"
            </a>
            <div class="navbar__links">
                <Show
                    when=move || session.get().identity.is_some()
                    fallback=|| {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Login"
                            </a>
                            <a class="navbar__link" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/">
                        "Home"
                    </a>
                    <Show when=move || registrations_link_visible(&session.get())>
                        <a class="navbar__link" href="/my-registrations">
                            "My Registrations"
                        </a>
                    </Show>
                    <span class="navbar__email">
                        {move || signed_in_email(&session.get()).unwrap_or_default()}
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
                <button
                    class="btn navbar__theme"
                    title="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
                </button>
            </div>
        </nav>
    }
}
