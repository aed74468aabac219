//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route is wrapped in a session guard, so the session context is
//! restored here, exactly once, before any page decides to redirect.
//! Guards render a placeholder until that restore lands; see
//! `components::guards`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{GuestRoute, ProtectedRoute};
use crate::components::navbar::Navbar;
use crate::components::toast_tray::ToastTray;
use crate::pages::{
    event_detail::EventDetailPage, event_management::EventManagementPage, home::HomePage,
    login::LoginPage, my_registrations::MyRegistrationsPage, register::RegisterPage,
};
use crate::state::events::EventsState;
use crate::state::notify::NotifyState;
use crate::state::registrations::RegistrationsState;
use crate::state::session::{Session, SessionStore};
use crate::state::ui::UiState;
use crate::util::claims::ClaimKeys;
use crate::util::dark_mode;
use crate::util::token_storage::BrowserTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = StoredValue::new(SessionStore::new(BrowserTokenStore, ClaimKeys::default()));
    let session = RwSignal::new(Session::default());
    let events = RwSignal::new(EventsState::default());
    let registrations = RwSignal::new(RegistrationsState::default());
    let notify = RwSignal::new(NotifyState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(store);
    provide_context(session);
    provide_context(events);
    provide_context(registrations);
    provide_context(notify);
    provide_context(ui);

    // Restore any persisted session once the client is live. Guarded
    // routes stay on their placeholder until this has run.
    Effect::new(move || {
        session.set(store.with_value(SessionStore::initialize));
    });

    // Pick up the stored theme choice.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        ui.update(|state| state.dark_mode = dark);
        dark_mode::apply(dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/eventra-ui.css"/>
        <Title text="Eventra"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <HomePage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("event"), ParamSegment("eventId"))
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <EventDetailPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("my-registrations")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <MyRegistrationsPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(
                        StaticSegment("manage"),
                        StaticSegment("event"),
                        ParamSegment("eventId"),
                    )
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <EventManagementPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <GuestRoute>
                                <LoginPage/>
                            </GuestRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| {
                        view! {
                            <GuestRoute>
                                <RegisterPage/>
                            </GuestRoute>
                        }
                    }
                />
            </Routes>
            <ToastTray/>
        </Router>
    }
}
