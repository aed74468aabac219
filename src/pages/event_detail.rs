//! Event detail page: registration form for attendees, attendee roster
//! for the event's creator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the browse catalog at `/event/:eventId`. The same route
//! serves two audiences: a visitor registering for the event, and the
//! creator who owns it checking who signed up. Ownership is decided
//! client-side from the token subject; the backend enforces it again on
//! the registrant endpoints.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::components::toast_tray::show_toast;
use crate::net::api::ApiError;
use crate::net::types::{Event, Registrant};
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::Session;
use crate::util::auth::owns_event;
use crate::util::format::{date_part, parse_event_id, price_label};

fn viewer_owns(session: &Session, event: &Event) -> bool {
    session
        .identity
        .as_ref()
        .is_some_and(|identity| identity.is_creator() && owns_event(identity, event))
}

fn page_heading(owner: bool, event_name: &str) -> String {
    if owner {
        "Manage Event".to_owned()
    } else {
        event_name.to_owned()
    }
}

fn back_link_text(owner: bool) -> &'static str {
    if owner {
        "\u{2190} Back to Dashboard"
    } else {
        "\u{2190} Back to Events"
    }
}

fn attendees_heading(count: usize) -> String {
    format!("Attendees ({count})")
}

/// User-facing text when the event itself cannot be loaded. Any HTTP
/// failure reads as a missing event; transport errors keep their text.
fn load_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Http { .. } => "The requested event could not be found.".to_owned(),
        other => other.to_string(),
    }
}

/// User-facing text for a rejected registration. The backend's own
/// message wins; bare status codes collapse to the most likely cause.
fn registration_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if !message.starts_with("HTTP status") => message.clone(),
        ApiError::Http { .. } => {
            "Registration failed. You may already be registered for this event.".to_owned()
        }
        other => other.to_string(),
    }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let params = use_params_map();
    let event = RwSignal::new(None::<Event>);
    let registrants = RwSignal::new(Vec::<Registrant>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let last_route_event_id = RwSignal::new(None::<String>);

    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(session.with_untracked(|current| {
        current
            .identity
            .as_ref()
            .map(|identity| identity.email.clone())
            .unwrap_or_default()
    }));

    // Fetch the event (and, for its creator, the roster) whenever the
    // route parameter changes.
    #[cfg(feature = "hydrate")]
    let navigate_fetch = navigate.clone();
    Effect::new(move || {
        let current = session.get();
        if !current.is_ready() {
            return;
        }
        let Some(token) = current.token.clone() else {
            return;
        };
        let raw = params.read().get("eventId");
        if last_route_event_id.get_untracked() == raw {
            return;
        }
        last_route_event_id.set(raw.clone());
        let Some(id) = parse_event_id(raw) else {
            show_toast(notify, ToastKind::Error, "The requested event could not be found.");
            #[cfg(feature = "hydrate")]
            navigate_fetch("/", NavigateOptions::default());
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_fetch.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_event(&token, id).await {
                    Ok(found) => {
                        let owner = viewer_owns(&current, &found);
                        event.set(Some(found));
                        if owner {
                            match crate::net::api::fetch_registrants(&token, id).await {
                                Ok(list) => registrants.set(list),
                                Err(_) => {
                                    show_toast(
                                        notify,
                                        ToastKind::Error,
                                        "Could not fetch the list of registrants.",
                                    );
                                }
                            }
                        }
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        show_toast(notify, ToastKind::Error, load_failure_text(&err));
                        navigate("/", NavigateOptions::default());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            loading.set(false);
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate_registered = navigate.clone();
    let submit_registration = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(token) = session.with_untracked(|current| current.token.clone()) else {
            return;
        };
        let Some(id) = parse_event_id(params.read_untracked().get("eventId")) else {
            return;
        };
        let name = reg_name.get_untracked();
        let email = reg_email.get_untracked();
        busy.set(true);
        show_toast(notify, ToastKind::Info, "Processing registration...");
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_registered.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register_for_event(&token, id, &name, &email).await;
                busy.set(false);
                match result {
                    Ok(added) => {
                        show_toast(
                            notify,
                            ToastKind::Success,
                            format!("Successfully registered {}!", added.name),
                        );
                        reg_name.set(String::new());
                        reg_email.set(session.with_untracked(|current| {
                            current
                                .identity
                                .as_ref()
                                .map(|identity| identity.email.clone())
                                .unwrap_or_default()
                        }));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        show_toast(notify, ToastKind::Error, registration_failure_text(&err));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id, name, email);
            busy.set(false);
        }
    });

    let on_invoice = Callback::new(move |invoice_id: i64| {
        let Some(token) = session.with_untracked(|current| current.token.clone()) else {
            return;
        };
        show_toast(notify, ToastKind::Info, "Generating your receipt...");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_invoice(&token, invoice_id).await {
                Ok(bytes) => {
                    let filename = crate::util::download::document_filename("receipt", invoice_id);
                    crate::util::download::save_pdf(&filename, &bytes);
                    show_toast(notify, ToastKind::Success, "Receipt downloaded!");
                }
                Err(_) => {
                    show_toast(notify, ToastKind::Error, "Could not download the receipt.");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, invoice_id);
    });

    view! {
        <main class="detail">
            <Show when=move || loading.get()>
                <p class="detail__loading">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get() && event.with(Option::is_none)>
                <p class="detail__missing">"Event not found."</p>
            </Show>
            {move || {
                if loading.get() {
                    return None;
                }
                event
                    .get()
                    .map(|found| {
                        let owner = viewer_owns(&session.get(), &found);
                        let date = date_part(&found.date).to_owned();
                        let price = price_label(found.price);
                        let heading = page_heading(owner, &found.name);
                        let subtitle = found.name.clone();
                        view! {
                            <a class="back-link" href="/">
                                {back_link_text(owner)}
                            </a>
                            <header class="detail__header">
                                <h1>{heading}</h1>
                                <Show when=move || owner>
                                    <p class="detail__subtitle">{subtitle.clone()}</p>
                                </Show>
                            </header>
                            <div class=if owner { "detail__grid" } else { "detail__column" }>
                                <section class="card">
                                    <div class="section-header">
                                        <h2>"Event Details"</h2>
                                    </div>
                                    <div class="detail__facts">
                                        <p>
                                            <strong>"Date: "</strong>
                                            {date}
                                        </p>
                                        <p>
                                            <strong>"Location: "</strong>
                                            {found.location.clone()}
                                        </p>
                                        <p>
                                            <strong>"Price: "</strong>
                                            {price}
                                        </p>
                                    </div>
                                </section>
                                <Show
                                    when=move || owner
                                    fallback=move || {
                                        view! {
                                            <section class="card">
                                                <div class="section-header">
                                                    <h2>"Register for this Event"</h2>
                                                </div>
                                                <form
                                                    class="detail__register"
                                                    on:submit=move |ev| {
                                                        ev.prevent_default();
                                                        submit_registration.run(());
                                                    }
                                                >
                                                    <label for="registrant-name">"Full Name"</label>
                                                    <input
                                                        id="registrant-name"
                                                        type="text"
                                                        required=true
                                                        prop:value=move || reg_name.get()
                                                        on:input=move |ev| {
                                                            reg_name.set(event_target_value(&ev))
                                                        }
                                                    />
                                                    <label for="registrant-email">
                                                        "Email Address for Receipt"
                                                    </label>
                                                    <input
                                                        id="registrant-email"
                                                        type="email"
                                                        required=true
                                                        prop:value=move || reg_email.get()
                                                        on:input=move |ev| {
                                                            reg_email.set(event_target_value(&ev))
                                                        }
                                                    />
                                                    <button
                                                        class="btn btn--primary"
                                                        type="submit"
                                                        disabled=move || busy.get()
                                                    >
                                                        "Confirm Registration"
                                                    </button>
                                                </form>
                                            </section>
                                        }
                                    }
                                >
                                    <section class="card">
                                        <div class="section-header">
                                            <h2>
                                                {move || {
                                                    attendees_heading(registrants.with(Vec::len))
                                                }}
                                            </h2>
                                        </div>
                                        <Show
                                            when=move || registrants.with(|list| !list.is_empty())
                                            fallback=|| {
                                                view! {
                                                    <p class="detail__empty">
                                                        "No one has registered yet."
                                                    </p>
                                                }
                                            }
                                        >
                                            <ul class="attendees">
                                                {move || {
                                                    registrants
                                                        .get()
                                                        .into_iter()
                                                        .map(|registrant| {
                                                            let invoice_id = registrant
                                                                .invoice
                                                                .map(|invoice| invoice.id);
                                                            view! {
                                                                <li class="attendees__row">
                                                                    <div class="attendees__who">
                                                                        <span class="attendees__name">
                                                                            {registrant.name}
                                                                        </span>
                                                                        <span class="attendees__email">
                                                                            {registrant.email}
                                                                        </span>
                                                                    </div>
                                                                    <Show when=move || invoice_id.is_some()>
                                                                        <button
                                                                            class="btn attendees__invoice"
                                                                            on:click=move |_| {
                                                                                if let Some(id) = invoice_id {
                                                                                    on_invoice.run(id);
                                                                                }
                                                                            }
                                                                        >
                                                                            "Invoice"
                                                                        </button>
                                                                    </Show>
                                                                </li>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()
                                                }}
                                            </ul>
                                        </Show>
                                    </section>
                                </Show>
                            </div>
                        }
                    })
            }}
        </main>
    }
}
