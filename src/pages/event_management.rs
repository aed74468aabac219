//! Event management page: the creator's view of one event and its
//! attendee roster, reached from the dashboard at `/manage/event/:eventId`.
//!
//! Unlike the browse detail page this loads the event through the
//! creator-scoped endpoint and turns visitors away: anyone who is not
//! the owner is sent back to the dashboard with a toast.

#[cfg(test)]
#[path = "event_management_test.rs"]
mod event_management_test;

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

fn attendees_heading(count: usize) -> String {
    format!("Attendees ({count})")
}

/// User-facing text when the managed event cannot be loaded. The
/// creator-scoped endpoint rejects both missing and foreign events, so
/// any HTTP failure reads the same way.
fn manage_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Http { .. } => "Event not found or you do not have permission.".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn EventManagementPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let params = use_params_map();
    let event = RwSignal::new(None::<Event>);
    let registrants = RwSignal::new(Vec::<Registrant>::new());
    let loading = RwSignal::new(true);
    let last_route_event_id = RwSignal::new(None::<String>);

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
            show_toast(
                notify,
                ToastKind::Error,
                "Event not found or you do not have permission.",
            );
            #[cfg(feature = "hydrate")]
            navigate_fetch("/", NavigateOptions::default());
            return;
        };
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_fetch.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_managed_event(&token, id).await {
                    Ok(found) => {
                        let owns = current
                            .identity
                            .as_ref()
                            .is_some_and(|identity| owns_event(identity, &found));
                        if !owns {
                            loading.set(false);
                            show_toast(
                                notify,
                                ToastKind::Error,
                                "You are not authorized to manage this event.",
                            );
                            navigate("/", NavigateOptions::default());
                            return;
                        }
                        event.set(Some(found));
                        match crate::net::api::fetch_registrants(&token, id).await {
                            Ok(list) => registrants.set(list),
                            Err(_) => {
                                show_toast(
                                    notify,
                                    ToastKind::Error,
                                    "Could not fetch the list of attendees.",
                                );
                            }
                        }
                        loading.set(false);
                    }
                    Err(err) => {
                        loading.set(false);
                        show_toast(notify, ToastKind::Error, manage_failure_text(&err));
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

    let on_invoice = Callback::new(move |invoice_id: i64| {
        let Some(token) = session.with_untracked(|current| current.token.clone()) else {
            return;
        };
        show_toast(notify, ToastKind::Info, "Generating invoice...");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_invoice(&token, invoice_id).await {
                Ok(bytes) => {
                    let filename = crate::util::download::document_filename("invoice", invoice_id);
                    crate::util::download::save_pdf(&filename, &bytes);
                    show_toast(notify, ToastKind::Success, "Invoice downloaded!");
                }
                Err(_) => {
                    show_toast(notify, ToastKind::Error, "Could not download the invoice.");
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
            {move || {
                if loading.get() {
                    return None;
                }
                event
                    .get()
                    .map(|found| {
                        let date = date_part(&found.date).to_owned();
                        let price = price_label(found.price);
                        view! {
                            <a class="back-link" href="/">
                                "\u{2190} Back to Dashboard"
                            </a>
                            <header class="detail__header">
                                <h1>"Manage Event"</h1>
                                <p class="detail__subtitle">{found.name.clone()}</p>
                            </header>
                            <div class="detail__grid">
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
                                                    "No one has registered for this event yet."
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
                            </div>
                        }
                    })
            }}
        </main>
    }
}
