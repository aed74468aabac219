//! The caller's registration list with receipt downloads.
//!
//! Self-fetching: the component loads `/api/registrants/me` once the
//! session is ready, so the home page sidebar and the dedicated page
//! share one implementation.

use leptos::prelude::*;

use crate::components::toast_tray::show_toast;
use crate::net::types::Registration;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::registrations::RegistrationsState;
use crate::state::session::Session;
use crate::util::format::date_part;

#[component]
pub fn RegistrationsList() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let registrations = expect_context::<RwSignal<RegistrationsState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let requested = RwSignal::new(false);

    Effect::new(move || {
        let current = session.get();
        if !current.is_ready() || requested.get() {
            return;
        }
        let Some(token) = current.token else {
            return;
        };
        requested.set(true);
        registrations.update(|state| state.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_registrations(&token).await {
                Ok(items) => registrations.update(|state| {
                    state.items = items;
                    state.loading = false;
                }),
                Err(err) => {
                    registrations.update(|state| state.loading = false);
                    show_toast(
                        notify,
                        ToastKind::Error,
                        format!("Could not fetch your registrations: {err}"),
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_download = Callback::new(move |invoice_id: i64| {
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
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
                    show_toast(notify, ToastKind::Error, "Could not download receipt.");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, invoice_id);
    });

    view! {
        <div class="tickets">
            <Show when=move || registrations.with(|state| state.loading)>
                <p class="tickets__loading">"Loading your registrations..."</p>
            </Show>
            <Show when=move || registrations.with(RegistrationsState::is_empty)>
                <div class="tickets__empty">
                    <h3>"No Tickets Yet"</h3>
                    <p>"You haven't registered for any events."</p>
                </div>
            </Show>
            <Show when=move || registrations.with(|state| !state.loading && !state.items.is_empty())>
                <div class="tickets__list">
                    {move || {
                        registrations
                            .get()
                            .items
                            .into_iter()
                            .map(|registration| {
                                view! {
                                    <TicketCard registration=registration on_download=on_download/>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TicketCard(registration: Registration, on_download: Callback<i64>) -> impl IntoView {
    let date = date_part(&registration.event.date).to_owned();
    let invoice_id = registration.invoice.map(|invoice| invoice.id);

    view! {
        <div class="ticket-card">
            <div class="ticket-card__main">
                <h3>{registration.event.name.clone()}</h3>
                <p>
                    <strong>"Date: "</strong>
                    {date}
                </p>
                <p>
                    <strong>"Location: "</strong>
                    {registration.event.location.clone()}
                </p>
            </div>
            <Show when=move || invoice_id.is_some()>
                <button
                    class="btn ticket-card__download"
                    on:click=move |_| {
                        if let Some(id) = invoice_id {
                            on_download.run(id);
                        }
                    }
                >
                    "Download Receipt"
                </button>
            </Show>
        </div>
    }
}
