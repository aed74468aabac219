//! Home page: creator dashboard or attendee browser, by role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creators get the event form (with AI assist) next to their own event
//! list; attendees get the browse catalog next to their registrations.
//! All mutations refetch the list afterwards rather than patching it
//! locally, so the list always reflects what the backend accepted.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::event_form::EventForm;
use crate::components::event_list::EventList;
use crate::components::registrations_list::RegistrationsList;
use crate::components::toast_tray::show_toast;
use crate::net::api::ApiError;
use crate::net::types::Event;
use crate::state::events::{EventDraft, EventsState};
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::{Identity, Session};

fn viewer_is_creator(session: &Session) -> bool {
    session.identity.as_ref().is_some_and(Identity::is_creator)
}

fn form_heading(editing: bool) -> &'static str {
    if editing { "Edit Event" } else { "Create an Event" }
}

fn save_success_message(editing: bool) -> &'static str {
    if editing { "Event updated!" } else { "Event created!" }
}

/// User-facing text for a failed AI draft. Bare status codes collapse to
/// a friendly default; anything the backend said wins.
fn ai_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if message.starts_with("HTTP status") => {
            "The AI assistant did not respond correctly.".to_owned()
        }
        other => other.to_string(),
    }
}

/// Fetch the role-appropriate event list into shared state.
fn load_events(
    session: RwSignal<Session>,
    events: RwSignal<EventsState>,
    notify: RwSignal<NotifyState>,
) {
    let current = session.get_untracked();
    let Some(token) = current.token.clone() else {
        return;
    };
    let creator = viewer_is_creator(&current);
    events.update(|state| state.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_events(&token, creator).await;
        events.update(|state| state.loading = false);
        match result {
            Ok(items) => events.update(|state| state.items = items),
            Err(err) => {
                show_toast(
                    notify,
                    ToastKind::Error,
                    format!("Failed to fetch events: {err}"),
                );
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, creator, notify);
        events.update(|state| state.loading = false);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let events = expect_context::<RwSignal<EventsState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let requested = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<i64>);

    Effect::new(move || {
        let current = session.get();
        if !current.is_ready() || current.identity.is_none() || requested.get() {
            return;
        }
        requested.set(true);
        load_events(session, events, notify);
    });

    let on_submit = Callback::new(move |()| {
        let input = match events.with_untracked(|state| state.draft.validate()) {
            Ok(input) => input,
            Err(err) => {
                show_toast(notify, ToastKind::Error, err.to_string());
                return;
            }
        };
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            show_toast(
                notify,
                ToastKind::Error,
                "Authentication error. Please log in again.",
            );
            return;
        };
        let editing = events.with_untracked(|state| state.editing_id);
        events.update(|state| state.saving = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(id) => crate::net::api::update_event(&token, id, &input).await,
                None => crate::net::api::create_event(&token, &input).await,
            };
            events.update(|state| state.saving = false);
            match result {
                Ok(()) => {
                    events.update(EventsState::reset_draft);
                    show_toast(
                        notify,
                        ToastKind::Success,
                        save_success_message(editing.is_some()),
                    );
                    load_events(session, events, notify);
                }
                Err(err) => {
                    show_toast(notify, ToastKind::Error, format!("Failed to save event: {err}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, input, editing);
            events.update(|state| state.saving = false);
        }
    });

    let on_cancel_edit = Callback::new(move |()| events.update(EventsState::reset_draft));

    let on_edit = Callback::new(move |event: Event| {
        let name = event.name.clone();
        events.update(|state| state.begin_edit(&event));
        show_toast(notify, ToastKind::Success, format!("Now editing: {name}"));
    });

    let on_delete_request = Callback::new(move |id: i64| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let on_generate = Callback::new(move |()| {
        let prompt = events.with_untracked(|state| state.ai_prompt.trim().to_owned());
        if prompt.is_empty() {
            show_toast(notify, ToastKind::Error, "Please enter an event idea first.");
            return;
        }
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        events.update(|state| state.generating = true);
        show_toast(notify, ToastKind::Info, "Asking the AI assistant...");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::generate_event(&token, &prompt).await;
            events.update(|state| state.generating = false);
            match result {
                Ok(generated) => {
                    events.update(|state| state.draft = EventDraft::from_generated(&generated));
                    show_toast(notify, ToastKind::Success, "AI has filled in the details!");
                }
                Err(err) => {
                    show_toast(
                        notify,
                        ToastKind::Error,
                        format!("AI Assistant Error: {}", ai_failure_text(&err)),
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, prompt);
            events.update(|state| state.generating = false);
        }
    });

    view! {
        <main class="home">
            <Show
                when=move || viewer_is_creator(&session.get())
                fallback=move || {
                    view! {
                        <div class="home__grid">
                            <section class="card">
                                <div class="section-header">
                                    <h2>"Upcoming Events"</h2>
                                    <p>
                                        "Find an event that interests you and open it to see details and register."
                                    </p>
                                </div>
                                {move || {
                                    let state = events.get();
                                    view! {
                                        <EventList
                                            events=state.items
                                            loading=state.loading
                                            creator=false
                                        />
                                    }
                                }}
                            </section>
                            <section class="card">
                                <div class="section-header">
                                    <h2>"My Registrations"</h2>
                                    <p>"A list of all events you are registered to attend."</p>
                                </div>
                                <RegistrationsList/>
                            </section>
                        </div>
                    }
                }
            >
                <div class="home__grid">
                    <section class="card">
                        <div class="section-header">
                            <h2>
                                {move || form_heading(events.with(|s| s.editing_id.is_some()))}
                            </h2>
                            <p>"Fill in the details below or use our AI assistant to get started."</p>
                        </div>
                        <EventForm
                            on_submit=on_submit
                            on_cancel_edit=on_cancel_edit
                            on_generate=on_generate
                        />
                    </section>
                    <section class="card">
                        <div class="section-header">
                            <h2>"Your Upcoming Events"</h2>
                            <p>"A list of all events you have created. You can manage them from here."</p>
                        </div>
                        {move || {
                            let state = events.get();
                            view! {
                                <EventList
                                    events=state.items
                                    loading=state.loading
                                    creator=true
                                    on_edit=on_edit
                                    on_delete=on_delete_request
                                />
                            }
                        }}
                    </section>
                </div>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteEventDialog
                    session=session
                    events=events
                    notify=notify
                    delete_target=delete_target
                    on_cancel=on_delete_cancel
                />
            </Show>
        </main>
    }
}

/// Modal confirmation before an event is deleted.
#[component]
fn DeleteEventDialog(
    session: RwSignal<Session>,
    events: RwSignal<EventsState>,
    notify: RwSignal<NotifyState>,
    delete_target: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        on_cancel.run(());
        let Some(token) = session.with_untracked(|s| s.token.clone()) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_event(&token, id).await {
                Ok(()) => {
                    show_toast(notify, ToastKind::Success, "Event deleted!");
                    load_events(session, events, notify);
                }
                Err(err) => {
                    show_toast(notify, ToastKind::Error, format!("Failed to delete: {err}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, id, events, notify);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Event"</h2>
                <p class="dialog__danger">
                    "This will permanently delete this event and its registrations."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
