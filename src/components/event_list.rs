//! Event card list shared by the creator and attendee views.
//!
//! DESIGN
//! ======
//! Presentation only: the home page owns fetching and mutation, this
//! component renders whatever it is handed. Creators get edit/delete
//! actions and manage links; attendees get a detail link per card.

#[cfg(test)]
#[path = "event_list_test.rs"]
mod event_list_test;

use leptos::prelude::*;

use crate::net::types::Event;
use crate::util::format::{date_part, price_label};

fn event_href(creator: bool, event_id: i64) -> String {
    if creator {
        format!("/manage/event/{event_id}")
    } else {
        format!("/event/{event_id}")
    }
}

fn empty_list_text(creator: bool) -> &'static str {
    if creator {
        "You haven't created any events yet."
    } else {
        "No events are available right now."
    }
}

/// Card list over `events`, with role-appropriate actions.
#[component]
pub fn EventList(
    events: Vec<Event>,
    loading: bool,
    creator: bool,
    #[prop(optional)] on_edit: Option<Callback<Event>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let is_empty = events.is_empty();

    view! {
        <div class="event-list">
            <Show when=move || loading>
                <p class="event-list__loading">"Loading events..."</p>
            </Show>
            <Show when=move || !loading && is_empty>
                <p class="event-list__empty">{empty_list_text(creator)}</p>
            </Show>
            <Show when=move || !loading && !is_empty>
                <div class="event-list__cards">
                    {events
                        .clone()
                        .into_iter()
                        .map(|event| {
                            view! {
                                <EventCard
                                    event=event
                                    creator=creator
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn EventCard(
    event: Event,
    creator: bool,
    on_edit: Option<Callback<Event>>,
    on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let event_id = event.id;
    let href = event_href(creator, event_id);
    let price = price_label(event.price);
    let date = date_part(&event.date).to_owned();
    let edit_source = event.clone();

    view! {
        <div class="event-card">
            <div class="event-card__header">
                <a class="event-card__link" href=href>
                    <h3>{event.name.clone()}</h3>
                </a>
                <span class="event-card__price">{price}</span>
            </div>
            <div class="event-card__body">
                <p>
                    <strong>"Date: "</strong>
                    {date}
                </p>
                <p>
                    <strong>"Location: "</strong>
                    {event.location.clone()}
                </p>
            </div>
            <div class="event-card__actions">
                <Show
                    when=move || creator
                    fallback=move || {
                        view! {
                            <a class="btn btn--primary" href=format!("/event/{event_id}")>
                                "View Details & Register"
                            </a>
                        }
                    }
                >
                    <button
                        class="btn"
                        on:click={
                            let edit_source = edit_source.clone();
                            move |_| {
                                if let Some(on_edit) = on_edit {
                                    on_edit.run(edit_source.clone());
                                }
                            }
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| {
                            if let Some(on_delete) = on_delete {
                                on_delete.run(event_id);
                            }
                        }
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
        </div>
    }
}
