//! Create/edit form for events, with the AI draft assistant.
//!
//! DESIGN
//! ======
//! Field buffers live in the shared `EventsState` draft so edit-mode
//! prefill and AI suggestions land in the same place the inputs read
//! from. Submission, cancel, and generation are callbacks into the home
//! page, which owns the API calls.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use leptos::prelude::*;

use crate::state::events::EventsState;

fn submit_label(editing: bool) -> &'static str {
    if editing { "Update Event" } else { "Add Event" }
}

fn generate_label(generating: bool) -> &'static str {
    if generating { "Generating..." } else { "Generate with AI" }
}

#[component]
pub fn EventForm(
    on_submit: Callback<()>,
    on_cancel_edit: Callback<()>,
    on_generate: Callback<()>,
) -> impl IntoView {
    let events = expect_context::<RwSignal<EventsState>>();
    let editing = move || events.with(|state| state.editing_id.is_some());

    view! {
        <form
            class="event-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="event-form__ai">
                <label for="ai-prompt">"AI Event Assistant"</label>
                <p class="event-form__hint">
                    "Describe your event idea, and let AI fill in the details!"
                </p>
                <textarea
                    id="ai-prompt"
                    rows="3"
                    placeholder="e.g., A large tech conference in Singapore"
                    prop:value=move || events.with(|state| state.ai_prompt.clone())
                    on:input=move |ev| {
                        events.update(|state| state.ai_prompt = event_target_value(&ev));
                    }
                />
                <button
                    type="button"
                    class="btn btn--ai"
                    disabled=move || events.with(|state| state.generating)
                    on:click=move |_| on_generate.run(())
                >
                    {move || generate_label(events.with(|state| state.generating))}
                </button>
            </div>

            <hr class="event-form__divider"/>

            <div class="event-form__group">
                <label for="event-name">"Event Name"</label>
                <input
                    id="event-name"
                    type="text"
                    prop:value=move || events.with(|state| state.draft.name.clone())
                    on:input=move |ev| {
                        events.update(|state| state.draft.name = event_target_value(&ev));
                    }
                />
            </div>
            <div class="event-form__group">
                <label for="event-price">"Ticket Price ($)"</label>
                <input
                    id="event-price"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00 for a free event"
                    prop:value=move || events.with(|state| state.draft.price.clone())
                    on:input=move |ev| {
                        events.update(|state| state.draft.price = event_target_value(&ev));
                    }
                />
            </div>
            <div class="event-form__group">
                <label for="event-date">"Date"</label>
                <input
                    id="event-date"
                    type="date"
                    prop:value=move || events.with(|state| state.draft.date.clone())
                    on:input=move |ev| {
                        events.update(|state| state.draft.date = event_target_value(&ev));
                    }
                />
            </div>
            <div class="event-form__group">
                <label for="event-location">"Location"</label>
                <input
                    id="event-location"
                    type="text"
                    prop:value=move || events.with(|state| state.draft.location.clone())
                    on:input=move |ev| {
                        events.update(|state| state.draft.location = event_target_value(&ev));
                    }
                />
            </div>

            <div class="event-form__actions">
                <Show when=editing>
                    <button type="button" class="btn" on:click=move |_| on_cancel_edit.run(())>
                        "Cancel"
                    </button>
                </Show>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || events.with(|state| state.saving)
                >
                    {move || submit_label(events.with(|state| state.editing_id.is_some()))}
                </button>
            </div>
        </form>
    }
}
