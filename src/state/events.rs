//! Home-page event list and draft state.
//!
//! DESIGN
//! ======
//! One struct carries the list, the create/edit form buffer, and the AI
//! prompt so the home page and its form component share a single
//! `RwSignal<EventsState>`. Draft fields stay raw input text until
//! [`EventDraft::validate`] turns them into a typed request payload;
//! validation failures never leave the form.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::types::{Event, EventInput, GeneratedEvent};
use crate::util::format::{date_part, price_input_value};

/// Form buffer for creating or editing an event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub location: String,
    pub price: String,
}

/// Why a draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill in all fields, including price.")]
    MissingField,
    #[error("Ticket price must be a number.")]
    InvalidPrice,
}

impl EventDraft {
    /// Prefill from an existing event for editing. The stored timestamp
    /// is reduced to the `yyyy-mm-dd` form that date inputs accept.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            date: date_part(&event.date).to_owned(),
            location: event.location.clone(),
            price: price_input_value(event.price),
        }
    }

    /// Build a draft from AI-suggested fields, leaving blanks where the
    /// assistant had nothing. A missing price suggests a free event.
    #[must_use]
    pub fn from_generated(generated: &GeneratedEvent) -> Self {
        Self {
            name: generated.name.clone().unwrap_or_default(),
            date: generated
                .date
                .as_deref()
                .map(date_part)
                .unwrap_or_default()
                .to_owned(),
            location: generated.location.clone().unwrap_or_default(),
            price: price_input_value(generated.price.unwrap_or(0.0)),
        }
    }

    /// Check required fields and produce the request payload.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when a field is blank or the price does
    /// not parse. Zero is a valid price; blank is not.
    pub fn validate(&self) -> Result<EventInput, DraftError> {
        let name = self.name.trim();
        let date = self.date.trim();
        let location = self.location.trim();
        let price = self.price.trim();
        if name.is_empty() || date.is_empty() || location.is_empty() || price.is_empty() {
            return Err(DraftError::MissingField);
        }
        let price: f64 = price.parse().map_err(|_| DraftError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(DraftError::InvalidPrice);
        }
        Ok(EventInput {
            name: name.to_owned(),
            date: date.to_owned(),
            location: location.to_owned(),
            price,
        })
    }
}

/// Shared home-page event state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsState {
    pub items: Vec<Event>,
    pub loading: bool,
    pub draft: EventDraft,
    /// `Some` while the form edits an existing event.
    pub editing_id: Option<i64>,
    pub saving: bool,
    pub ai_prompt: String,
    pub generating: bool,
}

impl EventsState {
    /// Enter edit mode for `event`, prefilling the draft.
    pub fn begin_edit(&mut self, event: &Event) {
        self.editing_id = Some(event.id);
        self.draft = EventDraft::from_event(event);
    }

    /// Leave edit mode and clear the form and prompt.
    pub fn reset_draft(&mut self) {
        self.editing_id = None;
        self.draft = EventDraft::default();
        self.ai_prompt = String::new();
    }
}
