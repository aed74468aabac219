//! Wire types for the event platform's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! These mirror the backend's JSON payloads field-for-field (camelCase on
//! the wire) so serde round-trips stay lossless. Dates are ISO-8601
//! strings the client treats as opaque text apart from trimming the time
//! component for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An event as returned by the list and detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub price: f64,
    /// Backend id of the creating user. Browse payloads omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Fields submitted when creating or updating an event.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub name: String,
    pub date: String,
    pub location: String,
    pub price: f64,
}

/// A registrant row for an event the caller owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrant {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    /// Present only when the registration produced a billing document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceRef>,
}

/// Invoice reference attached to a paid registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRef {
    pub id: i64,
}

/// One of the caller's own registrations, with its event summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub event: RegisteredEvent,
    /// Present only when the registration produced a billing document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceRef>,
}

/// Event summary embedded in a registration row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredEvent {
    pub name: String,
    pub date: String,
    pub location: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Draft fields suggested by the AI assist endpoint. Every field is
/// optional; the assistant fills what it can infer from the prompt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedEvent {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
}
