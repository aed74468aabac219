//! REST API access for the event platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying
//! the caller's bearer token. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since every endpoint is only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success statuses both map to [`ApiError`].
//! Callers surface the message as a notification and leave session state
//! alone; an expired token shows up here as a 401, not as a logout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Event, EventInput, GeneratedEvent, LoginResponse, Registrant, Registration};

/// Compile-time override for the backend origin; same-origin by default.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: Option<&str> = option_env!("EVENTRA_API_URL");

/// Failures surfaced by the API layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Endpoint called outside a browser context.
    #[error("not available on server")]
    Unavailable,
}

// ============================================================================
// URL and header construction
// ============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn join_base(base: Option<&str>, path: &str) -> String {
    match base {
        Some(base) => format!("{}{path}", base.trim_end_matches('/')),
        None => path.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    join_base(API_BASE, path)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Creators list their own events; everyone else browses the catalog.
#[cfg(any(test, feature = "hydrate"))]
fn events_list_path(creator: bool) -> &'static str {
    if creator { "/api/events" } else { "/api/browse/events" }
}

#[cfg(any(test, feature = "hydrate"))]
fn event_path(event_id: i64) -> String {
    format!("/api/events/{event_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn browse_event_path(event_id: i64) -> String {
    format!("/api/browse/events/{event_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn registrants_path(event_id: i64) -> String {
    format!("/api/registrants?eventId={event_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn invoice_path(invoice_id: i64) -> String {
    format!("/api/invoice/{invoice_id}")
}

// ============================================================================
// Error mapping
// ============================================================================

/// Build an [`ApiError::Http`] from a failed response body, preferring
/// the backend's JSON `{"message": ...}` shape, then raw body text, then
/// a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn http_error(status: u16, body: &str) -> ApiError {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    let message = from_json.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            format!("HTTP status {status}")
        } else {
            trimmed.to_owned()
        }
    });
    ApiError::Http { status, message }
}

#[cfg(feature = "hydrate")]
fn network_error(err: &gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn reject(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    http_error(status, &body)
}

// ============================================================================
// Account endpoints
// ============================================================================

/// Exchange credentials for a bearer token via `POST /api/account/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint("/api/account/login"))
            .json(&payload)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        let body: LoginResponse = resp.json().await.map_err(|e| network_error(&e))?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/account/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the backend rejects
/// the registration.
pub async fn register_account(email: &str, password: &str, role: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "role": role });
        let resp = gloo_net::http::Request::post(&endpoint("/api/account/register"))
            .json(&payload)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, role);
        Err(ApiError::Unavailable)
    }
}

// ============================================================================
// Event endpoints
// ============================================================================

/// Fetch the event list appropriate to the caller's role.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn fetch_events(token: &str, creator: bool) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(events_list_path(creator)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, creator);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single event from the browse catalog.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn fetch_event(token: &str, event_id: i64) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(&browse_event_path(event_id)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one of the caller's own events through the management endpoint,
/// which includes the creator id.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn fetch_managed_event(token: &str, event_id: i64) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(&event_path(event_id)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id);
        Err(ApiError::Unavailable)
    }
}

/// Create an event via `POST /api/events`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn create_event(token: &str, input: &EventInput) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/events"))
            .header("Authorization", &bearer(token))
            .json(input)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, input);
        Err(ApiError::Unavailable)
    }
}

/// Update an event via `PUT /api/events/{id}`. The body repeats the id
/// alongside the editable fields, as the backend requires.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn update_event(token: &str, event_id: i64, input: &EventInput) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "id": event_id,
            "name": input.name,
            "date": input.date,
            "location": input.location,
            "price": input.price,
        });
        let resp = gloo_net::http::Request::put(&endpoint(&event_path(event_id)))
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id, input);
        Err(ApiError::Unavailable)
    }
}

/// Delete an event via `DELETE /api/events/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn delete_event(token: &str, event_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&endpoint(&event_path(event_id)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id);
        Err(ApiError::Unavailable)
    }
}

// ============================================================================
// Registration endpoints
// ============================================================================

/// List registrants for an event the caller owns.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn fetch_registrants(token: &str, event_id: i64) -> Result<Vec<Registrant>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(&registrants_path(event_id)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id);
        Err(ApiError::Unavailable)
    }
}

/// Register the caller for an event via `POST /api/registrants`,
/// returning the created registrant row.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or when the backend
/// rejects the registration, for example a duplicate.
pub async fn register_for_event(
    token: &str,
    event_id: i64,
    name: &str,
    email: &str,
) -> Result<Registrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "eventId": event_id });
        let resp = gloo_net::http::Request::post(&endpoint("/api/registrants"))
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id, name, email);
        Err(ApiError::Unavailable)
    }
}

/// List the caller's own registrations via `GET /api/registrants/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn fetch_my_registrations(token: &str) -> Result<Vec<Registration>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/api/registrants/me"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Download an invoice PDF via `GET /api/invoice/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn fetch_invoice(token: &str, invoice_id: i64) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(&invoice_path(invoice_id)))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.binary().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, invoice_id);
        Err(ApiError::Unavailable)
    }
}

// ============================================================================
// AI assist endpoint
// ============================================================================

/// Ask the backend's assistant to draft event fields from a free-text
/// prompt via `POST /api/ai/generate-event`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or when the assistant
/// does not respond with a usable draft.
pub async fn generate_event(token: &str, prompt: &str) -> Result<GeneratedEvent, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "prompt": prompt });
        let resp = gloo_net::http::Request::post(&endpoint("/api/ai/generate-event"))
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if !resp.ok() {
            return Err(reject(resp).await);
        }
        resp.json().await.map_err(|e| network_error(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, prompt);
        Err(ApiError::Unavailable)
    }
}
