//! Bearer-token claim extraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues compact JWTs on login. The client never verifies
//! signatures (that is the server's job on every request); it only reads
//! the payload claims to decide what to render, so decoding here is a
//! base64 + JSON affair with no crypto dependency.
//!
//! DESIGN
//! ======
//! Claim spelling is configuration, not hardcoded lookups: the issuer's
//! outbound claim map determines whether the subject arrives as `nameid`
//! or as the long `nameidentifier` URI, and the role claim always uses
//! the long URI form. [`ClaimKeys`] captures the deployed spelling in one
//! place instead of scattering string literals across call sites.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::collections::BTreeSet;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::state::session::Identity;

/// Role claim key as serialized by the backend's token issuer.
pub const ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Subject (user id) claim key under the issuer's default outbound map.
pub const SUBJECT_CLAIM: &str = "nameid";

/// Subject claim key when the issuer leaves claim types unmapped.
pub const SUBJECT_CLAIM_LONG: &str =
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";

/// Payload keys identifying the email, role, and subject claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimKeys {
    pub email: String,
    pub roles: String,
    pub subject: String,
}

impl Default for ClaimKeys {
    fn default() -> Self {
        Self {
            email: "email".to_owned(),
            roles: ROLE_CLAIM.to_owned(),
            subject: SUBJECT_CLAIM.to_owned(),
        }
    }
}

/// Why a bearer token could not be turned into an [`Identity`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Not a three-part `header.payload.signature` string.
    #[error("token is not a compact three-part JWT")]
    NotCompact,
    /// The payload segment is not valid unpadded base64url.
    #[error("token payload is not valid base64url")]
    PayloadEncoding,
    /// The payload decodes, but not to a JSON object.
    #[error("token payload is not a JSON object")]
    PayloadShape,
    /// The payload carries no usable email claim.
    #[error("token payload has no email claim")]
    MissingEmail,
}

/// Extract an [`Identity`] from a compact JWT without verifying it.
///
/// The role claim may be a single string (one role) or an array; both
/// normalize to a set. A missing or malformed role claim yields the
/// empty set rather than an error, since role-less accounts are valid.
/// When the configured subject key is absent the long `nameidentifier`
/// URI is tried as well, covering issuers that skip the outbound claim
/// map.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token is structurally broken or
/// lacks an email claim under `keys.email`.
pub fn decode_identity(token: &str, keys: &ClaimKeys) -> Result<Identity, DecodeError> {
    let payload = payload_segment(token)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::PayloadEncoding)?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|_| DecodeError::PayloadShape)?;
    let claims = value.as_object().ok_or(DecodeError::PayloadShape)?;

    let email = claims
        .get(&keys.email)
        .and_then(serde_json::Value::as_str)
        .ok_or(DecodeError::MissingEmail)?
        .to_owned();
    let roles = normalize_roles(claims.get(&keys.roles));
    let subject = claims
        .get(&keys.subject)
        .or_else(|| claims.get(SUBJECT_CLAIM_LONG))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);

    Ok(Identity {
        email,
        roles,
        subject,
    })
}

/// Middle segment of a compact JWT, rejecting anything but exactly three
/// dot-separated parts.
fn payload_segment(token: &str) -> Result<&str, DecodeError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => Ok(payload),
        _ => Err(DecodeError::NotCompact),
    }
}

/// Collapse the issuer's single-role/role-list ambiguity into a set.
fn normalize_roles(claim: Option<&serde_json::Value>) -> BTreeSet<String> {
    match claim {
        Some(serde_json::Value::String(role)) => BTreeSet::from([role.clone()]),
        Some(serde_json::Value::Array(roles)) => roles
            .iter()
            .filter_map(serde_json::Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => BTreeSet::new(),
    }
}
