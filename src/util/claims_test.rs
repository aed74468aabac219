use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

// ============================================================================
// Helpers
// ============================================================================

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

fn decode(payload: &serde_json::Value) -> Result<Identity, DecodeError> {
    decode_identity(&token_with(payload), &ClaimKeys::default())
}

// ============================================================================
// Claim key configuration
// ============================================================================

#[test]
fn default_keys_use_short_subject_and_long_role_uri() {
    let keys = ClaimKeys::default();
    assert_eq!(keys.email, "email");
    assert_eq!(keys.roles, ROLE_CLAIM);
    assert_eq!(keys.subject, SUBJECT_CLAIM);
    assert!(ROLE_CLAIM.ends_with("/claims/role"));
    assert!(SUBJECT_CLAIM_LONG.ends_with("/claims/nameidentifier"));
}

#[test]
fn custom_keys_override_lookups() {
    let keys = ClaimKeys {
        email: "upn".to_owned(),
        roles: "groups".to_owned(),
        subject: SUBJECT_CLAIM_LONG.to_owned(),
    };
    let payload = serde_json::json!({
        "upn": "dana@example.com",
        "groups": ["Creator"],
        SUBJECT_CLAIM_LONG: "7",
    });
    let identity = decode_identity(&token_with(&payload), &keys).unwrap();
    assert_eq!(identity.email, "dana@example.com");
    assert!(identity.roles.contains("Creator"));
    assert_eq!(identity.subject.as_deref(), Some("7"));
}

// ============================================================================
// Successful decoding
// ============================================================================

#[test]
fn decodes_email_roles_and_subject() {
    let payload = serde_json::json!({
        "email": "amy@example.com",
        ROLE_CLAIM: ["Creator", "User"],
        SUBJECT_CLAIM: "42",
        "exp": 1_999_999_999u64,
    });
    let identity = decode(&payload).unwrap();
    assert_eq!(identity.email, "amy@example.com");
    assert_eq!(identity.roles.len(), 2);
    assert!(identity.roles.contains("Creator"));
    assert!(identity.roles.contains("User"));
    assert_eq!(identity.subject.as_deref(), Some("42"));
}

#[test]
fn single_role_string_becomes_singleton_set() {
    let payload = serde_json::json!({
        "email": "solo@example.com",
        ROLE_CLAIM: "User",
    });
    let identity = decode(&payload).unwrap();
    assert_eq!(identity.roles.len(), 1);
    assert!(identity.roles.contains("User"));
}

#[test]
fn missing_role_claim_yields_empty_set() {
    let payload = serde_json::json!({ "email": "norole@example.com" });
    let identity = decode(&payload).unwrap();
    assert!(identity.roles.is_empty());
}

#[test]
fn non_string_role_entries_are_skipped() {
    let payload = serde_json::json!({
        "email": "mixed@example.com",
        ROLE_CLAIM: ["Creator", 7, null],
    });
    let identity = decode(&payload).unwrap();
    assert_eq!(identity.roles.len(), 1);
    assert!(identity.roles.contains("Creator"));
}

#[test]
fn numeric_role_claim_yields_empty_set() {
    let payload = serde_json::json!({
        "email": "odd@example.com",
        ROLE_CLAIM: 12,
    });
    let identity = decode(&payload).unwrap();
    assert!(identity.roles.is_empty());
}

#[test]
fn missing_subject_claim_is_none() {
    let payload = serde_json::json!({ "email": "nosub@example.com" });
    let identity = decode(&payload).unwrap();
    assert_eq!(identity.subject, None);
}

#[test]
fn subject_falls_back_to_the_unmapped_uri() {
    let payload = serde_json::json!({
        "email": "long@example.com",
        SUBJECT_CLAIM_LONG: "19",
    });
    let identity = decode(&payload).unwrap();
    assert_eq!(identity.subject.as_deref(), Some("19"));
}

#[test]
fn configured_subject_key_wins_over_the_fallback() {
    let payload = serde_json::json!({
        "email": "both@example.com",
        SUBJECT_CLAIM: "short",
        SUBJECT_CLAIM_LONG: "long",
    });
    let identity = decode(&payload).unwrap();
    assert_eq!(identity.subject.as_deref(), Some("short"));
}

#[test]
fn unknown_claims_are_ignored() {
    let payload = serde_json::json!({
        "email": "extra@example.com",
        "iss": "eventra",
        "aud": "eventra-client",
        "jti": "abc",
    });
    assert!(decode(&payload).is_ok());
}

// ============================================================================
// Malformed tokens
// ============================================================================

#[test]
fn rejects_token_without_three_parts() {
    let keys = ClaimKeys::default();
    assert_eq!(
        decode_identity("justonepart", &keys),
        Err(DecodeError::NotCompact)
    );
    assert_eq!(decode_identity("a.b", &keys), Err(DecodeError::NotCompact));
    assert_eq!(
        decode_identity("a.b.c.d", &keys),
        Err(DecodeError::NotCompact)
    );
    assert_eq!(decode_identity("", &keys), Err(DecodeError::NotCompact));
}

#[test]
fn rejects_payload_that_is_not_base64url() {
    let keys = ClaimKeys::default();
    assert_eq!(
        decode_identity("aGVhZGVy.!!!not-base64!!!.c2ln", &keys),
        Err(DecodeError::PayloadEncoding)
    );
}

#[test]
fn rejects_payload_with_standard_base64_padding() {
    // Padded segments are not valid in the unpadded base64url alphabet.
    let padded = base64::engine::general_purpose::STANDARD.encode(r#"{"email":"x@y.z"}"#);
    assert!(padded.ends_with('='));
    let token = format!("h.{padded}.s");
    assert_eq!(
        decode_identity(&token, &ClaimKeys::default()),
        Err(DecodeError::PayloadEncoding)
    );
}

#[test]
fn rejects_payload_that_is_not_json() {
    let body = URL_SAFE_NO_PAD.encode("this is not json");
    let token = format!("h.{body}.s");
    assert_eq!(
        decode_identity(&token, &ClaimKeys::default()),
        Err(DecodeError::PayloadShape)
    );
}

#[test]
fn rejects_payload_that_is_not_an_object() {
    let body = URL_SAFE_NO_PAD.encode(r#"["not","an","object"]"#);
    let token = format!("h.{body}.s");
    assert_eq!(
        decode_identity(&token, &ClaimKeys::default()),
        Err(DecodeError::PayloadShape)
    );
}

#[test]
fn rejects_payload_without_email_claim() {
    let payload = serde_json::json!({ ROLE_CLAIM: "User", SUBJECT_CLAIM: "1" });
    assert_eq!(decode(&payload), Err(DecodeError::MissingEmail));
}

#[test]
fn rejects_non_string_email_claim() {
    let payload = serde_json::json!({ "email": 42 });
    assert_eq!(decode(&payload), Err(DecodeError::MissingEmail));
}
