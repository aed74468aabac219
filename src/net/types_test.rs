use super::*;

// ============================================================================
// Events
// ============================================================================

#[test]
fn event_deserializes_backend_camel_case() {
    let json = r#"{
        "id": 3,
        "name": "RustConf",
        "date": "2026-09-01T09:00:00",
        "location": "Montreal",
        "price": 199.0,
        "userId": "42"
    }"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.id, 3);
    assert_eq!(event.name, "RustConf");
    assert_eq!(event.user_id.as_deref(), Some("42"));
}

#[test]
fn browse_event_omits_creator_id() {
    let json = r#"{"id":1,"name":"Meetup","date":"2026-10-01","location":"Oslo","price":0.0}"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.user_id, None);
}

#[test]
fn event_input_serializes_flat_camel_case() {
    let input = EventInput {
        name: "Workshop".to_owned(),
        date: "2026-11-05".to_owned(),
        location: "Berlin".to_owned(),
        price: 49.5,
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Workshop",
            "date": "2026-11-05",
            "location": "Berlin",
            "price": 49.5,
        })
    );
}

// ============================================================================
// Registrations
// ============================================================================

#[test]
fn registrant_tolerates_missing_event_id_and_invoice() {
    let json = r#"{"id":5,"name":"Dana","email":"dana@example.com"}"#;
    let registrant: Registrant = serde_json::from_str(json).unwrap();
    assert_eq!(registrant.event_id, None);
    assert_eq!(registrant.invoice, None);
}

#[test]
fn paid_registrant_carries_invoice_reference() {
    let json = r#"{"id":5,"name":"Dana","email":"dana@example.com","eventId":3,"invoice":{"id":12}}"#;
    let registrant: Registrant = serde_json::from_str(json).unwrap();
    assert_eq!(registrant.event_id, Some(3));
    assert_eq!(registrant.invoice, Some(InvoiceRef { id: 12 }));
}

#[test]
fn registration_carries_nested_event_summary() {
    let json = r#"{
        "id": 9,
        "name": "Dana",
        "email": "dana@example.com",
        "event": {"name": "RustConf", "date": "2026-09-01T09:00:00", "location": "Montreal"},
        "invoice": {"id": 31}
    }"#;
    let registration: Registration = serde_json::from_str(json).unwrap();
    assert_eq!(registration.event.name, "RustConf");
    assert_eq!(registration.invoice, Some(InvoiceRef { id: 31 }));
}

#[test]
fn free_registration_has_no_invoice() {
    let json = r#"{
        "id": 9,
        "name": "Dana",
        "email": "dana@example.com",
        "event": {"name": "Meetup", "date": "2026-10-01", "location": "Oslo"}
    }"#;
    let registration: Registration = serde_json::from_str(json).unwrap();
    assert_eq!(registration.invoice, None);
}

// ============================================================================
// Auth and AI payloads
// ============================================================================

#[test]
fn login_response_reads_access_token() {
    let json = r#"{"accessToken":"header.payload.sig"}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.access_token, "header.payload.sig");
}

#[test]
fn generated_event_fills_only_known_fields() {
    let json = r#"{"name":"Tech Expo","price":25.0}"#;
    let generated: GeneratedEvent = serde_json::from_str(json).unwrap();
    assert_eq!(generated.name.as_deref(), Some("Tech Expo"));
    assert_eq!(generated.price, Some(25.0));
    assert_eq!(generated.date, None);
    assert_eq!(generated.location, None);
}

#[test]
fn generated_event_tolerates_empty_object() {
    let generated: GeneratedEvent = serde_json::from_str("{}").unwrap();
    assert_eq!(generated, GeneratedEvent::default());
}
