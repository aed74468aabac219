use super::*;

// ============================================================================
// URL construction
// ============================================================================

#[test]
fn join_base_is_same_origin_by_default() {
    assert_eq!(join_base(None, "/api/events"), "/api/events");
}

#[test]
fn join_base_prefixes_configured_origin() {
    assert_eq!(
        join_base(Some("https://api.eventra.example"), "/api/events"),
        "https://api.eventra.example/api/events"
    );
}

#[test]
fn join_base_trims_trailing_slash_on_origin() {
    assert_eq!(
        join_base(Some("https://api.eventra.example/"), "/api/events"),
        "https://api.eventra.example/api/events"
    );
}

#[test]
fn creator_and_attendee_list_different_endpoints() {
    assert_eq!(events_list_path(true), "/api/events");
    assert_eq!(events_list_path(false), "/api/browse/events");
}

#[test]
fn detail_paths_embed_the_event_id() {
    assert_eq!(event_path(12), "/api/events/12");
    assert_eq!(browse_event_path(12), "/api/browse/events/12");
}

#[test]
fn registrants_path_uses_query_parameter() {
    assert_eq!(registrants_path(7), "/api/registrants?eventId=7");
}

#[test]
fn invoice_path_embeds_the_invoice_id() {
    assert_eq!(invoice_path(31), "/api/invoice/31");
}

// ============================================================================
// Headers
// ============================================================================

#[test]
fn bearer_header_prefixes_the_token() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

// ============================================================================
// Error mapping
// ============================================================================

#[test]
fn http_error_prefers_backend_message_field() {
    let err = http_error(401, r#"{"message":"Invalid email or password."}"#);
    assert_eq!(
        err,
        ApiError::Http {
            status: 401,
            message: "Invalid email or password.".to_owned(),
        }
    );
}

#[test]
fn http_error_falls_back_to_raw_body_text() {
    let err = http_error(409, "You are already registered.");
    assert_eq!(
        err,
        ApiError::Http {
            status: 409,
            message: "You are already registered.".to_owned(),
        }
    );
}

#[test]
fn http_error_falls_back_to_status_line_for_empty_body() {
    let err = http_error(500, "  ");
    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: "HTTP status 500".to_owned(),
        }
    );
}

#[test]
fn http_error_ignores_json_without_message_field() {
    let err = http_error(422, r#"{"detail":"nope"}"#);
    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            message: r#"{"detail":"nope"}"#.to_owned(),
        }
    );
}

#[test]
fn api_error_display_reads_like_a_notification() {
    let http = ApiError::Http {
        status: 404,
        message: "Event not found.".to_owned(),
    };
    assert_eq!(http.to_string(), "Event not found.");
    assert_eq!(
        ApiError::Network("timed out".to_owned()).to_string(),
        "network error: timed out"
    );
}

// ============================================================================
// Server stubs
// ============================================================================

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        // Stub endpoints resolve immediately; a single poll suffices.
        let mut fut = std::pin::pin!(fut);
        let waker = std::task::Waker::noop();
        let mut cx = std::task::Context::from_waker(waker);
        match fut.as_mut().poll(&mut cx) {
            std::task::Poll::Ready(out) => out,
            std::task::Poll::Pending => unreachable!("stub future never pends"),
        }
    }

    #[test]
    fn endpoints_are_unavailable_on_the_server() {
        assert_eq!(
            block_on(login("a@b.c", "pw")),
            Err(ApiError::Unavailable)
        );
        assert_eq!(block_on(fetch_events("t", true)), Err(ApiError::Unavailable));
        assert_eq!(
            block_on(fetch_my_registrations("t")),
            Err(ApiError::Unavailable)
        );
        assert_eq!(block_on(fetch_invoice("t", 1)), Err(ApiError::Unavailable));
    }
}
