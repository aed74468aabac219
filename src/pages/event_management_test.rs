use super::*;

// ============================================================================
// Failure text
// ============================================================================

#[test]
fn http_failures_read_as_permission_problem() {
    let bare = ApiError::Http {
        status: 404,
        message: "HTTP status 404".to_owned(),
    };
    let spoken = ApiError::Http {
        status: 403,
        message: "forbidden".to_owned(),
    };
    assert_eq!(
        manage_failure_text(&bare),
        "Event not found or you do not have permission."
    );
    assert_eq!(
        manage_failure_text(&spoken),
        "Event not found or you do not have permission."
    );
}

#[test]
fn manage_transport_errors_keep_their_text() {
    let err = ApiError::Network("timed out".to_owned());
    assert_eq!(manage_failure_text(&err), "network error: timed out");
}

// ============================================================================
// Headings
// ============================================================================

#[test]
fn roster_heading_counts_attendees() {
    assert_eq!(attendees_heading(0), "Attendees (0)");
    assert_eq!(attendees_heading(3), "Attendees (3)");
}
