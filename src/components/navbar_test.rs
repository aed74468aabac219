use super::*;

use std::collections::BTreeSet;

use crate::state::session::{Identity, ROLE_ATTENDEE, ROLE_CREATOR, SessionPhase};

fn session_with_role(role: &str) -> Session {
    Session {
        identity: Some(Identity {
            email: "user@example.com".to_owned(),
            roles: BTreeSet::from([role.to_owned()]),
            subject: Some("1".to_owned()),
        }),
        token: Some("token".to_owned()),
        phase: SessionPhase::Ready,
    }
}

#[test]
fn attendees_see_the_registrations_link() {
    assert!(registrations_link_visible(&session_with_role(ROLE_ATTENDEE)));
}

#[test]
fn creators_do_not_see_the_registrations_link() {
    assert!(!registrations_link_visible(&session_with_role(ROLE_CREATOR)));
}

#[test]
fn anonymous_sessions_have_no_registrations_link() {
    assert!(!registrations_link_visible(&Session::default()));
}

#[test]
fn email_labels_the_signed_in_user() {
    assert_eq!(
        signed_in_email(&session_with_role(ROLE_ATTENDEE)).as_deref(),
        Some("user@example.com")
    );
    assert_eq!(signed_in_email(&Session::default()), None);
}
