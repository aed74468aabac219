use super::*;

#[test]
fn creators_link_to_the_manage_page() {
    assert_eq!(event_href(true, 5), "/manage/event/5");
}

#[test]
fn attendees_link_to_the_detail_page() {
    assert_eq!(event_href(false, 5), "/event/5");
}

#[test]
fn empty_text_matches_the_viewer_role() {
    assert_eq!(empty_list_text(true), "You haven't created any events yet.");
    assert_eq!(empty_list_text(false), "No events are available right now.");
}
