use super::*;

#[test]
fn verbs_cover_every_user_status() {
    let verbs: Vec<&str> = USER_STATUSES.iter().map(|o| status_verb(o.value)).collect();
    assert_eq!(verbs, vec!["Activate", "Deactivate", "Block"]);
    assert_eq!(status_verb("Unknown"), "Set status");
}

#[test]
fn current_status_is_marked() {
    let buttons = status_buttons("Blocked");
    assert_eq!(buttons.len(), 3);
    let marked: Vec<&str> = buttons.iter().filter(|(_, current)| *current).map(|(o, _)| o.value).collect();
    assert_eq!(marked, vec!["Blocked"]);
}

#[test]
fn unknown_status_marks_nothing() {
    assert!(status_buttons("").iter().all(|(_, current)| !current));
}

#[test]
fn history_pages_the_riders_own_bookings() {
    let mut history = history_for(12);
    assert_eq!(history.path(), "/api/users/12/bookings");
    let ticket = history.begin_fetch();
    assert_eq!(ticket.query.per_page, HISTORY_PER_PAGE);
    assert_eq!(ticket.query.to_path(&ticket.path), "/api/users/12/bookings?page=1&per_page=5");
    assert_eq!(PagedResource::<Booking>::empty_message(), "No bookings found");
}
