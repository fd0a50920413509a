use super::*;

#[test]
fn status_change_requires_a_status() {
    assert_eq!(status_change("Pending", "  ", "late"), Err("Choose a status."));
}

#[test]
fn unchanged_status_without_notes_is_rejected() {
    assert_eq!(status_change("Pending", "Pending", "   "), Err("Pick a different status or add notes."));
}

#[test]
fn status_change_trims_notes() {
    let update = status_change("Pending", "Cancelled", "  rider no-show ").unwrap();
    assert_eq!(update, BookingStatusUpdate { status: "Cancelled".into(), notes: "rider no-show".into() });

    let same_with_notes = status_change("Arrived", "Arrived", "waiting at gate").unwrap();
    assert_eq!(same_with_notes.status, "Arrived");
    assert_eq!(same_with_notes.notes, "waiting at gate");
}

#[test]
fn resolution_requires_notes() {
    assert_eq!(dispute_resolution(" \n "), Err("Enter resolution notes."));
    assert_eq!(
        dispute_resolution(" refunded 20 EGP ").unwrap(),
        DisputeResolution { resolution_notes: "refunded 20 EGP".into() }
    );
}

#[test]
fn table_fare_prefers_final_fare() {
    let mut booking = Booking { estimated_fare: 80.0, ..Booking::default() };
    assert_eq!(display_fare(&booking), 80.0);
    booking.final_fare = 92.5;
    assert_eq!(display_fare(&booking), 92.5);
}
