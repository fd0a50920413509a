use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::reactive::owner::Owner;
use wire::Booking;

use super::*;

fn booking(id: u64) -> Booking {
    Booking { booking_id: id, status: Some("Disputed".to_owned()), ..Booking::default() }
}

#[test]
fn overlay_is_not_rebuilt_by_banner_or_reload() {
    let owner = Owner::new();
    owner.set();

    let resource = RwSignal::new(PagedResource::<Booking>::new(10));
    let selected = selection(resource);
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let overlay = Memo::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        selected.get().map(|b| b.booking_id)
    });

    assert_eq!(overlay.get(), None);
    resource.update(|r| r.open_detail(booking(7)));
    assert_eq!(overlay.get(), Some(7));
    let opened = builds.load(Ordering::SeqCst);

    resource.update(|r| r.mutation_failed(&ApiError::Transport("offline".into()), "resolve dispute"));
    assert_eq!(overlay.get(), Some(7));
    resource.update(|r| {
        r.begin_fetch();
    });
    assert_eq!(overlay.get(), Some(7));
    resource.update(PagedResource::dismiss_error);
    assert_eq!(overlay.get(), Some(7));

    assert_eq!(builds.load(Ordering::SeqCst), opened);
}

#[test]
fn overlay_follows_selection_changes() {
    let owner = Owner::new();
    owner.set();

    let resource = RwSignal::new(PagedResource::<Booking>::new(10));
    let selected = selection(resource);

    resource.update(|r| r.open_detail(booking(3)));
    assert_eq!(selected.get().map(|b| b.booking_id), Some(3));
    resource.update(|r| r.open_detail(booking(4)));
    assert_eq!(selected.get().map(|b| b.booking_id), Some(4));
    resource.update(PagedResource::mutation_succeeded);
    assert_eq!(selected.get(), None);
}
