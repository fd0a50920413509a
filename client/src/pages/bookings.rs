//! Booking management: trip details, status changes and dispute resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay carries two forms. The status form sends the chosen status
//! with optional notes; the resolution form only appears for disputed
//! bookings and requires notes. Input problems are shown in the overlay
//! without touching the listing's own error.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use leptos::prelude::*;
use wire::{BOOKING_STATUSES, Booking, BookingStatusUpdate, DisputeResolution, endpoints, status_label};

use crate::components::listing::{DetailField, EmptyRow, ErrorBanner, ListFilters, Modal, Pagination, TableHead};
use crate::components::status_badge::StatusBadge;
use crate::config::ConsoleConfig;
use crate::net::api::ApiContext;
use crate::net::listing::{mutate, refresh, selection};
use crate::state::paged::PagedResource;
use crate::util::format::{booking_tone, egp, or_dash, timestamp};

const COLUMNS: &[&str] = &["ID", "Rider", "Captain", "Service", "Fare", "Status", "Booked at", "Actions"];

/// Build a status change; unchanged status needs notes to be worth sending.
fn status_change(current: &str, selected: &str, notes: &str) -> Result<BookingStatusUpdate, &'static str> {
    let selected = selected.trim();
    if selected.is_empty() {
        return Err("Choose a status.");
    }
    let notes = notes.trim();
    if selected == current && notes.is_empty() {
        return Err("Pick a different status or add notes.");
    }
    Ok(BookingStatusUpdate { status: selected.to_owned(), notes: notes.to_owned() })
}

fn dispute_resolution(notes: &str) -> Result<DisputeResolution, &'static str> {
    let notes = notes.trim();
    if notes.is_empty() {
        return Err("Enter resolution notes.");
    }
    Ok(DisputeResolution { resolution_notes: notes.to_owned() })
}

/// Fare shown in the table: final when settled, otherwise the estimate.
pub(crate) fn display_fare(booking: &Booking) -> f64 {
    if booking.final_fare > 0.0 { booking.final_fare } else { booking.estimated_fare }
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiContext>());
    let config = expect_context::<ConsoleConfig>();
    let bookings = RwSignal::new(PagedResource::<Booking>::new(config.per_page));

    let reload = Callback::new(move |()| refresh(api.get_value(), bookings));
    Effect::new(move || reload.run(()));

    let rows = move || {
        let items = bookings.with(|r| r.items.clone());
        if items.is_empty() {
            return view! { <EmptyRow columns=COLUMNS.len() message={PagedResource::<Booking>::empty_message()}/> }
                .into_any();
        }
        items
            .into_iter()
            .map(|booking| {
                let status = booking.status.clone().unwrap_or_default();
                let fare = display_fare(&booking);
                let selected = booking.clone();
                view! {
                    <tr>
                        <td class="table__strong">{format!("#{}", booking.booking_id)}</td>
                        <td>{or_dash(booking.user_name.as_deref())}</td>
                        <td>{or_dash(booking.captain_name.as_deref())}</td>
                        <td>{or_dash(booking.service_type.as_deref())}</td>
                        <td>{egp(fare)}</td>
                        <td>
                            <StatusBadge label=status_label(BOOKING_STATUSES, &status).to_owned() tone=booking_tone(&status)/>
                        </td>
                        <td>{timestamp(booking.booking_time.as_deref())}</td>
                        <td>
                            <button
                                class="btn btn--link"
                                on:click=move |_| bookings.update(|r| r.open_detail(selected.clone()))
                            >
                                "View"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let selected = selection(bookings);
    let detail = move || {
        selected
            .get()
            .map(|booking| view! { <BookingDetail booking=booking bookings=bookings api=api/> })
    };

    view! {
        <div class="list-page">
            <ListFilters
                resource=bookings
                options=BOOKING_STATUSES
                placeholder="Search by rider, captain or address"
                on_change=reload
            />
            <Show when=move || bookings.with(|r| r.selected.is_none())>
                <ErrorBanner
                    message=Signal::derive(move || bookings.with(|r| r.error.clone()))
                    on_dismiss=Callback::new(move |()| bookings.update(PagedResource::dismiss_error))
                />
            </Show>
            <div class="table-wrap" class:table-wrap--loading=move || bookings.with(|r| r.loading)>
                <table class="table">
                    <TableHead columns=COLUMNS/>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <Pagination resource=bookings on_change=reload/>
            {detail}
        </div>
    }
}

#[component]
fn BookingDetail(
    booking: Booking,
    bookings: RwSignal<PagedResource<Booking>>,
    api: StoredValue<ApiContext>,
) -> impl IntoView {
    let id = booking.booking_id;
    let current = booking.status.clone().unwrap_or_default();
    let disputed = current == "Disputed";

    let selected_status = RwSignal::new(current.clone());
    let notes = RwSignal::new(String::new());
    let resolution = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let current_for_submit = current.clone();
    let on_status = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match status_change(&current_for_submit, &selected_status.get(), &notes.get()) {
            Ok(update) => {
                form_error.set(None);
                mutate(api.get_value(), bookings, "update booking status", move |api| async move {
                    api.put(&endpoints::booking_status(id), &update).await
                });
            }
            Err(message) => form_error.set(Some(message.to_owned())),
        }
    };

    let on_resolve = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match dispute_resolution(&resolution.get()) {
            Ok(body) => {
                form_error.set(None);
                mutate(api.get_value(), bookings, "resolve dispute", move |api| async move {
                    api.post(&endpoints::booking_resolve(id), &body).await
                });
            }
            Err(message) => form_error.set(Some(message.to_owned())),
        }
    };

    view! {
        <Modal
            title=format!("Booking #{id}")
            on_close=Callback::new(move |()| bookings.update(PagedResource::close_detail))
        >
            <div class="detail-grid">
                <DetailField label="Rider" value=or_dash(booking.user_name.as_deref())/>
                <DetailField label="Captain" value=or_dash(booking.captain_name.as_deref())/>
                <DetailField label="Service" value=or_dash(booking.service_type.as_deref())/>
                <div class="detail-field">
                    <p class="detail-field__label">"Status"</p>
                    <StatusBadge label=status_label(BOOKING_STATUSES, &current).to_owned() tone=booking_tone(&current)/>
                </div>
                <DetailField label="Pickup" value=or_dash(booking.pickup_address.as_deref())/>
                <DetailField label="Drop-off" value=or_dash(booking.dropoff_address.as_deref())/>
                <DetailField label="Distance" value=format!("{:.1} km", booking.distance_km)/>
                <DetailField label="Booked at" value=timestamp(booking.booking_time.as_deref())/>
            </div>
            <section class="detail-section">
                <h3>"Fare"</h3>
                <div class="detail-grid">
                    <DetailField label="Estimated" value=egp(booking.estimated_fare)/>
                    <DetailField label="Final" value=egp(booking.final_fare)/>
                    <DetailField label="Commission" value=egp(booking.app_commission)/>
                    <DetailField label="Captain Earning" value=egp(booking.captain_earning)/>
                    <DetailField label="Payment Method" value=or_dash(booking.payment_method.as_deref())/>
                </div>
            </section>
            <DetailField label="Notes" value=or_dash(booking.notes.as_deref())/>
            <ErrorBanner
                message=Signal::derive(move || form_error.get().or_else(|| bookings.with(|r| r.error.clone())))
                on_dismiss=Callback::new(move |()| {
                    form_error.set(None);
                    bookings.update(PagedResource::dismiss_error);
                })
            />
            <form class="detail-form" on:submit=on_status>
                <h3>"Update Status"</h3>
                <select
                    class="detail-form__select"
                    prop:value=move || selected_status.get()
                    on:change=move |ev| selected_status.set(event_target_value(&ev))
                >
                    {BOOKING_STATUSES
                        .iter()
                        .map(|o| view! { <option value=o.value>{o.label}</option> })
                        .collect_view()}
                </select>
                <textarea
                    class="detail-form__notes"
                    placeholder="Notes (optional)"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Update Status"
                </button>
            </form>
            <Show when=move || disputed>
                <form class="detail-form" on:submit=on_resolve>
                    <h3>"Resolve Dispute"</h3>
                    <textarea
                        class="detail-form__notes"
                        placeholder="Resolution notes"
                        prop:value=move || resolution.get()
                        on:input=move |ev| resolution.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--caution" type="submit">
                        "Resolve Dispute"
                    </button>
                </form>
            </Show>
        </Modal>
    }
}
