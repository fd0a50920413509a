//! Rider accounts: booking statistics, account status and booking history.
//!
//! The overlay owns a second `PagedResource<Booking>` pointed at the rider's
//! own history endpoint, so it pages independently of the user table.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use wire::{AppUser, BOOKING_STATUSES, Booking, StatusOption, StatusUpdate, USER_STATUSES, endpoints, status_label};

use crate::components::listing::{DetailField, EmptyRow, ErrorBanner, ListFilters, Modal, Pagination, TableHead};
use crate::components::status_badge::StatusBadge;
use crate::config::ConsoleConfig;
use crate::net::api::ApiContext;
use crate::pages::bookings::display_fare;
use crate::net::listing::{mutate, refresh, selection};
use crate::state::paged::PagedResource;
use crate::util::format::{booking_tone, count, egp, or_dash, timestamp, user_tone};

const COLUMNS: &[&str] = &["Name", "Email", "Phone", "Bookings", "Total Spent", "Status", "Actions"];
const HISTORY_COLUMNS: &[&str] = &["ID", "Captain", "Service", "Fare", "Status", "Booked at"];
/// Rows per page in the overlay's booking history.
const HISTORY_PER_PAGE: u64 = 5;

/// Booking history listing for one rider.
fn history_for(user_id: u64) -> PagedResource<Booking> {
    PagedResource::new(HISTORY_PER_PAGE).with_path(endpoints::user_bookings(user_id))
}

/// Button label for moving a user into `target`.
fn status_verb(target: &str) -> &'static str {
    match target {
        "Active" => "Activate",
        "Deactivated" => "Deactivate",
        "Blocked" => "Block",
        _ => "Set status",
    }
}

/// Every status button; the current one is marked and disabled.
fn status_buttons(current: &str) -> Vec<(&'static StatusOption, bool)> {
    USER_STATUSES.iter().map(|o| (o, o.value == current)).collect()
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiContext>());
    let config = expect_context::<ConsoleConfig>();
    let users = RwSignal::new(PagedResource::<AppUser>::new(config.per_page));

    let reload = Callback::new(move |()| refresh(api.get_value(), users));
    Effect::new(move || reload.run(()));

    let set_status = move |id: u64, status: &'static str| {
        mutate(api.get_value(), users, "update user status", move |api| async move {
            api.put(&endpoints::user_status(id), &StatusUpdate { status: status.to_owned() }).await
        });
    };

    let rows = move || {
        let items = users.with(|r| r.items.clone());
        if items.is_empty() {
            return view! { <EmptyRow columns=COLUMNS.len() message={PagedResource::<AppUser>::empty_message()}/> }
                .into_any();
        }
        items
            .into_iter()
            .map(|user| {
                let status = user.status.clone().unwrap_or_default();
                let selected = user.clone();
                view! {
                    <tr>
                        <td class="table__strong">{or_dash(user.name.as_deref())}</td>
                        <td>{or_dash(user.email.as_deref())}</td>
                        <td>{or_dash(user.phone_number.as_deref())}</td>
                        <td>{count(user.statistics.total_bookings)}</td>
                        <td>{egp(user.statistics.total_spent)}</td>
                        <td>
                            <StatusBadge label=status_label(USER_STATUSES, &status).to_owned() tone=user_tone(&status)/>
                        </td>
                        <td>
                            <button
                                class="btn btn--link"
                                on:click=move |_| users.update(|r| r.open_detail(selected.clone()))
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

    let selected = selection(users);
    let detail = move || {
        selected.get().map(|user| {
            let id = user.user_id;
            let status = user.status.clone().unwrap_or_default();
            let stats = user.statistics.clone();
            view! {
                <Modal
                    title=or_dash(user.name.as_deref())
                    on_close=Callback::new(move |()| users.update(PagedResource::close_detail))
                >
                    <div class="detail-grid">
                        <DetailField label="Email" value=or_dash(user.email.as_deref())/>
                        <DetailField label="Phone" value=or_dash(user.phone_number.as_deref())/>
                        <DetailField label="Joined" value=timestamp(user.created_at.as_deref())/>
                        <div class="detail-field">
                            <p class="detail-field__label">"Status"</p>
                            <StatusBadge label=status_label(USER_STATUSES, &status).to_owned() tone=user_tone(&status)/>
                        </div>
                    </div>
                    <section class="detail-section">
                        <h3>"Statistics"</h3>
                        <div class="detail-grid">
                            <DetailField label="Total Bookings" value=count(stats.total_bookings)/>
                            <DetailField label="Completed" value=count(stats.completed_bookings)/>
                            <DetailField label="Total Spent" value=egp(stats.total_spent)/>
                        </div>
                    </section>
                    <ErrorBanner
                        message=Signal::derive(move || users.with(|r| r.error.clone()))
                        on_dismiss=Callback::new(move |()| users.update(PagedResource::dismiss_error))
                    />
                    <div class="dialog__actions">
                        {status_buttons(&status)
                            .into_iter()
                            .map(|(option, current)| {
                                let target = option.value;
                                view! {
                                    <button
                                        class="btn"
                                        class:btn--current=current
                                        disabled=current
                                        on:click=move |_| set_status(id, target)
                                    >
                                        {status_verb(target)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <BookingHistory user_id=id api=api/>
                </Modal>
            }
        })
    };

    view! {
        <div class="list-page">
            <ListFilters
                resource=users
                options=USER_STATUSES
                placeholder="Search by name, email or phone"
                on_change=reload
            />
            <Show when=move || users.with(|r| r.selected.is_none())>
                <ErrorBanner
                    message=Signal::derive(move || users.with(|r| r.error.clone()))
                    on_dismiss=Callback::new(move |()| users.update(PagedResource::dismiss_error))
                />
            </Show>
            <div class="table-wrap" class:table-wrap--loading=move || users.with(|r| r.loading)>
                <table class="table">
                    <TableHead columns=COLUMNS/>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <Pagination resource=users on_change=reload/>
            {detail}
        </div>
    }
}

/// Paged list of the rider's bookings inside the user overlay.
#[component]
fn BookingHistory(user_id: u64, api: StoredValue<ApiContext>) -> impl IntoView {
    let history = RwSignal::new(history_for(user_id));
    let reload = Callback::new(move |()| refresh(api.get_value(), history));
    Effect::new(move || reload.run(()));

    let rows = move || {
        let items = history.with(|r| r.items.clone());
        if items.is_empty() {
            return view! { <EmptyRow columns=HISTORY_COLUMNS.len() message={PagedResource::<Booking>::empty_message()}/> }
                .into_any();
        }
        items
            .into_iter()
            .map(|b| {
                let status = b.status.clone().unwrap_or_default();
                let fare = display_fare(&b);
                view! {
                    <tr>
                        <td class="table__strong">{format!("#{}", b.booking_id)}</td>
                        <td>{or_dash(b.captain_name.as_deref())}</td>
                        <td>{or_dash(b.service_type.as_deref())}</td>
                        <td>{egp(fare)}</td>
                        <td>
                            <StatusBadge label=status_label(BOOKING_STATUSES, &status).to_owned() tone=booking_tone(&status)/>
                        </td>
                        <td>{timestamp(b.booking_time.as_deref())}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="detail-section">
            <h3>"Booking History"</h3>
            <ErrorBanner
                message=Signal::derive(move || history.with(|r| r.error.clone()))
                on_dismiss=Callback::new(move |()| history.update(PagedResource::dismiss_error))
            />
            <div class="table-wrap" class:table-wrap--loading=move || history.with(|r| r.loading)>
                <table class="table table--compact">
                    <TableHead columns=HISTORY_COLUMNS/>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <Pagination resource=history on_change=reload/>
        </section>
    }
}
