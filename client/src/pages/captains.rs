//! Captain management: vetting queue and driver status control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pending captains are approved or rejected; everyone else can be moved
//! between Active, On Hold and Deactivated. Every action reloads the listing
//! on success and keeps the overlay open on failure.
//!
//! The overlay also carries the captain's per-service rate table. Rates are
//! fetched when the overlay opens and saved one service at a time; saving
//! leaves the overlay open and refreshes only the rate table.

#[cfg(test)]
#[path = "captains_test.rs"]
mod captains_test;

use leptos::prelude::*;
use wire::endpoints::{self, CaptainAction};
use wire::{CAPTAIN_STATUSES, Captain, CaptainRate, RateUpdate, SERVICE_TYPES, StatusUpdate, status_label};

use crate::components::listing::{DetailField, EmptyRow, ErrorBanner, ListFilters, Modal, Pagination, TableHead};
use crate::components::status_badge::StatusBadge;
use crate::config::ConsoleConfig;
use crate::net::api::ApiContext;
use crate::net::listing::{mutate, refresh, selection};
use crate::state::paged::PagedResource;
use crate::util::format::{captain_tone, egp, or_dash, rating};

const COLUMNS: &[&str] = &["Name", "Email", "Phone", "Vehicle", "Rating", "Status", "Actions"];
const RATE_COLUMNS: &[&str] = &["Service", "Per km", "Minimum Fare", "Waiting / min"];

/// An action offered in the captain overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CaptainCommand {
    Review(CaptainAction),
    SetStatus { status: &'static str, label: &'static str },
}

impl CaptainCommand {
    fn label(self) -> &'static str {
        match self {
            Self::Review(CaptainAction::Approve) => "Approve",
            Self::Review(CaptainAction::Reject) => "Reject",
            Self::SetStatus { label, .. } => label,
        }
    }

    fn action_name(self) -> &'static str {
        match self {
            Self::Review(CaptainAction::Approve) => "approve captain",
            Self::Review(CaptainAction::Reject) => "reject captain",
            Self::SetStatus { .. } => "update captain status",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Review(CaptainAction::Approve) | Self::SetStatus { status: "Active", .. } => "btn btn--positive",
            Self::Review(CaptainAction::Reject) | Self::SetStatus { status: "Deactivated", .. } => "btn btn--negative",
            Self::SetStatus { .. } => "btn btn--caution",
        }
    }
}

/// Actions available for a captain in `status`.
fn commands_for(status: &str) -> Vec<CaptainCommand> {
    if status == "Pending" {
        return vec![
            CaptainCommand::Review(CaptainAction::Approve),
            CaptainCommand::Review(CaptainAction::Reject),
        ];
    }
    [
        ("Active", "Activate"),
        ("OnHold", "Put on Hold"),
        ("Deactivated", "Deactivate"),
    ]
    .into_iter()
    .filter(|(value, _)| *value != status)
    .map(|(status, label)| CaptainCommand::SetStatus { status, label })
    .collect()
}

/// Vehicle summary line, e.g. `Toyota Corolla · White · ABC 123`.
fn vehicle_summary(captain: &Captain) -> Option<String> {
    let model = captain.vehicle_model.as_deref().map(str::trim).filter(|m| !m.is_empty())?;
    let parts: Vec<&str> = [Some(model), captain.vehicle_color.as_deref(), captain.plate_number.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    Some(parts.join(" · "))
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// Build a rate upsert from the form fields.
fn rate_update(service: &str, per_km: &str, minimum: &str, waiting: &str) -> Result<RateUpdate, &'static str> {
    if !SERVICE_TYPES.iter().any(|o| o.value == service) {
        return Err("Choose a service.");
    }
    let (Some(rate_per_km), Some(minimum_fare), Some(waiting_time_rate)) =
        (parse_amount(per_km), parse_amount(minimum), parse_amount(waiting))
    else {
        return Err("Rates must be non-negative numbers.");
    };
    Ok(RateUpdate { service_type: service.to_owned(), rate_per_km, minimum_fare, waiting_time_rate })
}

/// Form values for `service`: the saved rate if there is one, else blank.
fn rate_draft(rates: &[CaptainRate], service: &str) -> [String; 3] {
    rates
        .iter()
        .find(|r| r.service_type.as_deref() == Some(service))
        .map_or_else(Default::default, |r| {
            [r.rate_per_km.to_string(), r.minimum_fare.to_string(), r.waiting_time_rate.to_string()]
        })
}

#[component]
pub fn CaptainsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiContext>());
    let config = expect_context::<ConsoleConfig>();
    let captains = RwSignal::new(PagedResource::<Captain>::new(config.per_page));

    let reload = Callback::new(move |()| refresh(api.get_value(), captains));
    Effect::new(move || reload.run(()));

    let run = move |id: u64, command: CaptainCommand| {
        mutate(api.get_value(), captains, command.action_name(), move |api| async move {
            match command {
                CaptainCommand::Review(action) => {
                    api.post(&endpoints::captain_action(id, action), &serde_json::json!({})).await
                }
                CaptainCommand::SetStatus { status, .. } => {
                    api.put(&endpoints::captain_status(id), &StatusUpdate { status: status.to_owned() })
                        .await
                }
            }
        });
    };

    let rows = move || {
        let items = captains.with(|r| r.items.clone());
        if items.is_empty() {
            return view! { <EmptyRow columns=COLUMNS.len() message={PagedResource::<Captain>::empty_message()}/> }
                .into_any();
        }
        items
            .into_iter()
            .map(|captain| {
                let status = captain.status.clone().unwrap_or_default();
                let selected = captain.clone();
                view! {
                    <tr>
                        <td class="table__strong">{or_dash(captain.name.as_deref())}</td>
                        <td>{or_dash(captain.email.as_deref())}</td>
                        <td>{or_dash(captain.phone_number.as_deref())}</td>
                        <td>{or_dash(captain.vehicle_type.as_deref())}</td>
                        <td>{format!("★ {}", rating(captain.rating))}</td>
                        <td>
                            <StatusBadge label=status_label(CAPTAIN_STATUSES, &status).to_owned() tone=captain_tone(&status)/>
                        </td>
                        <td>
                            <button
                                class="btn btn--link"
                                on:click=move |_| captains.update(|r| r.open_detail(selected.clone()))
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

    let selected = selection(captains);
    let detail = move || {
        selected.get().map(|captain| {
            let id = captain.captain_id;
            let status = captain.status.clone().unwrap_or_default();
            let title = or_dash(captain.name.as_deref());
            let vehicle = vehicle_summary(&captain);
            let commands = commands_for(&status);
            view! {
                <Modal title=title on_close=Callback::new(move |()| captains.update(PagedResource::close_detail))>
                    <div class="detail-grid">
                        <DetailField label="Email" value=or_dash(captain.email.as_deref())/>
                        <DetailField label="Phone" value=or_dash(captain.phone_number.as_deref())/>
                        <DetailField label="Vehicle Type" value=or_dash(captain.vehicle_type.as_deref())/>
                        <div class="detail-field">
                            <p class="detail-field__label">"Status"</p>
                            <StatusBadge label=status_label(CAPTAIN_STATUSES, &status).to_owned() tone=captain_tone(&status)/>
                        </div>
                    </div>
                    {vehicle.map(|summary| {
                        view! {
                            <section class="detail-section">
                                <h3>"Vehicle Information"</h3>
                                <p>{summary}</p>
                            </section>
                        }
                    })}
                    <ErrorBanner
                        message=Signal::derive(move || captains.with(|r| r.error.clone()))
                        on_dismiss=Callback::new(move |()| captains.update(PagedResource::dismiss_error))
                    />
                    <div class="dialog__actions">
                        {commands
                            .into_iter()
                            .map(|command| {
                                view! {
                                    <button class=command.class() on:click=move |_| run(id, command)>
                                        {command.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <CaptainRates captain_id=id api=api/>
                </Modal>
            }
        })
    };

    view! {
        <div class="list-page">
            <ListFilters
                resource=captains
                options=CAPTAIN_STATUSES
                placeholder="Search by name, email or phone"
                on_change=reload
            />
            <Show when=move || captains.with(|r| r.selected.is_none())>
                <ErrorBanner
                    message=Signal::derive(move || captains.with(|r| r.error.clone()))
                    on_dismiss=Callback::new(move |()| captains.update(PagedResource::dismiss_error))
                />
            </Show>
            <div class="table-wrap" class:table-wrap--loading=move || captains.with(|r| r.loading)>
                <table class="table">
                    <TableHead columns=COLUMNS/>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <Pagination resource=captains on_change=reload/>
            {detail}
        </div>
    }
}

/// Rate table and upsert form inside the captain overlay.
#[component]
fn CaptainRates(captain_id: u64, api: StoredValue<ApiContext>) -> impl IntoView {
    let rates = RwSignal::new(Vec::<CaptainRate>::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let service = RwSignal::new(String::new());
    let per_km = RwSignal::new(String::new());
    let minimum = RwSignal::new(String::new());
    let waiting = RwSignal::new(String::new());

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                match api.get::<Vec<CaptainRate>>(&endpoints::captain_rates(captain_id)).await {
                    Ok(list) => {
                        rates.try_set(list);
                    }
                    Err(e) => {
                        leptos::logging::warn!("captain {captain_id} rates: {e}");
                        error.try_set(Some(e.user_message("fetch captain rates")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, captain_id);
        }
    };
    load();

    let pick_service = move |value: String| {
        let [km, min, wait] = rates.with(|r| rate_draft(r, &value));
        per_km.set(km);
        minimum.set(min);
        waiting.set(wait);
        service.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match rate_update(&service.get(), &per_km.get(), &minimum.get(), &waiting.get()) {
            Ok(body) => body,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        notice.set(None);
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let result = api.put(&endpoints::captain_rates(captain_id), &body).await;
                saving.try_set(false);
                match result {
                    Ok(()) => {
                        notice.try_set(Some("Rates saved".to_owned()));
                        load();
                    }
                    Err(e) => {
                        leptos::logging::warn!("update captain rates failed: {e}");
                        error.try_set(Some(e.user_message("update captain rates")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            saving.set(false);
        }
    };

    view! {
        <section class="detail-section">
            <h3>"Rates"</h3>
            <ErrorBanner message=error on_dismiss=Callback::new(move |()| error.set(None))/>
            <table class="table table--compact">
                <TableHead columns=RATE_COLUMNS/>
                <tbody>
                    {move || {
                        let list = rates.get();
                        if list.is_empty() {
                            return view! { <EmptyRow columns=RATE_COLUMNS.len() message="No rates configured"/> }
                                .into_any();
                        }
                        list.into_iter()
                            .map(|r| {
                                let name = r.service_type.clone().unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{status_label(SERVICE_TYPES, &name).to_owned()}</td>
                                        <td>{egp(r.rate_per_km)}</td>
                                        <td>{egp(r.minimum_fare)}</td>
                                        <td>{egp(r.waiting_time_rate)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <form class="detail-form detail-form--inline" on:submit=on_submit>
                <select
                    class="detail-form__select"
                    prop:value=move || service.get()
                    on:change=move |ev| pick_service(event_target_value(&ev))
                >
                    <option value="">"Service"</option>
                    {SERVICE_TYPES.iter().map(|o| view! { <option value=o.value>{o.label}</option> }).collect_view()}
                </select>
                <input
                    class="detail-form__input"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Per km"
                    prop:value=move || per_km.get()
                    on:input=move |ev| per_km.set(event_target_value(&ev))
                />
                <input
                    class="detail-form__input"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Minimum fare"
                    prop:value=move || minimum.get()
                    on:input=move |ev| minimum.set(event_target_value(&ev))
                />
                <input
                    class="detail-form__input"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Waiting / min"
                    prop:value=move || waiting.get()
                    on:input=move |ev| waiting.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Rate" }}
                </button>
            </form>
            <Show when=move || notice.get().is_some()>
                <p class="detail-form__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
