use super::*;

fn captain(model: Option<&str>, color: Option<&str>, plate: Option<&str>) -> Captain {
    Captain {
        captain_id: 7,
        vehicle_model: model.map(str::to_owned),
        vehicle_color: color.map(str::to_owned),
        plate_number: plate.map(str::to_owned),
        ..Captain::default()
    }
}

#[test]
fn pending_captains_are_reviewed() {
    let commands = commands_for("Pending");
    assert_eq!(
        commands,
        vec![CaptainCommand::Review(CaptainAction::Approve), CaptainCommand::Review(CaptainAction::Reject)]
    );
    assert_eq!(commands[0].action_name(), "approve captain");
    assert_eq!(commands[1].action_name(), "reject captain");
}

#[test]
fn status_actions_skip_the_current_status() {
    let labels: Vec<&str> = commands_for("OnHold").into_iter().map(CaptainCommand::label).collect();
    assert_eq!(labels, vec!["Activate", "Deactivate"]);

    let active = commands_for("Active");
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|c| c.action_name() == "update captain status"));
}

#[test]
fn unknown_status_offers_every_transition() {
    assert_eq!(commands_for("").len(), 3);
}

#[test]
fn command_classes_follow_severity() {
    assert_eq!(CaptainCommand::Review(CaptainAction::Approve).class(), "btn btn--positive");
    assert_eq!(
        CaptainCommand::SetStatus { status: "Deactivated", label: "Deactivate" }.class(),
        "btn btn--negative"
    );
    assert_eq!(CaptainCommand::SetStatus { status: "OnHold", label: "Put on Hold" }.class(), "btn btn--caution");
}

#[test]
fn vehicle_summary_needs_a_model() {
    assert_eq!(vehicle_summary(&captain(None, Some("White"), Some("ABC 123"))), None);
    assert_eq!(vehicle_summary(&captain(Some("  "), None, None)), None);
    assert_eq!(
        vehicle_summary(&captain(Some("Toyota Corolla"), Some("White"), Some("ABC 123"))).as_deref(),
        Some("Toyota Corolla · White · ABC 123")
    );
    assert_eq!(
        vehicle_summary(&captain(Some("Hyundai Elantra"), Some(""), None)).as_deref(),
        Some("Hyundai Elantra")
    );
}

#[test]
fn captain_table_has_seven_columns() {
    assert_eq!(COLUMNS.len(), 7);
}

#[cfg(feature = "ssr")]
#[test]
fn empty_captain_listing_row_spans_every_column() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.set();

    let page = wire::Page::<Captain>::from_value(serde_json::json!({"captains": [], "pages": 0})).unwrap();
    assert!(page.items.is_empty());

    let html = view! { <EmptyRow columns=COLUMNS.len() message={PagedResource::<Captain>::empty_message()}/> }
        .to_html();
    assert!(html.contains(r#"colspan="7""#), "{html}");
    assert!(html.contains("No captains found"), "{html}");
}

// =============================================================
// rates
// =============================================================

fn rate(service: &str, per_km: f64, minimum: f64, waiting: f64) -> CaptainRate {
    CaptainRate {
        service_type: Some(service.to_owned()),
        rate_per_km: per_km,
        minimum_fare: minimum,
        waiting_time_rate: waiting,
        ..CaptainRate::default()
    }
}

#[test]
fn rate_update_parses_form_fields() {
    let body = rate_update("CrossCity", " 4.5 ", "40", "0").unwrap();
    assert_eq!(body.service_type, "CrossCity");
    assert!((body.rate_per_km - 4.5).abs() < f64::EPSILON);
    assert!((body.minimum_fare - 40.0).abs() < f64::EPSILON);
    assert!(body.waiting_time_rate.abs() < f64::EPSILON);
}

#[test]
fn rate_update_requires_known_service() {
    assert_eq!(rate_update("", "1", "1", "1"), Err("Choose a service."));
    assert_eq!(rate_update("Helicopter", "1", "1", "1"), Err("Choose a service."));
}

#[test]
fn rate_update_rejects_blank_negative_and_garbage() {
    let message = Err("Rates must be non-negative numbers.");
    assert_eq!(rate_update("InsideCity", "", "10", "1"), message);
    assert_eq!(rate_update("InsideCity", "3", "-1", "1"), message);
    assert_eq!(rate_update("InsideCity", "3", "10", "abc"), message);
    assert_eq!(rate_update("InsideCity", "NaN", "10", "1"), message);
}

#[test]
fn rate_draft_prefills_saved_service() {
    let rates = vec![rate("InsideCity", 3.5, 20.0, 1.0), rate("AirportDropoff", 6.0, 80.0, 2.5)];
    assert_eq!(rate_draft(&rates, "AirportDropoff"), ["6".to_owned(), "80".to_owned(), "2.5".to_owned()]);
    assert_eq!(rate_draft(&rates, "ScooterRide"), [String::new(), String::new(), String::new()]);
}
