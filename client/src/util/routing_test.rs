use super::*;
use crate::state::session::{Profile, Session};

fn signed_in() -> AuthState {
    AuthState::Authenticated(Session {
        token: "abc".to_owned(),
        profile: Profile { admin_id: None, name: "A".to_owned(), email: "a@x.com".to_owned() },
    })
}

#[test]
fn loading_shows_loading_everywhere() {
    for path in ["/", "/login", "/captains", "/nope"] {
        assert_eq!(resolve(path, &AuthState::Loading), RouteDecision::ShowLoading);
    }
}

#[test]
fn signed_in_admin_reaches_dashboard_and_leaves_login() {
    let auth = signed_in();
    assert_eq!(resolve("/dashboard", &auth), RouteDecision::ShowShell(Destination::Dashboard));
    assert_eq!(resolve("/login", &auth), RouteDecision::Redirect("/dashboard"));
}

#[test]
fn every_destination_resolves_to_its_shell() {
    let auth = signed_in();
    for dest in NAV {
        assert_eq!(resolve(dest.path(), &auth), RouteDecision::ShowShell(dest));
    }
}

#[test]
fn unknown_paths_redirect_home_when_signed_in() {
    let auth = signed_in();
    assert_eq!(resolve("/", &auth), RouteDecision::Redirect("/dashboard"));
    assert_eq!(resolve("/reports", &auth), RouteDecision::Redirect("/dashboard"));
}

#[test]
fn signed_out_sees_login_only() {
    let auth = AuthState::Unauthenticated;
    assert_eq!(resolve("/login", &auth), RouteDecision::ShowLogin);
    assert_eq!(resolve("/captains", &auth), RouteDecision::Redirect("/login"));
    assert_eq!(resolve("/", &auth), RouteDecision::Redirect("/login"));
}

#[test]
fn trailing_slashes_are_ignored() {
    let auth = signed_in();
    assert_eq!(resolve("/captains/", &auth), RouteDecision::ShowShell(Destination::Captains));
    assert_eq!(resolve("/login//", &AuthState::Unauthenticated), RouteDecision::ShowLogin);
    assert_eq!(normalize("///"), "/");
}

#[test]
fn menu_order_matches_table() {
    let labels: Vec<_> = NAV.iter().map(|d| d.label()).collect();
    assert_eq!(labels, ["Dashboard", "Captains", "Users", "Bookings", "Financials"]);
}
