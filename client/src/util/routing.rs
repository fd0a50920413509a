//! Static routing table and auth-aware path resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router mounts one guarded view per console path; each guard asks
//! [`resolve`] what to show for the current [`AuthState`]. The sidebar menu
//! is derived from [`NAV`] so both stay in the same order.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// An authenticated console screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    Captains,
    Users,
    Bookings,
    Financials,
}

/// Menu order.
pub const NAV: [Destination; 5] = [
    Destination::Dashboard,
    Destination::Captains,
    Destination::Users,
    Destination::Bookings,
    Destination::Financials,
];

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Captains => "/captains",
            Self::Users => "/users",
            Self::Bookings => "/bookings",
            Self::Financials => "/financials",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Captains => "Captains",
            Self::Users => "Users",
            Self::Bookings => "Bookings",
            Self::Financials => "Financials",
        }
    }

    /// Header title for the routed view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Captains => "Captain Management",
            Self::Users => "User Management",
            Self::Bookings => "Booking Management",
            Self::Financials => "Financial Management",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        NAV.into_iter().find(|d| d.path() == path)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    ShowLoading,
    ShowLogin,
    ShowShell(Destination),
    Redirect(&'static str),
}

/// Strip trailing slashes, keeping `/` for the root.
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Decide what `path` shows under `auth`.
pub fn resolve(path: &str, auth: &AuthState) -> RouteDecision {
    let path = normalize(path);
    match auth {
        AuthState::Loading => RouteDecision::ShowLoading,
        AuthState::Unauthenticated if path == LOGIN_PATH => RouteDecision::ShowLogin,
        AuthState::Unauthenticated => RouteDecision::Redirect(LOGIN_PATH),
        AuthState::Authenticated(_) if path == LOGIN_PATH => RouteDecision::Redirect(HOME_PATH),
        AuthState::Authenticated(_) => {
            Destination::from_path(path).map_or(RouteDecision::Redirect(HOME_PATH), RouteDecision::ShowShell)
        }
    }
}
