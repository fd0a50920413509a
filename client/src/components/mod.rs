//! Reusable UI components for the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components stay presentation-focused; pages own the state signals and the
//! `ApiContext` calls that feed them.

pub mod bar_chart;
pub mod layout;
pub mod listing;
pub mod stat_card;
pub mod status_badge;
