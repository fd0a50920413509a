//! Rounded status pill used in tables, overlays and the activity feed.

use leptos::prelude::*;

use crate::util::format::Tone;

#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}
