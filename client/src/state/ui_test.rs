use super::*;

#[test]
fn sidebar_starts_expanded() {
    let ui = UiState::default();
    assert!(!ui.sidebar_collapsed);
    assert_eq!(ui.sidebar_class(), "sidebar");
}

#[test]
fn toggle_sidebar_flips_state() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    assert_eq!(ui.sidebar_class(), "sidebar sidebar--collapsed");
    ui.toggle_sidebar();
    assert!(!ui.sidebar_collapsed);
}
