//! Console chrome state shared across routed views.
//!
//! DESIGN
//! ======
//! Lives at the app root so the sidebar keeps its collapsed/expanded state
//! while the router swaps views beneath it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_collapsed: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn sidebar_class(&self) -> &'static str {
        if self.sidebar_collapsed { "sidebar sidebar--collapsed" } else { "sidebar" }
    }
}
