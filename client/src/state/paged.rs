//! Generic state machine behind every paginated listing view.
//!
//! DESIGN
//! ======
//! Each fetch is tagged with a monotonically increasing sequence number.
//! Only the response to the latest issued request may touch the state, so a
//! slow page-2 response cannot overwrite a newer page-3 or filter change.
//! Failures keep the previous records visible beside the error banner.
//!
//! A listing error is cleared by the next successful fetch; a mutation error
//! stays until dismissed or replaced, so a reload racing a failed action
//! cannot hide it.

#[cfg(test)]
#[path = "paged_test.rs"]
mod paged_test;

use wire::{ApiError, ListQuery, Listing, Page};

/// Handle for one in-flight listing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
    /// Listing path the query is appended to.
    pub path: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued; the response was dropped.
    Stale,
    /// The listing shrank below the current page; the page was pulled back
    /// to the last one and must be fetched again.
    Clamped,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PagedResource<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub total_pages: u64,
    pub per_page: u64,
    pub search: String,
    pub status: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Record shown in the detail overlay.
    pub selected: Option<T>,
    /// Overrides `T::PATH`, e.g. one rider's booking history.
    path: Option<String>,
    /// `error` came from a listing fetch rather than a mutation.
    fetch_error: bool,
    seq: u64,
}

impl<T: Listing> PagedResource<T> {
    pub fn new(per_page: u64) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            per_page: per_page.max(1),
            search: String::new(),
            status: None,
            loading: false,
            error: None,
            selected: None,
            path: None,
            fetch_error: false,
            seq: 0,
        }
    }

    /// Fetch from `path` instead of the record type's own listing.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(T::PATH)
    }

    /// Sequence number of the latest issued request.
    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            per_page: self.per_page,
            search: self.search.trim().to_owned(),
            status: self.status.clone(),
        }
    }

    /// Issue a new request for the current page and filters.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        self.loading = true;
        FetchTicket { seq: self.seq, query: self.query(), path: self.path().to_owned() }
    }

    /// Apply the response to request `seq` unless a newer one was issued.
    pub fn finish(&mut self, seq: u64, result: Result<Page<T>, ApiError>) -> FetchOutcome {
        if seq != self.seq {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.pages;
                if self.fetch_error {
                    self.error = None;
                    self.fetch_error = false;
                }
                if self.page > self.last_page() {
                    self.page = self.last_page();
                    return FetchOutcome::Clamped;
                }
            }
            Err(e) => {
                self.error = Some(e.user_message(&format!("fetch {}", T::NOUN)));
                self.fetch_error = true;
            }
        }
        FetchOutcome::Applied
    }

    /// Highest page the controls accept.
    pub fn last_page(&self) -> u64 {
        self.total_pages.max(1)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Jump to page `page`; out-of-range pages are rejected.
    pub fn go_to(&mut self, page: u64) -> bool {
        if page == 0 || page > self.last_page() {
            return false;
        }
        let changed = page != self.page;
        self.page = page;
        changed
    }

    /// Change the status filter. Always returns to page 1.
    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status.filter(|s| !s.is_empty());
        self.page = 1;
    }

    /// Apply a submitted search term. Always returns to page 1.
    pub fn submit_search(&mut self, term: &str) {
        self.search = term.trim().to_owned();
        self.page = 1;
    }

    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page, self.last_page())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Placeholder shown when the current page has no records.
    pub fn empty_message() -> String {
        format!("No {} found", T::NOUN)
    }

    pub fn open_detail(&mut self, record: T) {
        self.selected = Some(record);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// A mutation succeeded: close the overlay. The caller refetches.
    pub fn mutation_succeeded(&mut self) {
        self.selected = None;
        self.error = None;
        self.fetch_error = false;
    }

    /// A mutation failed: keep the overlay and records, show the error.
    pub fn mutation_failed(&mut self, err: &ApiError, action: &str) {
        self.error = Some(err.user_message(action));
        self.fetch_error = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.fetch_error = false;
    }
}
