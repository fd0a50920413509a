//! Fetch and mutation drivers for [`PagedResource`] signals.
//!
//! Each driver performs one state transition synchronously (issue a ticket,
//! record a failure) and runs the network call on the local task queue.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use leptos::prelude::*;
use wire::{ApiError, Listing};

use super::api::ApiContext;
#[cfg(feature = "hydrate")]
use crate::state::paged::FetchOutcome;
use crate::state::paged::PagedResource;

/// The record open in the detail overlay.
///
/// Overlays render from this memo rather than the whole resource, so a
/// banner, loading flag or reload leaves their form inputs in place.
pub fn selection<T: Listing>(resource: RwSignal<PagedResource<T>>) -> Memo<Option<T>> {
    Memo::new(move |_| resource.with(|r| r.selected.clone()))
}

/// Reload the current page of `resource`.
pub fn refresh<T: Listing>(api: ApiContext, resource: RwSignal<PagedResource<T>>) {
    let Some(ticket) = resource.try_update(PagedResource::begin_fetch) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.fetch_page::<T>(&ticket.path, &ticket.query).await;
        match resource.try_update(|r| r.finish(ticket.seq, result)) {
            Some(FetchOutcome::Stale) => {
                leptos::logging::log!("dropped stale {} response (seq {})", T::NOUN, ticket.seq);
            }
            Some(FetchOutcome::Clamped) => refresh(api, resource),
            Some(FetchOutcome::Applied) | None => {}
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, ticket);
    }
}

/// Run `request`; on success close the overlay and reload, on failure keep
/// the overlay open with `Failed to <action>`.
pub fn mutate<T, F, Fut>(api: ApiContext, resource: RwSignal<PagedResource<T>>, action: &'static str, request: F)
where
    T: Listing,
    F: FnOnce(ApiContext) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match request(api.clone()).await {
            Ok(()) => {
                resource.try_update(PagedResource::mutation_succeeded);
                refresh(api, resource);
            }
            Err(e) => {
                leptos::logging::warn!("{action} failed: {e}");
                resource.try_update(|r| r.mutation_failed(&e, action));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, resource, action, request);
    }
}
