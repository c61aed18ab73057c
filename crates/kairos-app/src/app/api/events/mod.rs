//! `/api/events` handlers.

mod read;
mod types;
mod write;


use salvo::Router;

use kairos_core::constants::EVENTS_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .get(read::list_events)
        .post(write::create_event)
        .push(Router::with_path("view").get(read::view_events))
        .push(Router::with_path("overlaps").post(write::check_overlaps))
        .push(
            Router::with_path("{id}")
                .put(write::update_event)
                .delete(write::delete_event),
        )
}
