mod app_specific;
mod events;
mod notifications;
mod response;

use salvo::Router;

// Re-export route constants from core
pub use kairos_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, EVENTS_ROUTE_COMPONENT, EVENTS_ROUTE_PREFIX,
    NOTIFICATIONS_ROUTE_COMPONENT, NOTIFICATIONS_ROUTE_PREFIX,
};
pub use response::ErrorResponse;

/// ## Summary
/// Constructs the main API router with all calendar handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(events::routes())
        .push(notifications::routes())
}
