/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const EVENTS_ROUTE_COMPONENT: &str = "events";
pub const EVENTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", EVENTS_ROUTE_COMPONENT);

pub const NOTIFICATIONS_ROUTE_COMPONENT: &str = "notifications";
pub const NOTIFICATIONS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", NOTIFICATIONS_ROUTE_COMPONENT);

/// Separates the series id from the occurrence date in a virtual occurrence id.
pub const VIRTUAL_ID_MARKER: &str = "-recurring-";

/// Prefix of ids given to occurrences detached from their series.
pub const DETACHED_ID_PREFIX: &str = "single-";

/// Upper bound on the occurrences a single series may expand to.
pub const DEFAULT_MAX_OCCURRENCES: u16 = u16::MAX;
