use futures::future::BoxFuture;

use crate::error::StoreResult;
use crate::model::{Event, EventForm};

pub mod memory;

pub use memory::MemoryEventStore;

/// ## Summary
/// Storage collaborator for persisted events, keyed by id.
///
/// Implementations keep insertion order in `list`; views are materialized
/// in that order.
pub trait EventStore: Send + Sync {
    fn list(&self) -> BoxFuture<'_, StoreResult<Vec<Event>>>;

    /// Stores a new event under a freshly assigned id.
    fn create(&self, form: EventForm) -> BoxFuture<'_, StoreResult<Event>>;

    /// Stores an event that already carries its id.
    fn insert(&self, event: Event) -> BoxFuture<'_, StoreResult<Event>>;

    fn update(&self, event: Event) -> BoxFuture<'_, StoreResult<Event>>;

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<()>>;
}
