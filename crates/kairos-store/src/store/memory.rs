//! In-memory event store.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::model::{Event, EventForm};
use crate::store::EventStore;

/// ## Summary
/// Event store held in process memory.
///
/// Clones share the same events. Writes are serialized by the lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `events`, keeping their ids.
    #[must_use]
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }
}

impl EventStore for MemoryEventStore {
    fn list(&self) -> BoxFuture<'_, StoreResult<Vec<Event>>> {
        Box::pin(async move { Ok(self.events.read().await.clone()) })
    }

    #[tracing::instrument(skip(self, form), fields(title = %form.title, date = %form.date))]
    fn create(&self, form: EventForm) -> BoxFuture<'_, StoreResult<Event>> {
        Box::pin(async move {
            let event = form.into_event(uuid::Uuid::now_v7().to_string());
            self.events.write().await.push(event.clone());
            tracing::debug!(id = %event.id, "Event created");
            Ok(event)
        })
    }

    #[tracing::instrument(skip(self, event), fields(id = %event.id))]
    fn insert(&self, event: Event) -> BoxFuture<'_, StoreResult<Event>> {
        Box::pin(async move {
            let mut events = self.events.write().await;
            if events.iter().any(|existing| existing.id == event.id) {
                return Err(StoreError::AlreadyExists(event.id));
            }
            events.push(event.clone());
            tracing::debug!("Event inserted");
            Ok(event)
        })
    }

    #[tracing::instrument(skip(self, event), fields(id = %event.id))]
    fn update(&self, event: Event) -> BoxFuture<'_, StoreResult<Event>> {
        Box::pin(async move {
            let mut events = self.events.write().await;
            let Some(slot) = events.iter_mut().find(|existing| existing.id == event.id) else {
                return Err(StoreError::NotFound(event.id));
            };
            slot.clone_from(&event);
            tracing::debug!("Event updated");
            Ok(event)
        })
    }

    #[tracing::instrument(skip(self))]
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StoreResult<()>> {
        Box::pin(async move {
            let mut events = self.events.write().await;
            let Some(index) = events.iter().position(|event| event.id == id) else {
                return Err(StoreError::NotFound(id.to_string()));
            };
            events.remove(index);
            tracing::debug!("Event deleted");
            Ok(())
        })
    }
}
