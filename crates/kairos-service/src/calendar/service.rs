//! Store-backed calendar operations.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use tokio::sync::Mutex;

use kairos_core::config::CalendarConfig;
use kairos_core::types::DateRange;
use kairos_store::model::{Event, EventForm, EventPatch, Occurrence, OccurrenceRef};
use kairos_store::store::EventStore;

use super::editor::{DetachedUpdate, detach_for_delete, detach_for_update};
use super::overlap::{EditedSlot, find_overlaps};
use super::recurrence::RecurrenceExpander;
use super::reminder::{Reminder, due_reminders};
use super::view::{ViewMaterializer, filter_by_term};
use crate::error::{ServiceError, ServiceResult};

/// Outcome of submitting an event form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(Event),
    /// Nothing was written; the submission needs confirmation.
    Conflicts(Vec<Event>),
}

/// ## Summary
/// Runs the calendar engine against an [`EventStore`].
///
/// Every call works on a fresh snapshot of the store. Writing calls hold
/// `writes` from the snapshot through their last store write, so a detach
/// never overwrites a series written after its snapshot was taken. Clones
/// share the guard.
#[derive(Clone)]
pub struct CalendarService {
    store: Arc<dyn EventStore>,
    materializer: ViewMaterializer,
    writes: Arc<Mutex<()>>,
}

impl std::fmt::Debug for CalendarService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarService")
            .field("materializer", &self.materializer)
            .finish_non_exhaustive()
    }
}

impl CalendarService {
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>, config: &CalendarConfig) -> Self {
        Self {
            store,
            materializer: ViewMaterializer::new(RecurrenceExpander::new(config.max_occurrences)),
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// ## Summary
    /// Returns every persisted event, series anchors included.
    ///
    /// ## Errors
    /// Propagates store failures.
    pub async fn list(&self) -> ServiceResult<Vec<Event>> {
        Ok(self.store.list().await?)
    }

    /// ## Summary
    /// Materializes `range`, optionally keeping only occurrences matching `term`.
    ///
    /// ## Errors
    /// Propagates store failures.
    #[tracing::instrument(skip(self, range), fields(start = %range.start, end = %range.end))]
    pub async fn view(&self, range: DateRange, term: Option<&str>) -> ServiceResult<Vec<Occurrence>> {
        let events = self.store.list().await?;
        let occurrences = self.materializer.materialize(&events, range);
        Ok(match term {
            Some(term) => filter_by_term(occurrences, term),
            None => occurrences,
        })
    }

    /// ## Summary
    /// Returns the stored events `form` would overlap if it were saved as
    /// `target` (a new event when `None`).
    ///
    /// ## Errors
    /// Propagates store failures.
    pub async fn overlaps(
        &self,
        form: &EventForm,
        target: Option<&OccurrenceRef>,
    ) -> ServiceResult<Vec<Event>> {
        let events = self.store.list().await?;
        Ok(conflicts_for(form, target, &events))
    }

    /// ## Summary
    /// Validates and saves `form`.
    ///
    /// With no `target` a new event is created. A persisted target is
    /// replaced wholesale. A virtual target is detached from its series: the
    /// form's fields become a standalone event on the occurrence's date and
    /// the series gains an exception.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` for an invalid form and a
    /// not-found error when `target` names no stored event.
    ///
    /// ## Side Effects
    /// Writes to the store unless overlaps were found and `confirmed` is false.
    /// A detach stores the standalone event before the series and removes it
    /// again when the series cannot be written.
    #[tracing::instrument(skip(self, form, target), fields(title = %form.title, date = %form.date))]
    pub async fn submit(
        &self,
        form: EventForm,
        target: Option<OccurrenceRef>,
        confirmed: bool,
    ) -> ServiceResult<SubmitOutcome> {
        validate_form(&form)?;
        let _writing = self.writes.lock().await;
        let events = self.store.list().await?;

        if !confirmed {
            let conflicts = conflicts_for(&form, target.as_ref(), &events);
            if !conflicts.is_empty() {
                tracing::debug!(conflicts = conflicts.len(), "Submission held for confirmation");
                return Ok(SubmitOutcome::Conflicts(conflicts));
            }
        }

        let saved = match &target {
            None => self.store.create(form).await?,
            Some(OccurrenceRef::Persisted(id)) => {
                self.store.update(form.into_event(id.clone())).await?
            }
            Some(OccurrenceRef::Virtual { series_id, date }) => {
                let detached = detach_for_update(&events, series_id, *date, &EventPatch::from(&form))?;
                self.save_detached(detached).await?
            }
        };

        tracing::info!(
            id = %saved.id,
            target_id = target.as_ref().map(OccurrenceRef::stored_id),
            "Event saved"
        );
        Ok(SubmitOutcome::Saved(saved))
    }

    /// ## Summary
    /// Deletes a stored event, or removes one occurrence from its series.
    ///
    /// ## Errors
    /// Returns a not-found error when `target` names no stored event.
    #[tracing::instrument(skip(self, target), fields(occurrence = %target))]
    pub async fn delete(&self, target: &OccurrenceRef) -> ServiceResult<()> {
        let _writing = self.writes.lock().await;
        match target {
            OccurrenceRef::Persisted(id) => self.store.delete(id).await?,
            OccurrenceRef::Virtual { series_id, date } => {
                let events = self.store.list().await?;
                let detached = detach_for_delete(&events, series_id, *date)?;
                self.store.update(detached.series).await?;
            }
        }
        tracing::info!(id = target.stored_id(), "Event deleted");
        Ok(())
    }

    async fn save_detached(&self, detached: DetachedUpdate) -> ServiceResult<Event> {
        let single = self.store.insert(detached.single).await?;
        if let Err(err) = self.store.update(detached.series).await {
            tracing::warn!(id = %single.id, error = %err, "Series update failed, removing detached event");
            if let Err(cleanup) = self.store.delete(&single.id).await {
                tracing::error!(id = %single.id, error = %cleanup, "Failed to remove detached event");
            }
            return Err(err.into());
        }
        Ok(single)
    }

    /// ## Summary
    /// Returns the reminders due at `now`.
    ///
    /// The scan covers every day from `now` through `now` plus the longest
    /// notification time in the store, so an occurrence shortly after
    /// midnight is reminded on the evening before.
    ///
    /// ## Errors
    /// Propagates store failures.
    #[tracing::instrument(skip(self, already_notified))]
    pub async fn reminders(
        &self,
        now: NaiveDateTime,
        already_notified: &HashSet<String>,
    ) -> ServiceResult<Vec<Reminder>> {
        let events = self.store.list().await?;
        let longest_lead = events
            .iter()
            .map(|event| event.notification_time)
            .max()
            .unwrap_or(0);
        let last_day = now
            .checked_add_signed(TimeDelta::minutes(i64::from(longest_lead)))
            .map_or(now.date(), |horizon| horizon.date());

        let upcoming = self
            .materializer
            .materialize(&events, DateRange::new(now.date(), last_day)?);
        Ok(due_reminders(&upcoming, now, already_notified))
    }
}

/// Overlap candidates for a submission aimed at `target`.
///
/// A detached occurrence lands on its own date and must not be reported as
/// conflicting with its series.
fn conflicts_for(form: &EventForm, target: Option<&OccurrenceRef>, events: &[Event]) -> Vec<Event> {
    let found = match target {
        None => find_overlaps(form, events),
        Some(OccurrenceRef::Persisted(id)) => find_overlaps(&EditedSlot { id, form }, events),
        Some(OccurrenceRef::Virtual { series_id, date }) => {
            let mut placed = form.clone();
            placed.date = *date;
            find_overlaps(
                &EditedSlot {
                    id: series_id,
                    form: &placed,
                },
                events,
            )
        }
    };
    found.into_iter().cloned().collect()
}

/// ## Summary
/// Checks a submitted form before anything is written.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` when the title is blank, the
/// start time is not before the end time, or a repeating event ends on or
/// before its own date.
pub fn validate_form(form: &EventForm) -> ServiceResult<()> {
    if form.title.trim().is_empty() {
        return Err(ServiceError::ValidationError("title is required".to_string()));
    }
    if form.start_time >= form.end_time {
        return Err(ServiceError::ValidationError(
            "start time must be before end time".to_string(),
        ));
    }
    if form.repeat.is_repeating()
        && let Some(end_date) = form.repeat.end_date
        && end_date <= form.date
    {
        return Err(ServiceError::ValidationError(
            "repeat end date must be after the event date".to_string(),
        ));
    }
    Ok(())
}
