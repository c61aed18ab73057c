//! Detaching single occurrences from a series.
//!
//! Both operations are copy-on-write: the caller's collection is never
//! modified, and the series keeps its anchor date and rule. The only change
//! to the series is one more entry in its exceptions.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use kairos_core::constants::DETACHED_ID_PREFIX;
use kairos_store::model::{Event, EventPatch, RepeatRule};

use crate::error::{ServiceError, ServiceResult};

/// Result of detaching an occurrence for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedUpdate {
    /// The full collection after the edit.
    pub events: Vec<Event>,
    /// The series with the detached date added to its exceptions.
    pub series: Event,
    /// The standalone event now standing in for the occurrence.
    pub single: Event,
}

/// Result of detaching an occurrence for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedDelete {
    /// The full collection after the deletion.
    pub events: Vec<Event>,
    /// The series with the deleted date added to its exceptions.
    pub series: Event,
}

/// ## Summary
/// Replaces the occurrence of `series_id` on `date` with a standalone event.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event has id `series_id`.
pub fn detach_for_update(
    events: &[Event],
    series_id: &str,
    date: NaiveDate,
    patch: &EventPatch,
) -> ServiceResult<DetachedUpdate> {
    detach_for_update_at(events, series_id, date, patch, Utc::now())
}

/// ## Summary
/// [`detach_for_update`] with an explicit clock for the standalone event's id.
///
/// The standalone event copies the series as it was before the exception was
/// recorded, overlays `patch`, and is pinned to `date` with no repeat rule.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event has id `series_id`.
#[tracing::instrument(skip(events, patch), fields(events = events.len()))]
pub fn detach_for_update_at(
    events: &[Event],
    series_id: &str,
    date: NaiveDate,
    patch: &EventPatch,
    now: DateTime<Utc>,
) -> ServiceResult<DetachedUpdate> {
    let (index, original) = locate(events, series_id)?;

    let mut single = original.clone();
    single.apply(patch);
    single.id = detached_id(events, now);
    single.date = date;
    single.repeat = RepeatRule::none();

    let mut series = original.clone();
    series.repeat.exceptions.insert(date);

    let mut updated = events.to_vec();
    updated[index] = series.clone();
    updated.push(single.clone());

    tracing::debug!(single_id = %single.id, "Detached occurrence for update");
    Ok(DetachedUpdate {
        events: updated,
        series,
        single,
    })
}

/// ## Summary
/// Removes the occurrence of `series_id` on `date`, leaving the rest of the
/// series in place.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event has id `series_id`.
#[tracing::instrument(skip(events), fields(events = events.len()))]
pub fn detach_for_delete(
    events: &[Event],
    series_id: &str,
    date: NaiveDate,
) -> ServiceResult<DetachedDelete> {
    let (index, original) = locate(events, series_id)?;

    let mut series = original.clone();
    series.repeat.exceptions.insert(date);

    let mut updated = events.to_vec();
    updated[index] = series.clone();

    tracing::debug!("Detached occurrence for delete");
    Ok(DetachedDelete {
        events: updated,
        series,
    })
}

fn locate<'a>(events: &'a [Event], series_id: &str) -> ServiceResult<(usize, &'a Event)> {
    events
        .iter()
        .enumerate()
        .find(|(_, event)| event.id == series_id)
        .ok_or_else(|| ServiceError::NotFound(series_id.to_string()))
}

/// `single-{millis}`, moved forward a millisecond at a time past ids in use.
fn detached_id(events: &[Event], now: DateTime<Utc>) -> String {
    let mut stamp = now;
    loop {
        let id = format!("{DETACHED_ID_PREFIX}{}", stamp.timestamp_millis());
        if !events.iter().any(|event| event.id == id) {
            return id;
        }
        stamp += TimeDelta::milliseconds(1);
    }
}
