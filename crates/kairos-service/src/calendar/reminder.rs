//! Reminders for occurrences about to start.

use std::collections::HashSet;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use kairos_store::model::Occurrence;

/// A reminder that has come due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Id of the occurrence, virtual ids included.
    pub event_id: String,
    pub title: String,
    pub starts_at: NaiveDateTime,
    pub minutes_before: u32,
    pub message: String,
}

impl Reminder {
    fn for_occurrence(occurrence: &Occurrence, starts_at: NaiveDateTime) -> Self {
        let event = occurrence.event();
        Self {
            event_id: event.id.clone(),
            title: event.title.clone(),
            starts_at,
            minutes_before: event.notification_time,
            message: format!(
                "{} starts in {} minutes",
                event.title, event.notification_time
            ),
        }
    }
}

/// ## Summary
/// Returns a reminder for every occurrence starting within its own
/// notification window after `now`.
///
/// An occurrence is due when `0 < start - now <= notificationTime` minutes.
/// Ids in `already_notified` are skipped, so a caller that records the
/// returned ids is reminded at most once per occurrence.
#[must_use]
pub fn due_reminders(
    occurrences: &[Occurrence],
    now: NaiveDateTime,
    already_notified: &HashSet<String>,
) -> Vec<Reminder> {
    occurrences
        .iter()
        .filter(|occurrence| !already_notified.contains(occurrence.id()))
        .filter_map(|occurrence| {
            let event = occurrence.event();
            let starts_at = event.date.and_time(event.start_time);
            let lead = starts_at - now;
            let window = TimeDelta::minutes(i64::from(event.notification_time));
            (lead > TimeDelta::zero() && lead <= window)
                .then(|| Reminder::for_occurrence(occurrence, starts_at))
        })
        .collect()
}
