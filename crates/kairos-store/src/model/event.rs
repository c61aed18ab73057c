use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use kairos_core::types::RepeatType;
use kairos_core::util::date::{option_time_hm, time_hm};

/// ## Summary
/// Repeat rule of a series.
///
/// `interval` is stored and returned as given but never used as a stride:
/// expansion always advances one unit per step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatRule {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    #[serde(default)]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Dates of this series that must not be materialized.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exceptions: BTreeSet<NaiveDate>,
}

impl RepeatRule {
    /// Rule of a standalone, non-repeating event.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(kind: RepeatType, interval: u32, end_date: Option<NaiveDate>) -> Self {
        Self {
            kind,
            interval,
            end_date,
            exceptions: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.kind.is_repeating()
    }

    #[must_use]
    pub fn is_exception(&self, date: NaiveDate) -> bool {
        self.exceptions.contains(&date)
    }
}

/// A persisted calendar event, or the anchor of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    #[serde(with = "time_hm")]
    pub start_time: NaiveTime,
    #[serde(with = "time_hm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub repeat: RepeatRule,
    /// Minutes before `start_time` at which a reminder is due.
    #[serde(default)]
    pub notification_time: u32,
}

impl Event {
    /// ## Summary
    /// Overlays the fields set in `patch`.
    pub fn apply(&mut self, patch: &EventPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(location) = &patch.location {
            self.location.clone_from(location);
        }
        if let Some(category) = &patch.category {
            self.category.clone_from(category);
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(notification_time) = patch.notification_time {
            self.notification_time = notification_time;
        }
    }
}

/// ## Summary
/// Event fields as submitted by a form, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    #[serde(with = "time_hm")]
    pub start_time: NaiveTime,
    #[serde(with = "time_hm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub repeat: RepeatRule,
    #[serde(default)]
    pub notification_time: u32,
}

impl EventForm {
    /// Assigns `id` to the submitted fields.
    #[must_use]
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            category: self.category,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            repeat: self.repeat,
            notification_time: self.notification_time,
        }
    }
}

impl From<Event> for EventForm {
    fn from(event: Event) -> Self {
        Self {
            title: event.title,
            description: event.description,
            location: event.location,
            category: event.category,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            repeat: event.repeat,
            notification_time: event.notification_time,
        }
    }
}

/// ## Summary
/// Field overrides for an occurrence detached from its series.
///
/// Identity, date and repeat rule are not patchable: detaching fixes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, with = "option_time_hm", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "option_time_hm", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_time: Option<u32>,
}

impl From<&EventForm> for EventPatch {
    fn from(form: &EventForm) -> Self {
        Self {
            title: Some(form.title.clone()),
            description: Some(form.description.clone()),
            location: Some(form.location.clone()),
            category: Some(form.category.clone()),
            start_time: Some(form.start_time),
            end_time: Some(form.end_time),
            notification_time: Some(form.notification_time),
        }
    }
}
