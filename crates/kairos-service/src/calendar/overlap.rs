//! Same-day time conflicts between a candidate and stored events.

use chrono::{NaiveDate, NaiveTime};

use kairos_store::model::{Event, EventForm};

/// ## Summary
/// Anything occupying a time slot on a single calendar day.
///
/// `slot_id` is `None` for a slot that has not been stored yet.
pub trait TimeSlot {
    fn slot_id(&self) -> Option<&str>;
    fn slot_date(&self) -> NaiveDate;
    fn slot_start(&self) -> NaiveTime;
    fn slot_end(&self) -> NaiveTime;

    /// Half-open intersection: slots that only touch do not overlap.
    fn overlaps<S: TimeSlot + ?Sized>(&self, other: &S) -> bool {
        self.slot_date() == other.slot_date()
            && self.slot_start() < other.slot_end()
            && other.slot_start() < self.slot_end()
    }
}

impl TimeSlot for Event {
    fn slot_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn slot_date(&self) -> NaiveDate {
        self.date
    }

    fn slot_start(&self) -> NaiveTime {
        self.start_time
    }

    fn slot_end(&self) -> NaiveTime {
        self.end_time
    }
}

impl TimeSlot for EventForm {
    fn slot_id(&self) -> Option<&str> {
        None
    }

    fn slot_date(&self) -> NaiveDate {
        self.date
    }

    fn slot_start(&self) -> NaiveTime {
        self.start_time
    }

    fn slot_end(&self) -> NaiveTime {
        self.end_time
    }
}

/// Form fields of an event that is being edited in place.
#[derive(Debug, Clone, Copy)]
pub struct EditedSlot<'a> {
    pub id: &'a str,
    pub form: &'a EventForm,
}

impl TimeSlot for EditedSlot<'_> {
    fn slot_id(&self) -> Option<&str> {
        Some(self.id)
    }

    fn slot_date(&self) -> NaiveDate {
        self.form.date
    }

    fn slot_start(&self) -> NaiveTime {
        self.form.start_time
    }

    fn slot_end(&self) -> NaiveTime {
        self.form.end_time
    }
}

/// ## Summary
/// Returns the events of `existing` whose slot intersects `candidate`'s,
/// in their original order.
///
/// Only persisted events are compared: occurrences a series would produce
/// on the candidate's date are not considered. An event never conflicts
/// with itself.
#[must_use]
pub fn find_overlaps<'a, C: TimeSlot + ?Sized>(candidate: &C, existing: &'a [Event]) -> Vec<&'a Event> {
    let own_id = candidate.slot_id();
    let conflicts: Vec<&Event> = existing
        .iter()
        .filter(|event| own_id != Some(event.id.as_str()))
        .filter(|event| candidate.overlaps(*event))
        .collect();

    if !conflicts.is_empty() {
        tracing::debug!(
            date = %candidate.slot_date(),
            conflicts = conflicts.len(),
            "Candidate overlaps existing events"
        );
    }
    conflicts
}
