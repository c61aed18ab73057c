//! Materialization of the occurrences visible in a date range.

use kairos_core::types::DateRange;
use kairos_store::model::{Event, Occurrence};

use super::recurrence::RecurrenceExpander;

/// ## Summary
/// Computes calendar views from a collection of stored events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewMaterializer {
    expander: RecurrenceExpander,
}

impl ViewMaterializer {
    #[must_use]
    pub const fn new(expander: RecurrenceExpander) -> Self {
        Self { expander }
    }

    /// ## Summary
    /// Returns every occurrence of `events` dated inside `range` (inclusive).
    ///
    /// A stored event is shown on its own date unless that date is one of
    /// its exceptions. Repeating events are followed by their in-range
    /// virtual occurrences. Output keeps the order of `events`; occurrences
    /// of different events are not interleaved by date.
    ///
    /// ## Side Effects
    /// None - `events` is only read.
    #[must_use]
    pub fn materialize(&self, events: &[Event], range: DateRange) -> Vec<Occurrence> {
        let mut visible = Vec::new();

        for event in events {
            if range.contains(event.date) && !event.repeat.is_exception(event.date) {
                visible.push(Occurrence::Persisted(event.clone()));
            }

            if event.repeat.is_repeating() {
                visible.extend(
                    self.expander
                        .expand(event)
                        .into_iter()
                        .filter(|occurrence| range.contains(occurrence.date())),
                );
            }
        }

        tracing::trace!(
            start = %range.start,
            end = %range.end,
            events = events.len(),
            visible = visible.len(),
            "Materialized view"
        );
        visible
    }
}

/// ## Summary
/// Materializes `range` with the default expander.
#[must_use]
pub fn materialize(events: &[Event], range: DateRange) -> Vec<Occurrence> {
    ViewMaterializer::default().materialize(events, range)
}

/// ## Summary
/// Keeps the occurrences whose title, description or location contains
/// `term`, ignoring case. An empty term keeps everything.
#[must_use]
pub fn filter_by_term(occurrences: Vec<Occurrence>, term: &str) -> Vec<Occurrence> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return occurrences;
    }

    occurrences
        .into_iter()
        .filter(|occurrence| {
            let event = occurrence.event();
            [&event.title, &event.description, &event.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
