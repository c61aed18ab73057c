//! Expansion of a repeating event into its virtual occurrences.
//!
//! The candidate dates come from the `rrule` crate: a series anchored on
//! `date` with rule `type` and inclusive `endDate` becomes
//! `FREQ=<type>;UNTIL=<endDate>T000000Z` over a midnight-UTC DTSTART.
//! RFC 5545 drops candidates whose day does not exist in the target month,
//! so a series on the 31st only lands in 31-day months and a Feb 29 yearly
//! series only in leap years.

use chrono::{DateTime, NaiveDate, NaiveTime};
use rrule::{RRule, RRuleSet, Tz, Unvalidated};

use kairos_core::constants::DEFAULT_MAX_OCCURRENCES;
use kairos_core::types::RepeatType;
use kairos_store::model::{Event, Occurrence};

/// ## Summary
/// Expands series into virtual occurrences, capped per series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceExpander {
    max_occurrences: u16,
}

impl Default for RecurrenceExpander {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OCCURRENCES)
    }
}

impl RecurrenceExpander {
    #[must_use]
    pub const fn new(max_occurrences: u16) -> Self {
        Self { max_occurrences }
    }

    /// ## Summary
    /// Returns the virtual occurrences of `series`, in date order.
    ///
    /// The anchor date itself and dates listed in the series' exceptions are
    /// never returned. The result is empty when the event does not repeat,
    /// has no end date, ends before its anchor, or its rule cannot be built.
    #[must_use]
    pub fn expand(&self, series: &Event) -> Vec<Occurrence> {
        let Some(freq) = frequency(series.repeat.kind) else {
            return Vec::new();
        };
        let Some(end_date) = series.repeat.end_date else {
            tracing::trace!(id = %series.id, "Repeating event has no end date");
            return Vec::new();
        };
        if end_date < series.date {
            tracing::trace!(id = %series.id, %end_date, "End date precedes anchor date");
            return Vec::new();
        }
        if series.repeat.interval > 1 {
            tracing::trace!(
                id = %series.id,
                interval = series.repeat.interval,
                "Repeat interval is not applied as a stride"
            );
        }

        let Some(rrule_set) = build_rrule_set(series, freq, end_date) else {
            return Vec::new();
        };

        let result = rrule_set.all(self.max_occurrences);
        if result.limited {
            tracing::warn!(
                id = %series.id,
                max_occurrences = self.max_occurrences,
                "Series expansion was truncated"
            );
        }

        let occurrences: Vec<Occurrence> = result
            .dates
            .iter()
            .map(DateTime::date_naive)
            .filter(|date| *date != series.date)
            .map(|date| Occurrence::instance_of(series, date))
            .collect();

        tracing::trace!(
            id = %series.id,
            count = occurrences.len(),
            "Expanded series"
        );
        occurrences
    }
}

/// ## Summary
/// Expands `series` with the default occurrence cap.
#[must_use]
pub fn expand(series: &Event) -> Vec<Occurrence> {
    RecurrenceExpander::default().expand(series)
}

const fn frequency(kind: RepeatType) -> Option<&'static str> {
    match kind {
        RepeatType::None => None,
        RepeatType::Daily => Some("DAILY"),
        RepeatType::Weekly => Some("WEEKLY"),
        RepeatType::Monthly => Some("MONTHLY"),
        RepeatType::Yearly => Some("YEARLY"),
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Tz> {
    date.and_time(NaiveTime::MIN).and_utc().with_timezone(&Tz::UTC)
}

/// Builds the rule set of `series`, with its exceptions as EXDATEs.
fn build_rrule_set(series: &Event, freq: &str, end_date: NaiveDate) -> Option<RRuleSet> {
    let rrule_text = format!("FREQ={freq};UNTIL={}T000000Z", end_date.format("%Y%m%d"));

    let rrule = match rrule_text.parse::<RRule<Unvalidated>>() {
        Ok(rule) => rule,
        Err(err) => {
            tracing::warn!(id = %series.id, rrule = %rrule_text, error = %err, "Invalid repeat rule");
            return None;
        }
    };

    let rrule_set = match rrule.build(midnight_utc(series.date)) {
        Ok(set) => set,
        Err(err) => {
            tracing::warn!(id = %series.id, rrule = %rrule_text, error = %err, "Repeat rule rejected");
            return None;
        }
    };

    if series.repeat.exceptions.is_empty() {
        return Some(rrule_set);
    }

    let exdates: Vec<DateTime<Tz>> = series
        .repeat
        .exceptions
        .iter()
        .map(|date| midnight_utc(*date))
        .collect();
    Some(rrule_set.set_exdates(exdates))
}
