//! Persisted and computed occurrences of calendar events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kairos_core::constants::VIRTUAL_ID_MARKER;
use kairos_core::util::date::{format_date, parse_date};

use super::event::Event;

/// Builds the id of the occurrence of `series_id` on `date`.
#[must_use]
pub fn virtual_id(series_id: &str, date: NaiveDate) -> String {
    format!("{series_id}{VIRTUAL_ID_MARKER}{}", format_date(date))
}

/// ## Summary
/// One entry of a materialized calendar view.
///
/// A `Persisted` occurrence is a stored event shown on its own date. A
/// `Virtual` occurrence is computed from a series and exists only for the
/// duration of one materialization; its event carries every field of the
/// series except `id` and `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Occurrence {
    Persisted(Event),
    Virtual {
        #[serde(rename = "seriesId")]
        series_id: String,
        date: NaiveDate,
        event: Event,
    },
}

impl Occurrence {
    /// ## Summary
    /// Computes the occurrence of `series` on `date`.
    ///
    /// The repeat rule is copied unchanged, so the instance still reports
    /// itself as recurring.
    #[must_use]
    pub fn instance_of(series: &Event, date: NaiveDate) -> Self {
        let mut event = series.clone();
        event.id = virtual_id(&series.id, date);
        event.date = date;
        Self::Virtual {
            series_id: series.id.clone(),
            date,
            event,
        }
    }

    #[must_use]
    pub fn event(&self) -> &Event {
        match self {
            Self::Persisted(event) | Self::Virtual { event, .. } => event,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.event().id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.event().date
    }

    #[must_use]
    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual { .. })
    }
}

/// ## Summary
/// Target of an edit or delete request.
///
/// Clients only hold string ids, so a request for `{series}-recurring-{date}`
/// is routed to the occurrence of that series instead of a stored event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OccurrenceRef {
    Persisted(String),
    Virtual { series_id: String, date: NaiveDate },
}

impl OccurrenceRef {
    /// ## Summary
    /// Classifies an id received from a client.
    ///
    /// The id is split at the first virtual marker; it only names a virtual
    /// occurrence when the remainder is a canonical date and the series part
    /// is not empty.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        if let Some((series_id, raw_date)) = id.split_once(VIRTUAL_ID_MARKER)
            && !series_id.is_empty()
            && let Ok(date) = parse_date(raw_date)
        {
            return Self::Virtual {
                series_id: series_id.to_string(),
                date,
            };
        }
        Self::Persisted(id.to_string())
    }

    /// Id of the stored event this reference touches.
    #[must_use]
    pub fn stored_id(&self) -> &str {
        match self {
            Self::Persisted(id) | Self::Virtual { series_id: id, .. } => id,
        }
    }
}

impl std::fmt::Display for OccurrenceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persisted(id) => f.write_str(id),
            Self::Virtual { series_id, date } => f.write_str(&virtual_id(series_id, *date)),
        }
    }
}
