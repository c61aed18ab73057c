//! Canonical date and time representations.
//!
//! ## Summary
//! Every boundary of the calendar exchanges dates as `YYYY-MM-DD` and
//! times of day as `HH:MM`, without zone offsets. These helpers convert
//! between those strings and `chrono` values and compute view bounds.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CoreError, CoreResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ## Summary
/// Parses a `YYYY-MM-DD` date.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the input is not a valid calendar date.
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid date {value:?}: {err}")))
}

/// Formats a time of day as `HH:MM`.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// ## Summary
/// Parses an `HH:MM` time of day.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the input is not a valid time.
pub fn parse_time(value: &str) -> CoreResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid time {value:?}: {err}")))
}

/// ## Summary
/// Parses a local `YYYY-MM-DDTHH:MM` instant.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the input is not a valid date and time.
pub fn parse_datetime(value: &str) -> CoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid date-time {value:?}: {err}")))
}

/// ## Summary
/// Returns the Sunday-to-Saturday week containing `date`.
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// ## Summary
/// Returns the first and last day of the month containing `date`.
#[must_use]
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date
        .checked_sub_days(Days::new(u64::from(date.day0())))
        .unwrap_or(NaiveDate::MIN);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// Serde adapter for `HH:MM` times.
pub mod time_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// ## Errors
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    /// ## Errors
    /// Fails if the value is not an `HH:MM` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional `HH:MM` times.
pub mod option_time_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// ## Errors
    /// Propagates serializer errors.
    #[expect(clippy::ref_option, reason = "signature required by serde `with`")]
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_some(&super::format_time(*time)),
            None => serializer.serialize_none(),
        }
    }

    /// ## Errors
    /// Fails if a present value is not an `HH:MM` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_time(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
