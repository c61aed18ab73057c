use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::util::date::{format_date, month_bounds, week_bounds};

/// How often a series repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    #[must_use]
    pub const fn is_repeating(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Week,
    Month,
}

impl std::str::FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(CoreError::InvalidInput(format!("unknown view mode: {other}"))),
        }
    }
}

/// ## Summary
/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// ## Summary
    /// Creates a range from `start` to `end`, both inclusive.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if end < start {
            return Err(CoreError::ValidationError(format!(
                "range end {} is before start {}",
                format_date(end),
                format_date(start)
            )));
        }
        Ok(Self { start, end })
    }

    /// A range covering one day.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// ## Summary
    /// The range a calendar view shows around `current`.
    ///
    /// Week views run Sunday through Saturday; month views cover the whole
    /// month of `current`.
    #[must_use]
    pub fn around(mode: ViewMode, current: NaiveDate) -> Self {
        let (start, end) = match mode {
            ViewMode::Week => week_bounds(current),
            ViewMode::Month => month_bounds(current),
        };
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
