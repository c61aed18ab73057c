//! Recurrence expansion, view materialization, occurrence editing and
//! overlap detection for Kairos calendars.

pub mod calendar;
pub mod error;
