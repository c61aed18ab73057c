//! Calendar engine.
//!
//! Everything except [`service`] is a pure function of the event collection
//! it is handed; [`service::CalendarService`] snapshots the store, runs the
//! engine and writes the results back.

pub mod editor;
pub mod overlap;
pub mod recurrence;
pub mod reminder;
pub mod service;
pub mod view;

pub use editor::{DetachedDelete, DetachedUpdate, detach_for_delete, detach_for_update};
pub use overlap::{TimeSlot, find_overlaps};
pub use recurrence::{RecurrenceExpander, expand};
pub use reminder::{Reminder, due_reminders};
pub use service::{CalendarService, SubmitOutcome};
pub use view::{ViewMaterializer, filter_by_term, materialize};
