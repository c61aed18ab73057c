pub mod event;
pub mod occurrence;

pub use event::{Event, EventForm, EventPatch, RepeatRule};
pub use occurrence::{Occurrence, OccurrenceRef};
