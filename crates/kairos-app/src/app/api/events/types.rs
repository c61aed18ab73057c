use serde::{Deserialize, Serialize};

use kairos_store::model::{Event, EventForm, Occurrence};

/// ## Summary
/// Body of `POST /events` and `PUT /events/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub event: EventForm,
    /// Save even if the event overlaps others.
    #[serde(default)]
    pub confirm_overlap: bool,
}

/// ## Summary
/// Body of `POST /events/overlaps`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapRequest {
    pub event: EventForm,
    /// Id of the event or occurrence being edited, if any.
    #[serde(default)]
    pub target_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct OccurrencesResponse {
    pub occurrences: Vec<Occurrence>,
}

#[derive(Debug, Serialize)]
pub struct OverlapsResponse {
    pub overlaps: Vec<Event>,
}
