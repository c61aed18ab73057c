//! Test helpers for integration tests.
//!
//! Each test builds its own service over a fresh in-memory store, so tests
//! run in parallel without sharing events.

use std::sync::Arc;

use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use serde_json::Value;

use kairos_test::app::api::routes;
use kairos_test::app::service_handler::CalendarServiceHandler;
use kairos_test::component::calendar::CalendarService;
use kairos_test::component::config::CalendarConfig;
use kairos_test::component::store::{Event, MemoryEventStore};

pub use serde_json::json;

/// A test service together with the store behind it.
pub struct TestCalendar {
    pub service: Service,
    pub store: MemoryEventStore,
}

impl Default for TestCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCalendar {
    /// Creates a service over an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    /// Creates a service over a store pre-populated with `events`.
    #[must_use]
    pub fn with_events(events: Vec<Event>) -> Self {
        Self::with_config(events, &CalendarConfig::default())
    }

    #[must_use]
    pub fn with_config(events: Vec<Event>, config: &CalendarConfig) -> Self {
        let store = MemoryEventStore::with_events(events);
        let calendar = CalendarService::new(Arc::new(store.clone()), config);

        // Matches the router built in main.rs
        let router = Router::new()
            .hoop(CalendarServiceHandler {
                service: Arc::new(calendar),
            })
            .push(routes());

        Self {
            service: Service::new(router),
            store,
        }
    }
}

/// Test request builder for the JSON API.
pub struct TestRequest {
    method: &'static str,
    path: String,
    body: Option<Value>,
}

impl TestRequest {
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new("GET", path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new("POST", path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new("PUT", path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new("DELETE", path)
    }

    fn new(method: &'static str, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
        }
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, calendar: &TestCalendar) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method {
            "POST" => TestClient::post(&url),
            "PUT" => TestClient::put(&url),
            "DELETE" => TestClient::delete(&url),
            _ => TestClient::get(&url),
        };
        if let Some(body) = &self.body {
            client = client.json(body);
        }

        let mut response = client.send(&calendar.service).await;
        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.take_string().await.unwrap_or_default();

        TestResponse { status, body }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}: {}",
            self.status, self.body
        );
        self
    }

    /// Parses the body as JSON, panicking with the raw body if it is not.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|err| panic!("Body is not JSON ({err}): {}", self.body))
    }
}

/// Events path, optionally with a trailing id.
#[must_use]
pub fn events_path(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/api/events/{id}"),
        None => "/api/events".to_string(),
    }
}

/// Materialized view path for an inclusive date range.
#[must_use]
pub fn view_path(start: &str, end: &str) -> String {
    format!("/api/events/view?start={start}&end={end}")
}

/// A one-hour event form starting at `start` on `date`.
#[must_use]
pub fn event_form(title: &str, date: &str, start: &str, end: &str) -> Value {
    json!({
        "title": title,
        "description": "",
        "location": "",
        "category": "work",
        "date": date,
        "startTime": start,
        "endTime": end,
        "repeat": { "type": "none", "interval": 0 },
        "notificationTime": 10
    })
}

/// An event form repeating `kind` from `date` through `end_date`.
#[must_use]
pub fn series_form(title: &str, kind: &str, date: &str, end_date: &str) -> Value {
    let mut form = event_form(title, date, "09:00", "10:00");
    form["repeat"] = json!({ "type": kind, "interval": 1, "endDate": end_date });
    form
}

/// Creates an event through the API and returns its JSON.
pub async fn create_event(calendar: &TestCalendar, form: Value) -> Value {
    TestRequest::post(&events_path(None))
        .json(json!({ "event": form }))
        .send(calendar)
        .await
        .assert_status(StatusCode::CREATED)
        .json()
}

/// Dates of the occurrences materialized for `start..=end`.
pub async fn view_dates(calendar: &TestCalendar, start: &str, end: &str) -> Vec<String> {
    let body = TestRequest::get(&view_path(start, end))
        .send(calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    body["occurrences"]
        .as_array()
        .map(|occurrences| {
            occurrences
                .iter()
                .filter_map(|o| o["date"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
