//! Tests for creating, editing and deleting stored events.

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// Test that a created event is listed and shown on its date.
#[test_log::test(tokio::test)]
async fn created_event_is_listed_and_viewed() {
    let calendar = TestCalendar::new();
    let created = create_event(&calendar, event_form("Lunch", "2025-10-15", "12:00", "13:00")).await;
    assert_eq!(created["startTime"], "12:00");

    let body = TestRequest::get(&events_path(None))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["events"][0]["id"], created["id"]);

    assert_eq!(
        view_dates(&calendar, "2025-10-01", "2025-10-31").await,
        vec!["2025-10-15"]
    );
    assert!(view_dates(&calendar, "2025-11-01", "2025-11-30").await.is_empty());
}

/// ## Summary
/// Test the overlap check, the 409 answer and the confirmed save.
#[test_log::test(tokio::test)]
async fn overlap_requires_confirmation() {
    let calendar = TestCalendar::new();
    create_event(&calendar, event_form("A", "2025-10-15", "09:00", "10:00")).await;
    let late = event_form("B", "2025-10-15", "09:30", "10:30");

    let body = TestRequest::post("/api/events/overlaps")
        .json(json!({ "event": late }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["overlaps"][0]["title"], "A");

    let body = TestRequest::post(&events_path(None))
        .json(json!({ "event": late }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::CONFLICT)
        .json();
    assert_eq!(body["overlaps"].as_array().map(Vec::len), Some(1));

    TestRequest::post(&events_path(None))
        .json(json!({ "event": late, "confirmOverlap": true }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(
        view_dates(&calendar, "2025-10-15", "2025-10-15").await.len(),
        2
    );
}

/// ## Summary
/// Test that moving an event does not report it as overlapping itself.
#[test_log::test(tokio::test)]
async fn update_in_place_skips_itself_in_overlap_check() {
    let calendar = TestCalendar::new();
    let created = create_event(&calendar, event_form("A", "2025-10-15", "09:00", "10:00")).await;
    let id = created["id"].as_str().unwrap_or_default().to_string();

    let body = TestRequest::post("/api/events/overlaps")
        .json(json!({
            "event": event_form("A", "2025-10-15", "09:30", "10:30"),
            "targetId": id
        }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["overlaps"].as_array().map(Vec::len), Some(0));

    let body = TestRequest::put(&events_path(Some(&id)))
        .json(json!({ "event": event_form("A moved", "2025-10-15", "09:30", "10:30") }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["title"], "A moved");
}

/// ## Summary
/// Test that deleting a stored event removes it.
#[test_log::test(tokio::test)]
async fn delete_removes_stored_event() {
    let calendar = TestCalendar::new();
    let created = create_event(&calendar, event_form("A", "2025-10-15", "09:00", "10:00")).await;
    let id = created["id"].as_str().unwrap_or_default().to_string();

    TestRequest::delete(&events_path(Some(&id)))
        .send(&calendar)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    TestRequest::delete(&events_path(Some(&id)))
        .send(&calendar)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert!(view_dates(&calendar, "2025-10-15", "2025-10-15").await.is_empty());
}

/// ## Summary
/// Test the validation errors of the submit endpoint.
#[test_log::test(tokio::test)]
async fn invalid_forms_are_rejected() {
    let calendar = TestCalendar::new();

    let blank = event_form(" ", "2025-10-15", "09:00", "10:00");
    let body = TestRequest::post(&events_path(None))
        .json(json!({ "event": blank }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert!(body["error"].as_str().is_some_and(|e| e.contains("title")));

    let ends_early = series_form("Standup", "daily", "2025-10-15", "2025-10-15");
    TestRequest::post(&events_path(None))
        .json(json!({ "event": ends_early }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let bad_time = event_form("A", "2025-10-15", "9am", "10:00");
    TestRequest::post(&events_path(None))
        .json(json!({ "event": bad_time }))
        .send(&calendar)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// ## Summary
/// Test the healthcheck route.
#[test_log::test(tokio::test)]
async fn healthcheck_answers_ok() {
    let calendar = TestCalendar::new();
    let response = TestRequest::get("/api/app/healthcheck")
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body, "OK");
}
