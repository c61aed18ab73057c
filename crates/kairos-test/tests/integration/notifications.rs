//! Tests for the reminder endpoint.

use salvo::http::StatusCode;

use super::helpers::*;

fn notifications_path(at: &str, notified: &[&str]) -> String {
    if notified.is_empty() {
        format!("/api/notifications?at={at}")
    } else {
        format!("/api/notifications?at={at}&notified={}", notified.join(","))
    }
}

/// ## Summary
/// Test that reminders come due inside the notification window.
#[test_log::test(tokio::test)]
async fn reminder_is_due_inside_window() {
    let calendar = TestCalendar::new();
    let created = create_event(&calendar, event_form("Meeting", "2025-10-15", "10:00", "11:00")).await;

    let body = TestRequest::get(&notifications_path("2025-10-15T09:50", &[]))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["reminders"][0]["eventId"], created["id"]);
    assert_eq!(body["reminders"][0]["message"], "Meeting starts in 10 minutes");

    let body = TestRequest::get(&notifications_path("2025-10-15T09:49", &[]))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["reminders"].as_array().map(Vec::len), Some(0));
}

/// ## Summary
/// Test that ids the client already showed are not repeated, and that
/// virtual occurrences are reminded under their own id.
#[test_log::test(tokio::test)]
async fn notified_ids_are_skipped() {
    let calendar = TestCalendar::new();
    let created = create_event(
        &calendar,
        series_form("Standup", "daily", "2025-10-14", "2025-10-20"),
    )
    .await;
    let occurrence_id = format!(
        "{}-recurring-2025-10-15",
        created["id"].as_str().unwrap_or_default()
    );

    let body = TestRequest::get(&notifications_path("2025-10-15T08:55", &[]))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["reminders"][0]["eventId"], occurrence_id.as_str());

    let body = TestRequest::get(&notifications_path("2025-10-15T08:55", &[&occurrence_id]))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["reminders"].as_array().map(Vec::len), Some(0));
}

/// ## Summary
/// Test that a malformed instant is a client error.
#[test_log::test(tokio::test)]
async fn malformed_instant_is_rejected() {
    let calendar = TestCalendar::new();
    TestRequest::get(&notifications_path("yesterday", &[]))
        .send(&calendar)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// ## Summary
/// Test that an occurrence just after midnight is reminded on the evening
/// before.
#[test_log::test(tokio::test)]
async fn reminder_crosses_midnight() {
    let calendar = TestCalendar::new();
    let mut form = series_form("Night shift", "daily", "2025-10-14", "2025-10-20");
    form["startTime"] = json!("00:05");
    form["endTime"] = json!("01:00");
    let created = create_event(&calendar, form).await;
    let occurrence_id = format!(
        "{}-recurring-2025-10-16",
        created["id"].as_str().unwrap_or_default()
    );

    let body = TestRequest::get(&notifications_path("2025-10-15T23:58", &[]))
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let reminders = body["reminders"].as_array().cloned().unwrap_or_default();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0]["eventId"], occurrence_id.as_str());
    assert_eq!(reminders[0]["startsAt"], "2025-10-16T00:05:00");
}
