//! Tests for series expansion as seen through the view endpoint.

use chrono::{NaiveDate, NaiveTime};
use salvo::http::StatusCode;

use kairos_test::component::config::CalendarConfig;
use kairos_test::component::store::{Event, RepeatRule};
use kairos_test::component::types::RepeatType;

use super::helpers::*;

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
}

fn seeded_series(id: &str, kind: RepeatType, anchor: &str, end_date: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Series {id}"),
        description: String::new(),
        location: String::new(),
        category: String::new(),
        date: date(anchor),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
        repeat: RepeatRule::new(kind, 1, Some(date(end_date))),
        notification_time: 10,
    }
}

/// ## Summary
/// Test that a daily series fills every day of its range.
#[test_log::test(tokio::test)]
async fn daily_series_fills_range() {
    let calendar = TestCalendar::new();
    create_event(
        &calendar,
        series_form("Standup", "daily", "2025-08-25", "2025-08-30"),
    )
    .await;
    assert_eq!(
        view_dates(&calendar, "2025-08-25", "2025-08-30").await,
        vec![
            "2025-08-25",
            "2025-08-26",
            "2025-08-27",
            "2025-08-28",
            "2025-08-29",
            "2025-08-30"
        ]
    );
}

/// ## Summary
/// Test that a monthly series on the 31st only lands in 31-day months.
#[test_log::test(tokio::test)]
async fn monthly_31st_skips_short_months() {
    let calendar = TestCalendar::with_events(vec![seeded_series(
        "month-end",
        RepeatType::Monthly,
        "2025-01-31",
        "2025-12-31",
    )]);
    let dates = view_dates(&calendar, "2025-01-01", "2025-12-31").await;
    assert_eq!(
        dates,
        vec![
            "2025-01-31",
            "2025-03-31",
            "2025-05-31",
            "2025-07-31",
            "2025-08-31",
            "2025-10-31",
            "2025-12-31"
        ]
    );
}

/// ## Summary
/// Test that a yearly Feb 29 series only lands in leap years.
#[test_log::test(tokio::test)]
async fn leap_day_series_skips_common_years() {
    let calendar = TestCalendar::with_events(vec![seeded_series(
        "leap",
        RepeatType::Yearly,
        "2024-02-29",
        "2032-12-31",
    )]);
    assert_eq!(
        view_dates(&calendar, "2025-01-01", "2032-12-31").await,
        vec!["2028-02-29", "2032-02-29"]
    );
}

/// ## Summary
/// Test the week and month views around a date, with search.
#[test_log::test(tokio::test)]
async fn week_and_month_views_with_search() {
    let calendar = TestCalendar::new();
    create_event(
        &calendar,
        series_form("Standup", "daily", "2025-10-01", "2025-10-31"),
    )
    .await;
    create_event(&calendar, event_form("Dentist", "2025-10-15", "15:00", "16:00")).await;

    // 2025-10-15 is a Wednesday; its week runs Sunday 12th to Saturday 18th.
    let week = TestRequest::get("/api/events/view?date=2025-10-15&view=week")
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(week["occurrences"].as_array().map(Vec::len), Some(8));

    let month = TestRequest::get("/api/events/view?date=2025-10-15&view=month&q=dentist")
        .send(&calendar)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let found = month["occurrences"].as_array().cloned().unwrap_or_default();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "Dentist");
}

/// ## Summary
/// Test that the configured occurrence cap bounds a series.
#[test_log::test(tokio::test)]
async fn occurrence_cap_bounds_expansion() {
    let calendar = TestCalendar::with_config(
        vec![seeded_series("daily", RepeatType::Daily, "2025-01-01", "2025-12-31")],
        &CalendarConfig { max_occurrences: 5 },
    );
    let dates = view_dates(&calendar, "2025-01-01", "2025-12-31").await;
    assert_eq!(
        dates,
        vec!["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-04", "2025-01-05"]
    );
}
