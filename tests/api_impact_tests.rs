// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Impact API tests.
//!
//! Exercise the JSON endpoints end to end through the router, including
//! the year-to-date window and request validation.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use kelp_impact::config::Config;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{activity, post_json, post_raw};

#[tokio::test]
async fn test_health() {
    let (app, _) = common::create_test_app();

    let request = Request::get("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get("Cache-Control").unwrap(), "no-store");
}

#[tokio::test]
async fn test_weekly_summary() {
    let (app, _) = common::create_test_app();
    let payload = json!({
        "now": "2024-06-05T12:00:00Z",
        "activities": [
            activity("2024-06-03", -5.0, Some("travel")),
            activity("2024-06-04", -3.0, Some("food")),
        ],
    });

    let (status, body) = post_json(app, "/api/impact?view=week", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"], "week");
    assert_eq!(body["series"][0]["label"], "Mon");
    assert_eq!(body["series"][0]["savings"], 5.0);
    assert_eq!(body["series"][0]["categories"]["travel"], 5.0);
    assert_eq!(body["series"][1]["savings"], 3.0);
    assert_eq!(body["series"][2]["savings"], 0.0);
    assert_eq!(body["breakdown"], json!({ "food": 3.0, "travel": 5.0 }));
    assert_eq!(body["streak"], json!({ "current": 0, "best": 2 }));
    assert_eq!(body["milestones"][0]["achieved"], true);
    assert_eq!(body["milestones"][1]["achieved"], false);
    assert_eq!(body["milestones"][2]["achieved"], false);
    assert_eq!(body["total_saved_kg"], 8.0);
    assert_eq!(body["activity_count"], 2);
    assert_eq!(body["generated_at"], "2024-06-05T12:00:00Z");
}

#[tokio::test]
async fn test_year_to_date_window_is_default() {
    let (app, _) = common::create_test_app();
    let payload = json!({
        "now": "2024-06-05T12:00:00Z",
        "activities": [
            activity("2023-01-10T10:00:00Z", -4.0, Some("food")),
            activity("2024-01-10T10:00:00Z", -6.0, Some("food")),
        ],
    });

    let uri = "/api/impact/series?view=month";
    let (status, ytd) = post_json(app.clone(), uri, payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ytd["series"][0]["label"], "Jan");
    assert_eq!(ytd["series"][0]["savings"], 6.0);

    let uri = "/api/impact/series?view=month&window=all";
    let (status, all) = post_json(app, uri, payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["series"][0]["savings"], 10.0);
}

#[tokio::test]
async fn test_row_logged_just_after_now_is_kept() {
    let (app, _) = common::create_test_app();
    let payload = json!({
        "now": "2024-06-05T12:00:00Z",
        "activities": [activity("2024-06-05T12:00:01Z", -1.0, None)],
    });

    let (status, body) = post_json(app, "/api/impact", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activity_count"], 1);
    assert_eq!(body["streak"], json!({ "current": 1, "best": 1 }));
    assert_eq!(body["milestones"][0]["achieved"], true);
    assert_eq!(body["total_saved_kg"], 1.0);
}

#[tokio::test]
async fn test_streak_endpoint_counts_emissions() {
    let (app, _) = common::create_test_app();
    let payload = json!({
        "now": "2024-06-05T20:00:00Z",
        "activities": [
            activity("2024-06-04T09:00:00Z", -1.0, None),
            activity("2024-06-05T09:00:00Z", 10.0, Some("travel")),
        ],
    });

    let (status, body) = post_json(app, "/api/impact/streak", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "current": 2, "best": 2 }));
}

#[tokio::test]
async fn test_streak_and_milestones_have_no_view() {
    let (app, _) = common::create_test_app();
    let payload = json!({
        "now": "2024-06-05T20:00:00Z",
        "activities": [activity("2024-06-05T09:00:00Z", -1.0, None)],
    });

    let uri = "/api/impact/streak?view=decade";
    let (status, body) = post_json(app.clone(), uri, payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "current": 1, "best": 1 }));

    let uri = "/api/impact/milestones?view=decade";
    let (status, _) = post_json(app.clone(), uri, payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    // The window still applies and is still validated.
    let uri = "/api/impact/milestones?window=forever";
    let (status, _) = post_json(app, uri, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_milestones_endpoint() {
    let (app, _) = common::create_test_app();
    let payload = json!({
        "now": "2024-06-05T20:00:00Z",
        "activities": [activity("2024-03-01T09:00:00Z", -120.0, Some("energy"))],
    });

    let (status, body) = post_json(app, "/api/impact/milestones", payload).await;

    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        ["First Action", "One Week Streak", "100kg CO₂e Saved"]
    );
    assert_eq!(body[0]["achieved"], true);
    assert_eq!(body[1]["achieved"], false);
    assert_eq!(body[2]["achieved"], true);
}

#[tokio::test]
async fn test_now_offset_moves_day_boundaries() {
    let (app, _) = common::create_test_app();
    // 06:30Z on Monday is still Sunday evening in UTC-7.
    let payload = json!({
        "now": "2024-06-09T23:45:00-07:00",
        "activities": [activity("2024-06-10T06:30:00Z", -2.0, None)],
    });

    let uri = "/api/impact/series?view=week";
    let (status, body) = post_json(app, uri, payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["series"][6]["label"], "Sun");
    assert_eq!(body["series"][6]["savings"], 2.0);
}

#[tokio::test]
async fn test_rejects_unknown_view() {
    let (app, _) = common::create_test_app();
    let payload = json!({ "activities": [] });

    let (status, body) = post_json(app, "/api/impact?view=decade", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_rejects_unknown_window() {
    let (app, _) = common::create_test_app();
    let payload = json!({ "activities": [] });

    let (status, _) = post_json(app, "/api/impact?window=forever", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejects_invalid_now() {
    let (app, _) = common::create_test_app();
    let payload = json!({ "now": "tomorrow", "activities": [] });

    let (status, body) = post_json(app, "/api/impact", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_rejects_malformed_body() {
    let (app, _) = common::create_test_app();
    let body = "{\"activities\": [".to_string();

    let (status, body) = post_raw(app, "/api/impact", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_rejects_bad_created_at() {
    let (app, _) = common::create_test_app();
    let payload = json!({
        "activities": [{ "created_at": "someday", "carbon_footprint_kg": -1.0 }],
    });

    let (status, _) = post_json(app, "/api/impact", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejects_too_many_activities() {
    let config = Config {
        max_activities: 2,
        ..Config::test_default()
    };
    let (app, _) = common::create_test_app_with_config(config);

    let activities: Vec<_> = (1..=3)
        .map(|d| activity(&format!("2024-06-0{d}"), -1.0, None))
        .collect();
    let payload = json!({ "now": "2024-06-05T12:00:00Z", "activities": activities });

    let (status, body) = post_json(app, "/api/impact?window=all", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("Too many activities"));
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let (app, _) = common::create_test_app();

    let (status, body) = post_json(app, "/api/nothing-here", json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["details"], "/api/nothing-here");
}
