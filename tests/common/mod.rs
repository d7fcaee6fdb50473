// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use kelp_impact::config::Config;
use kelp_impact::routes::create_router;
use kelp_impact::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with the default test config.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_config(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState { config });
    (create_router(state.clone()), state)
}

/// POST a raw body and return the status plus the parsed JSON response.
#[allow(dead_code)]
pub async fn post_raw(app: axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// POST a JSON body and return the status plus the parsed JSON response.
#[allow(dead_code)]
pub async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

/// Activity row in the shape the activity store returns.
#[allow(dead_code)]
pub fn activity(created_at: &str, kg: f64, category: Option<&str>) -> Value {
    serde_json::json!({
        "id": format!("{created_at}/{kg}"),
        "user_id": "user-1",
        "created_at": created_at,
        "carbon_footprint_kg": kg,
        "category": category,
    })
}
