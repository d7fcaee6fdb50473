// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Impact API routes.
//!
//! The caller posts the activity snapshot it already holds; nothing is
//! stored server-side.

use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, ImpactSummary, ImpactView, Milestone, SeriesReport, Streak};
use crate::services::{self, compute_streak, detect_milestones};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Impact API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/impact", post(post_summary))
        .route("/api/impact/series", post(post_series))
        .route("/api/impact/streak", post(post_streak))
        .route("/api/impact/milestones", post(post_milestones))
}

// ─── Request Parsing ─────────────────────────────────────────

/// Query for the chart endpoints.
#[derive(Debug, Deserialize)]
struct SeriesQuery {
    /// week | month | year (default week)
    view: Option<String>,
    /// ytd | all (default ytd)
    window: Option<String>,
}

/// Query for the streak and milestone endpoints, which have no view.
#[derive(Debug, Deserialize)]
struct WindowQuery {
    /// ytd | all (default ytd)
    window: Option<String>,
}

/// Request body shared by all impact endpoints.
#[derive(Debug, Deserialize)]
pub struct ImpactRequest {
    pub activities: Vec<ActivityRecord>,
    /// Instant to compute against (RFC3339). Defaults to the server clock
    /// in the configured offset.
    #[serde(default)]
    pub now: Option<String>,
}

type Payload = std::result::Result<Json<ImpactRequest>, JsonRejection>;

/// Which records take part in the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    /// Records in the calendar year of `now`
    YearToDate,
    /// Everything posted
    All,
}

fn parse_view(raw: Option<&str>) -> Result<ImpactView> {
    match raw.map(str::parse::<ImpactView>) {
        None => Ok(ImpactView::default()),
        Some(Ok(view)) => Ok(view),
        Some(Err(e)) => Err(AppError::BadRequest(format!("Invalid 'view' parameter: {e}"))),
    }
}

fn parse_window(raw: Option<&str>) -> Result<Window> {
    match raw {
        None | Some("ytd") => Ok(Window::YearToDate),
        Some("all") => Ok(Window::All),
        Some(other) => Err(AppError::BadRequest(format!(
            "Invalid 'window' parameter: unknown window '{other}'"
        ))),
    }
}

fn parse_now(raw: Option<&str>, default_offset: &FixedOffset) -> Result<DateTime<FixedOffset>> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw).map_err(|_| {
            AppError::BadRequest("Invalid 'now' field: must be RFC3339 datetime".to_string())
        }),
        None => Ok(Utc::now().with_timezone(default_offset)),
    }
}

/// Validated inputs for one aggregation.
struct Snapshot {
    activities: Vec<ActivityRecord>,
    now: DateTime<FixedOffset>,
}

fn snapshot(state: &AppState, window: Option<&str>, payload: Payload) -> Result<Snapshot> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let window = parse_window(window)?;
    let now = parse_now(request.now.as_deref(), &state.config.default_offset)?;

    if request.activities.len() > state.config.max_activities {
        return Err(AppError::BadRequest(format!(
            "Too many activities: {} (max {})",
            request.activities.len(),
            state.config.max_activities
        )));
    }

    let activities = match window {
        Window::YearToDate => services::year_to_date(&request.activities, now),
        Window::All => request.activities,
    };

    tracing::debug!(
        window = ?window,
        activities = activities.len(),
        now = %now,
        "Aggregating impact snapshot"
    );

    Ok(Snapshot { activities, now })
}

// ─── Handlers ────────────────────────────────────────────────

/// Full dashboard summary for one view.
async fn post_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
    payload: Payload,
) -> Result<Json<ImpactSummary>> {
    let view = parse_view(query.view.as_deref())?;
    let snap = snapshot(&state, query.window.as_deref(), payload)?;
    Ok(Json(services::summarize(&snap.activities, view, snap.now)))
}

/// Chart series and breakdown only.
async fn post_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
    payload: Payload,
) -> Result<Json<SeriesReport>> {
    let view = parse_view(query.view.as_deref())?;
    let snap = snapshot(&state, query.window.as_deref(), payload)?;
    Ok(Json(services::series(&snap.activities, view, snap.now)))
}

async fn post_streak(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WindowQuery>,
    payload: Payload,
) -> Result<Json<Streak>> {
    let snap = snapshot(&state, query.window.as_deref(), payload)?;
    let today = snap.now.date_naive();
    Ok(Json(compute_streak(&snap.activities, today, snap.now.offset())))
}

async fn post_milestones(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WindowQuery>,
    payload: Payload,
) -> Result<Json<Vec<Milestone>>> {
    let snap = snapshot(&state, query.window.as_deref(), payload)?;
    let today = snap.now.date_naive();
    let streak = compute_streak(&snap.activities, today, snap.now.offset());
    Ok(Json(detect_milestones(&snap.activities, &streak)))
}
