// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Kelp Impact: eco-activity impact analytics
//!
//! This crate aggregates a user's logged eco-activities into the savings
//! charts, category breakdowns, streaks and milestones shown on the Kelp
//! impact dashboard, and serves them over a small JSON API.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
