// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod impact;

pub use activity::{ActivityRecord, DEFAULT_CATEGORY};
pub use impact::{
    Breakdown, ChartPoint, ImpactSummary, ImpactView, Milestone, SeriesReport, Streak,
};
