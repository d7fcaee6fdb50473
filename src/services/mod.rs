// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - impact aggregation logic.

pub mod impact;
pub mod milestones;
pub mod streak;

pub use impact::{
    monthly_series, series, summarize, total_saved_kg, weekly_series, year_to_date, yearly_series,
};
pub use milestones::detect_milestones;
pub use streak::compute_streak;
