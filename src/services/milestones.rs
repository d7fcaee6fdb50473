// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed achievement milestones shown on the impact dashboard.

use crate::models::{ActivityRecord, Milestone, Streak};
use crate::services::impact::total_saved_kg;

/// Streak length that unlocks the week milestone.
pub const WEEK_STREAK_DAYS: u32 = 7;

/// Cumulative savings that unlock the savings milestone (kg CO₂e).
pub const SAVINGS_GOAL_KG: f64 = 100.0;

/// Evaluate all milestones against the given snapshot.
///
/// Always returns the same three entries in the same order.
pub fn detect_milestones(activities: &[ActivityRecord], streak: &Streak) -> Vec<Milestone> {
    vec![
        Milestone {
            label: "First Action".to_string(),
            description: "Log your first eco-friendly activity".to_string(),
            achieved: !activities.is_empty(),
        },
        Milestone {
            label: "One Week Streak".to_string(),
            description: format!("Log activities {WEEK_STREAK_DAYS} days in a row"),
            achieved: streak.best >= WEEK_STREAK_DAYS || streak.current >= WEEK_STREAK_DAYS,
        },
        Milestone {
            label: "100kg CO₂e Saved".to_string(),
            description: "Avoid 100kg of CO₂e emissions in total".to_string(),
            achieved: total_saved_kg(activities) >= SAVINGS_GOAL_KG,
        },
    ]
}
