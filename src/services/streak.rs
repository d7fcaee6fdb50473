// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logging streaks over calendar days.

use chrono::{Days, FixedOffset, NaiveDate};
use std::collections::BTreeSet;

use crate::models::{ActivityRecord, Streak};

/// Distinct calendar days (in `offset`) with at least one logged activity.
///
/// Any footprint sign counts: logging an emission still keeps a streak alive.
pub fn logged_days(activities: &[ActivityRecord], offset: &FixedOffset) -> BTreeSet<NaiveDate> {
    activities.iter().map(|a| a.local_date(offset)).collect()
}

/// Compute the current and best streak as of `today`.
pub fn compute_streak(
    activities: &[ActivityRecord],
    today: NaiveDate,
    offset: &FixedOffset,
) -> Streak {
    let days = logged_days(activities, offset);

    Streak {
        current: current_run(&days, today),
        best: best_run(&days),
    }
}

/// Longest run of consecutive days in an ordered set.
fn best_run(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == day => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }

    best
}

/// Walk back from `today` one day at a time until the first missing day.
fn current_run(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut run = 0;
    let mut day = Some(today);

    while let Some(d) = day.filter(|d| days.contains(d)) {
        run += 1;
        day = d.checked_sub_days(Days::new(1));
    }

    run
}
