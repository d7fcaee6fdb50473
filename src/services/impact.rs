// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Impact aggregation engine.
//!
//! Turns a snapshot of a user's activity records into chart series,
//! category breakdowns, streaks and milestones. Everything here is pure:
//! the caller supplies `now`, and its offset decides which calendar day,
//! week, month and year each record falls in.
//!
//! Only negative footprints (avoided emissions) count as savings. Positive
//! and zero footprints are ignored by series and breakdowns but still count
//! as logged days for streaks.

use chrono::{DateTime, Datelike, Days, FixedOffset};

use crate::models::{
    ActivityRecord, Breakdown, ChartPoint, ImpactSummary, ImpactView, SeriesReport,
};
use crate::services::milestones::detect_milestones;
use crate::services::streak::compute_streak;
use crate::time_utils::{format_rfc3339, month_key, week_start};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of calendar years shown in the yearly view, ending with this year.
pub const YEARS_SHOWN: i32 = 4;

/// Sum savings per category over the given records.
pub fn breakdown<'a>(activities: impl IntoIterator<Item = &'a ActivityRecord>) -> Breakdown {
    let mut totals = Breakdown::new();
    for activity in activities {
        if let Some(kg) = activity.savings_kg() {
            *totals
                .entry(activity.category_label().to_string())
                .or_insert(0.0) += kg;
        }
    }
    totals
}

/// Total savings over the given records (kg CO₂e).
pub fn total_saved_kg(activities: &[ActivityRecord]) -> f64 {
    activities
        .iter()
        .filter_map(ActivityRecord::savings_kg)
        .sum()
}

/// Daily savings for the Monday-to-Sunday week containing `now`.
///
/// The breakdown covers every record passed in, not just this week.
pub fn weekly_series(activities: &[ActivityRecord], now: DateTime<FixedOffset>) -> SeriesReport {
    let offset = now.offset();
    let monday = week_start(now.date_naive());

    let mut series: Vec<ChartPoint> = (0..7u64)
        .filter_map(|i| monday.checked_add_days(Days::new(i)))
        .map(|day| ChartPoint::empty(day.format("%a").to_string()))
        .collect();

    for activity in activities {
        let Some(kg) = activity.savings_kg() else {
            continue;
        };
        let days_in = activity
            .local_date(offset)
            .signed_duration_since(monday)
            .num_days();
        if let Some(point) = usize::try_from(days_in)
            .ok()
            .and_then(|i| series.get_mut(i))
        {
            point.add(activity.category_label(), kg);
        }
    }

    SeriesReport {
        view: ImpactView::Week,
        series,
        breakdown: breakdown(activities),
    }
}

/// Savings per calendar month name.
///
/// Records are bucketed by month only, so January of every year lands in
/// the same "Jan" point. The breakdown is limited to `now`'s month.
pub fn monthly_series(activities: &[ActivityRecord], now: DateTime<FixedOffset>) -> SeriesReport {
    let offset = now.offset();
    let current_month = month_key(now.date_naive());

    let mut series = Vec::from(MONTH_LABELS.map(ChartPoint::empty));

    for activity in activities {
        if let Some(kg) = activity.savings_kg() {
            let month0 = activity.local_date(offset).month0() as usize;
            series[month0].add(activity.category_label(), kg);
        }
    }

    let this_month = activities
        .iter()
        .filter(|a| month_key(a.local_date(offset)) == current_month);

    SeriesReport {
        view: ImpactView::Month,
        series,
        breakdown: breakdown(this_month),
    }
}

/// Savings for the last [`YEARS_SHOWN`] calendar years, oldest first.
///
/// The breakdown is limited to `now`'s year.
pub fn yearly_series(activities: &[ActivityRecord], now: DateTime<FixedOffset>) -> SeriesReport {
    let offset = now.offset();
    let this_year = now.year();
    let first_year = this_year - (YEARS_SHOWN - 1);

    let mut series: Vec<ChartPoint> = (first_year..=this_year)
        .map(|year| ChartPoint::empty(year.to_string()))
        .collect();

    for activity in activities {
        let Some(kg) = activity.savings_kg() else {
            continue;
        };
        let year = activity.local_date(offset).year();
        if (first_year..=this_year).contains(&year) {
            series[(year - first_year) as usize].add(activity.category_label(), kg);
        }
    }

    let this_year_rows = activities
        .iter()
        .filter(|a| a.local_date(offset).year() == this_year);

    SeriesReport {
        view: ImpactView::Year,
        series,
        breakdown: breakdown(this_year_rows),
    }
}

/// Chart series and breakdown for the requested view.
pub fn series(
    activities: &[ActivityRecord],
    view: ImpactView,
    now: DateTime<FixedOffset>,
) -> SeriesReport {
    match view {
        ImpactView::Week => weekly_series(activities, now),
        ImpactView::Month => monthly_series(activities, now),
        ImpactView::Year => yearly_series(activities, now),
    }
}

/// Records whose local date falls in `now`'s calendar year.
///
/// This is the window the activity store serves to the dashboard. There is
/// no upper cut at `now`: a client clock running slightly ahead of ours must
/// not make a just-logged activity vanish.
pub fn year_to_date(
    activities: &[ActivityRecord],
    now: DateTime<FixedOffset>,
) -> Vec<ActivityRecord> {
    let this_year = now.year();

    activities
        .iter()
        .filter(|a| a.local_date(now.offset()).year() == this_year)
        .cloned()
        .collect()
}

/// Full dashboard summary for one view.
pub fn summarize(
    activities: &[ActivityRecord],
    view: ImpactView,
    now: DateTime<FixedOffset>,
) -> ImpactSummary {
    let report = series(activities, view, now);
    let streak = compute_streak(activities, now.date_naive(), now.offset());
    let milestones = detect_milestones(activities, &streak);
    let total_saved_kg = total_saved_kg(activities);

    tracing::debug!(
        view = %view,
        activities = activities.len(),
        total_saved_kg,
        current_streak = streak.current,
        best_streak = streak.best,
        "Computed impact summary"
    );

    ImpactSummary {
        view,
        series: report.series,
        breakdown: report.breakdown,
        streak,
        milestones,
        total_saved_kg,
        activity_count: u32::try_from(activities.len()).unwrap_or(u32::MAX),
        generated_at: format_rfc3339(now),
    }
}
