// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Derived impact view models.
//!
//! These are recomputed from the activity snapshot on every request and
//! never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category name -> summed savings (kg CO₂e).
pub type Breakdown = BTreeMap<String, f64>;

/// Dashboard time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ImpactView {
    #[default]
    Week,
    Month,
    Year,
}

impl ImpactView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactView::Week => "week",
            ImpactView::Month => "month",
            ImpactView::Year => "year",
        }
    }
}

impl fmt::Display for ImpactView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(ImpactView::Week),
            "month" => Ok(ImpactView::Month),
            "year" => Ok(ImpactView::Year),
            other => Err(format!("unknown view '{other}'")),
        }
    }
}

/// One bar of a savings chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChartPoint {
    /// "Mon", "Jan", "2024", ...
    pub label: String,
    /// Total savings in this bucket (kg CO₂e)
    pub savings: f64,
    /// Savings in this bucket split by category
    pub categories: Breakdown,
}

impl ChartPoint {
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            savings: 0.0,
            categories: Breakdown::new(),
        }
    }

    /// Add a saving to this bucket.
    pub fn add(&mut self, category: &str, kg: f64) {
        self.savings += kg;
        *self.categories.entry(category.to_string()).or_insert(0.0) += kg;
    }
}

/// Consecutive logging days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Streak {
    /// Run of logged days ending today (0 if nothing logged today)
    pub current: u32,
    /// Longest run of logged days ever seen
    pub best: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Milestone {
    pub label: String,
    pub description: String,
    pub achieved: bool,
}

/// Chart series plus the category breakdown for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeriesReport {
    pub view: ImpactView,
    pub series: Vec<ChartPoint>,
    pub breakdown: Breakdown,
}

/// Everything the impact dashboard renders for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ImpactSummary {
    pub view: ImpactView,
    pub series: Vec<ChartPoint>,
    pub breakdown: Breakdown,
    pub streak: Streak,
    pub milestones: Vec<Milestone>,
    /// Savings over all input records (kg CO₂e)
    pub total_saved_kg: f64,
    pub activity_count: u32,
    /// The instant the buckets were computed against (RFC3339)
    pub generated_at: String,
}
