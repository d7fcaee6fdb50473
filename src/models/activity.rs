// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged eco-activity record, as served by the activity store.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::time_utils::parse_timestamp;

/// Category label used when a record carries none.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A single logged activity. Read-only input to the impact engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Opaque activity identifier
    #[serde(default)]
    pub id: String,
    /// Owner reference
    #[serde(default)]
    pub user_id: String,
    /// When the activity was logged
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
    /// Footprint delta in kg CO₂e. Negative values are savings.
    pub carbon_footprint_kg: f64,
    /// Free-text category label
    #[serde(default)]
    pub category: Option<String>,
}

impl ActivityRecord {
    /// Minimal record, mostly useful in tests and benchmarks.
    pub fn new(
        created_at: DateTime<Utc>,
        carbon_footprint_kg: f64,
        category: Option<&str>,
    ) -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            created_at,
            carbon_footprint_kg,
            category: category.map(String::from),
        }
    }

    /// Category label, falling back to [`DEFAULT_CATEGORY`] when missing or empty.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// Avoided emissions in kg, or `None` for emissions and neutral rows.
    pub fn savings_kg(&self) -> Option<f64> {
        (self.carbon_footprint_kg < 0.0).then(|| self.carbon_footprint_kg.abs())
    }

    /// Calendar date of `created_at` as seen from `offset`.
    pub fn local_date(&self, offset: &FixedOffset) -> NaiveDate {
        self.created_at.with_timezone(offset).date_naive()
    }
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid created_at timestamp: {raw}")))
}
