// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Catalog records: culture vessels and cell lines.
*/

use cellsplitter_calc::{average_doubling_time, format_hours, format_plain, VesselSpec};
use serde::{Deserialize, Serialize};

/// A culture vessel (flask, dish or plate well)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    /// Assigned on load; ignored in catalog files
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub area_cm2: f64,
    pub cells_at_100_confluency: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Vessel {
    pub fn spec(&self) -> VesselSpec {
        VesselSpec {
            name: self.name.clone(),
            area_cm2: self.area_cm2,
            cells_at_100_confluency: self.cells_at_100_confluency,
        }
    }
}

/// A cell line with its reference doubling-time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellLine {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub doubling_time_min_hours: Option<f64>,
    #[serde(default)]
    pub doubling_time_max_hours: Option<f64>,
    #[serde(default)]
    pub reference_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CellLine {
    /// Midpoint of the doubling-time range, or the single bound given
    pub fn average_doubling_time(&self) -> Option<f64> {
        average_doubling_time(self.doubling_time_min_hours, self.doubling_time_max_hours)
    }

    /// "18–24 h", "20 h" or "Not specified"
    pub fn display_doubling_time(&self) -> String {
        match (self.doubling_time_min_hours, self.doubling_time_max_hours) {
            (Some(low), Some(high)) if low != high => {
                format!("{}–{} h", format_plain(low), format_plain(high))
            }
            (Some(value), _) | (None, Some(value)) => format_hours(Some(value)),
            (None, None) => "Not specified".to_string(),
        }
    }
}
