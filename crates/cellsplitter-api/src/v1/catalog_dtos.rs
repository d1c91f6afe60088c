// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Catalog DTOs: vessels and cell lines as served to the calculator form

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cellsplitter_services::{suggest_slurry_volume, CellLine, Vessel};

/// A culture vessel with its suggested harvest volume
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VesselResponse {
    pub id: u32,
    #[schema(example = "T75 flask")]
    pub name: String,
    pub area_cm2: f64,
    pub cells_at_100_confluency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Typical slurry volume (mL) to resuspend a harvest from this vessel in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_slurry_volume_ml: Option<f64>,
}

impl From<Vessel> for VesselResponse {
    fn from(vessel: Vessel) -> Self {
        Self {
            suggested_slurry_volume_ml: suggest_slurry_volume(&vessel.name),
            id: vessel.id,
            name: vessel.name,
            area_cm2: vessel.area_cm2,
            cells_at_100_confluency: vessel.cells_at_100_confluency,
            notes: vessel.notes,
        }
    }
}

/// A cell line with its doubling-time reference range
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CellLineResponse {
    pub id: u32,
    #[schema(example = "HeLa")]
    pub name: String,
    pub doubling_time_min_hours: Option<f64>,
    pub doubling_time_max_hours: Option<f64>,
    pub reference_url: Option<String>,
    pub notes: Option<String>,
    /// Midpoint used when no override is given
    pub average_doubling_time_hours: Option<f64>,
    #[schema(example = "20–24 h")]
    pub doubling_time_display: String,
}

impl From<CellLine> for CellLineResponse {
    fn from(line: CellLine) -> Self {
        Self {
            average_doubling_time_hours: line.average_doubling_time(),
            doubling_time_display: line.display_doubling_time(),
            id: line.id,
            name: line.name,
            doubling_time_min_hours: line.doubling_time_min_hours,
            doubling_time_max_hours: line.doubling_time_max_hours,
            reference_url: line.reference_url,
            notes: line.notes,
        }
    }
}
