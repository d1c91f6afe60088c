// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Transport-agnostic parameters and results for the calculator service.

Parameters carry already-parsed numbers. A `None` means the caller sent
nothing usable for that field; the service decides whether that is an error.
*/

use serde::{Deserialize, Serialize};

use super::catalog::{CellLine, Vessel};
use cellsplitter_calc::{DilutionPlan, SeedSplitPlan, SeedingPlan};

// ============================================================================
// CONFLUENCY MODE
// ============================================================================

/// Parameters for a confluency-mode calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfluencyParams {
    pub vessel_id: Option<u32>,
    pub target_confluency_percent: f64,
    pub target_hours: f64,
    /// `None` falls back to the configured default
    pub vessels_used: Option<i64>,
    /// Takes precedence over the cell line's reference range
    pub doubling_time_override: Option<f64>,
    pub cell_line_id: Option<u32>,
    /// Source suspension in cells/mL; volumes are omitted without it
    pub cell_concentration: Option<f64>,
}

/// Where the doubling time used for a projection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoublingTimeSource {
    Override,
    CellLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfluencyResult {
    pub vessel: Vessel,
    pub cell_line: Option<CellLine>,
    pub doubling_time_source: DoublingTimeSource,
    pub plan: SeedingPlan,
    pub note: String,
    pub label: String,
}

// ============================================================================
// DILUTION MODE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DilutionInputMode {
    #[default]
    Concentration,
    Cells,
}

impl DilutionInputMode {
    /// Lenient wire parsing: anything other than "cells" is concentration mode
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()) {
            Some(mode) if mode == "cells" => DilutionInputMode::Cells,
            _ => DilutionInputMode::Concentration,
        }
    }
}

/// Parameters for a dilution-mode calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DilutionParams {
    pub cell_concentration: Option<f64>,
    pub input_mode: DilutionInputMode,
    pub final_concentration: Option<f64>,
    pub cells_to_seed: Option<f64>,
    pub volume_per_seed_ml: Option<f64>,
    pub total_volume_ml: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionResult {
    pub plan: DilutionPlan,
    pub note: String,
    pub label: String,
}

// ============================================================================
// EITHER MODE
// ============================================================================

/// One calculator request, tagged by mode
#[derive(Debug, Clone, PartialEq)]
pub enum CalcParams {
    Confluency(ConfluencyParams),
    Dilution(DilutionParams),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalcOutcome {
    Confluency(ConfluencyResult),
    Dilution(DilutionResult),
}

// ============================================================================
// SEED-AND-SPLIT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedSplitParams {
    pub seed: DilutionParams,
    pub split: ConfluencyParams,
    /// Counted harvest total; wins over the concentration × volume pair
    pub measured_total_cells: Option<f64>,
    pub measured_concentration: Option<f64>,
    pub measured_slurry_volume_ml: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedSplitResult {
    pub seed: DilutionResult,
    pub split: ConfluencyResult,
    pub combined: SeedSplitPlan,
    pub note: String,
}
