// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Calculator request/response DTOs.
//!
//! Requests keep every numeric field as a raw [`NumericInput`] so "300K" and
//! 300000 are both accepted; conversion to service parameters happens here.
//! Responses carry each quantity next to a pre-formatted display string.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::{ApiError, ApiResult};
use cellsplitter_calc::{
    format_cells, format_volume, parse_millions, CalcError, DilutionTarget, NumericInput,
    RemainderSource,
};
use cellsplitter_services::{
    CalcParams, ConfluencyParams, ConfluencyResult, DilutionInputMode, DilutionParams,
    DilutionResult, DoublingTimeSource, SeedSplitParams, SeedSplitResult,
};

// ============================================================================
// INPUT HELPERS
// ============================================================================

fn present(input: &Option<NumericInput>) -> Option<&NumericInput> {
    input.as_ref().filter(|value| !value.is_blank())
}

/// Parsed value, or `None` when absent, blank or unreadable
fn lenient_number(input: &Option<NumericInput>) -> Option<f64> {
    present(input).and_then(NumericInput::parse)
}

/// `None` when absent or blank; present but unreadable is an error
fn number_opt(input: &Option<NumericInput>, field: &str) -> ApiResult<Option<f64>> {
    match present(input) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .ok_or_else(|| ApiError::from(CalcError::parse(field))),
    }
}

/// Absent or blank gives `default`; present but unreadable is an error
fn number_or(input: &Option<NumericInput>, default: f64, field: &str) -> ApiResult<f64> {
    Ok(number_opt(input, field)?.unwrap_or(default))
}

fn whole_number(input: &Option<NumericInput>, field: &str) -> ApiResult<Option<i64>> {
    match present(input) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .filter(|v| v.fract() == 0.0 && v.abs() <= i64::MAX as f64)
            .map(|v| Some(v as i64))
            .ok_or_else(|| ApiError::from(CalcError::parse(field))),
    }
}

fn identifier(input: &Option<NumericInput>) -> Option<u32> {
    lenient_number(input)
        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32)
}

// ============================================================================
// REQUESTS
// ============================================================================

/// Body of `POST /api/calc-seeding`.
///
/// Numeric fields accept a JSON number or a string such as "300K", "1.5e6"
/// or "1,200,000".
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CalcSeedingRequest {
    /// "confluency" (default) or "dilution"
    #[schema(example = "confluency")]
    pub mode: Option<String>,
    /// Source suspension, cells/mL
    #[schema(value_type = Option<String>, example = "1.5e6")]
    pub cell_concentration: Option<NumericInput>,

    // Confluency mode
    #[schema(value_type = Option<u32>)]
    pub vessel_id: Option<NumericInput>,
    #[schema(value_type = Option<f64>)]
    pub target_confluency: Option<NumericInput>,
    #[schema(value_type = Option<f64>)]
    pub target_hours: Option<NumericInput>,
    #[schema(value_type = Option<i64>)]
    pub vessels_used: Option<NumericInput>,
    #[schema(value_type = Option<f64>)]
    pub doubling_time_override: Option<NumericInput>,
    #[schema(value_type = Option<u32>)]
    pub cell_line_id: Option<NumericInput>,

    // Dilution mode
    /// "concentration" (default) or "cells"
    pub dilution_input_mode: Option<String>,
    #[schema(value_type = Option<String>)]
    pub final_concentration: Option<NumericInput>,
    #[schema(value_type = Option<String>)]
    pub cells_to_seed: Option<NumericInput>,
    #[schema(value_type = Option<f64>)]
    pub volume_per_seed_ml: Option<NumericInput>,
    #[schema(value_type = Option<f64>)]
    pub total_volume_ml: Option<NumericInput>,
}

impl CalcSeedingRequest {
    /// `true` for "dilution", `false` for "confluency" or no mode; anything else is rejected
    pub fn is_dilution(&self) -> ApiResult<bool> {
        match self.mode.as_deref().map(str::trim) {
            None | Some("") => Ok(false),
            Some(mode) if mode.eq_ignore_ascii_case("confluency") => Ok(false),
            Some(mode) if mode.eq_ignore_ascii_case("dilution") => Ok(true),
            Some(mode) => Err(ApiError::invalid_input(format!(
                "Unknown mode '{}'. Use 'confluency' or 'dilution'.",
                mode
            ))),
        }
    }

    pub fn confluency_params(&self) -> ApiResult<ConfluencyParams> {
        let cell_line_id = match present(&self.cell_line_id) {
            None => None,
            Some(_) => Some(
                identifier(&self.cell_line_id)
                    .ok_or_else(|| ApiError::invalid_input("Invalid cell line selection."))?,
            ),
        };

        Ok(ConfluencyParams {
            vessel_id: identifier(&self.vessel_id),
            target_confluency_percent: number_or(&self.target_confluency, 0.0, "target_confluency")?,
            target_hours: number_or(&self.target_hours, 0.0, "target_hours")?,
            vessels_used: whole_number(&self.vessels_used, "vessels_used")?,
            doubling_time_override: number_opt(
                &self.doubling_time_override,
                "doubling_time_override",
            )?,
            cell_line_id,
            // Unreadable concentration only drops the optional volumes
            cell_concentration: lenient_number(&self.cell_concentration),
        })
    }

    pub fn dilution_params(&self) -> ApiResult<DilutionParams> {
        Ok(DilutionParams {
            cell_concentration: number_opt(&self.cell_concentration, "cell_concentration")?,
            input_mode: DilutionInputMode::from_wire(self.dilution_input_mode.as_deref()),
            final_concentration: number_opt(&self.final_concentration, "final_concentration")?,
            cells_to_seed: number_opt(&self.cells_to_seed, "cells_to_seed")?,
            volume_per_seed_ml: number_opt(&self.volume_per_seed_ml, "volume_per_seed_ml")?,
            total_volume_ml: number_opt(&self.total_volume_ml, "total_volume_ml")?,
        })
    }

    pub fn into_params(self) -> ApiResult<CalcParams> {
        if self.is_dilution()? {
            self.dilution_params().map(CalcParams::Dilution)
        } else {
            self.confluency_params().map(CalcParams::Confluency)
        }
    }
}

/// Body of `POST /api/calc-seed-split`: the dilution fields describe the seed
/// portion, the confluency fields the split, both drawn from one harvest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SeedSplitRequest {
    #[serde(flatten)]
    pub calc: CalcSeedingRequest,
    /// Counted harvest; bare numbers below one million are read as millions
    #[schema(value_type = Option<String>, example = "25")]
    pub measured_total_cells: Option<NumericInput>,
    #[schema(value_type = Option<String>)]
    pub measured_concentration: Option<NumericInput>,
    #[schema(value_type = Option<f64>)]
    pub measured_slurry_volume_ml: Option<NumericInput>,
}

impl SeedSplitRequest {
    pub fn into_params(self) -> ApiResult<SeedSplitParams> {
        let measured_total_cells = match present(&self.measured_total_cells) {
            None => None,
            Some(raw) => Some(
                parse_millions(raw)
                    .ok_or_else(|| ApiError::from(CalcError::parse("measured_total_cells")))?,
            ),
        };

        Ok(SeedSplitParams {
            seed: self.calc.dilution_params()?,
            split: self.calc.confluency_params()?,
            measured_total_cells,
            measured_concentration: number_opt(
                &self.measured_concentration,
                "measured_concentration",
            )?,
            measured_slurry_volume_ml: number_opt(
                &self.measured_slurry_volume_ml,
                "measured_slurry_volume_ml",
            )?,
        })
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

/// Confluency-mode result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfluencyResponse {
    #[schema(example = "confluency")]
    pub mode: String,
    pub vessel: String,
    pub vessel_id: u32,
    pub vessel_area_cm2: f64,
    pub target_confluency: f64,
    pub hours: f64,
    pub doubling_time_used: f64,
    /// "override" or "cell_line"
    pub doubling_time_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_line: Option<String>,
    pub growth_cycles: f64,
    pub final_cells: f64,
    pub final_cells_formatted: String,
    pub final_cells_total: f64,
    pub final_cells_total_formatted: String,
    pub required_cells: f64,
    pub required_cells_formatted: String,
    pub required_cells_total: f64,
    pub required_cells_total_formatted: String,
    /// Only present when a valid cell concentration was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_needed_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_needed_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_needed_total_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_needed_total_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_concentration: Option<f64>,
    pub vessels_used: u32,
    pub note_suggestion: String,
    #[schema(example = "T75 flask ×1 | 500K/vessel | 80% @ 72h")]
    pub label_text: String,
}

impl From<&ConfluencyResult> for ConfluencyResponse {
    fn from(result: &ConfluencyResult) -> Self {
        let plan = &result.plan;
        let source = match result.doubling_time_source {
            DoublingTimeSource::Override => "override",
            DoublingTimeSource::CellLine => "cell_line",
        };
        Self {
            mode: "confluency".to_string(),
            vessel: result.vessel.name.clone(),
            vessel_id: result.vessel.id,
            vessel_area_cm2: result.vessel.area_cm2,
            target_confluency: plan.target_confluency_percent,
            hours: plan.target_hours,
            doubling_time_used: plan.doubling_time_hours,
            doubling_time_source: source.to_string(),
            cell_line: result.cell_line.as_ref().map(|c| c.name.clone()),
            growth_cycles: plan.growth_cycles,
            final_cells: plan.final_cells_per_vessel,
            final_cells_formatted: format_cells(Some(plan.final_cells_per_vessel)),
            final_cells_total: plan.final_cells_total,
            final_cells_total_formatted: format_cells(Some(plan.final_cells_total)),
            required_cells: plan.required_cells_per_vessel,
            required_cells_formatted: format_cells(Some(plan.required_cells_per_vessel)),
            required_cells_total: plan.required_cells_total,
            required_cells_total_formatted: format_cells(Some(plan.required_cells_total)),
            volume_needed_ml: plan.volume_per_vessel_ml,
            volume_needed_formatted: plan.volume_per_vessel_ml.map(format_volume),
            volume_needed_total_ml: plan.volume_total_ml,
            volume_needed_total_formatted: plan.volume_total_ml.map(format_volume),
            cell_concentration: plan.cell_concentration,
            vessels_used: plan.vessels_used,
            note_suggestion: result.note.clone(),
            label_text: result.label.clone(),
        }
    }
}

/// Dilution-mode result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DilutionResponse {
    #[schema(example = "dilution")]
    pub mode: String,
    /// "concentration" or "cells"
    pub dilution_input_mode: String,
    pub final_concentration: f64,
    pub final_concentration_formatted: String,
    pub total_volume_ml: f64,
    pub total_volume_formatted: String,
    pub cells_needed: f64,
    pub cells_needed_formatted: String,
    pub slurry_volume_ml: f64,
    pub slurry_volume_formatted: String,
    pub media_volume_ml: f64,
    pub media_volume_formatted: String,
    pub cell_concentration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells_to_seed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells_to_seed_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_per_seed_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_per_seed_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portions_prepared: Option<f64>,
    pub note_suggestion: String,
    pub label_text: String,
}

impl From<&DilutionResult> for DilutionResponse {
    fn from(result: &DilutionResult) -> Self {
        let plan = &result.plan;
        let (cells_to_seed, volume_per_seed_ml) = match plan.target {
            DilutionTarget::CellsPerPortion {
                cells_to_seed,
                volume_per_seed_ml,
            } => (Some(cells_to_seed), Some(volume_per_seed_ml)),
            DilutionTarget::Concentration { .. } => (None, None),
        };
        Self {
            mode: "dilution".to_string(),
            dilution_input_mode: plan.target.mode_name().to_string(),
            final_concentration: plan.final_concentration,
            final_concentration_formatted: format_cells(Some(plan.final_concentration)),
            total_volume_ml: plan.total_volume_ml,
            total_volume_formatted: format_volume(plan.total_volume_ml),
            cells_needed: plan.cells_needed_total,
            cells_needed_formatted: format_cells(Some(plan.cells_needed_total)),
            slurry_volume_ml: plan.slurry_volume_ml,
            slurry_volume_formatted: format_volume(plan.slurry_volume_ml),
            media_volume_ml: plan.media_volume_ml,
            media_volume_formatted: format_volume(plan.media_volume_ml),
            cell_concentration: plan.start_concentration,
            cells_to_seed,
            cells_to_seed_formatted: cells_to_seed.map(|c| format_cells(Some(c))),
            volume_per_seed_ml,
            volume_per_seed_formatted: volume_per_seed_ml.map(format_volume),
            portions_prepared: plan.portions_prepared,
            note_suggestion: result.note.clone(),
            label_text: result.label.clone(),
        }
    }
}

/// Either mode's result; the `mode` field tells them apart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CalcSeedingResponse {
    Confluency(ConfluencyResponse),
    Dilution(DilutionResponse),
}

/// Seed-and-split result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedSplitResponse {
    #[schema(example = "seed_split")]
    pub mode: String,
    pub seed: DilutionResponse,
    pub split: ConfluencyResponse,
    pub seed_portion_cells: f64,
    pub seed_portion_cells_formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_total_cells: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_total_cells_formatted: Option<String>,
    pub remainder_cells: f64,
    pub remainder_cells_formatted: String,
    /// "measured" or "split_requirement"
    pub remainder_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_shortfall_cells: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_shortfall_cells_formatted: Option<String>,
    pub total_cells_committed: f64,
    pub total_cells_committed_formatted: String,
    pub note_suggestion: String,
}

impl From<&SeedSplitResult> for SeedSplitResponse {
    fn from(result: &SeedSplitResult) -> Self {
        let combined = &result.combined;
        let remainder_source = match combined.remainder_source {
            RemainderSource::Measured => "measured",
            RemainderSource::SplitRequirement => "split_requirement",
        };
        Self {
            mode: "seed_split".to_string(),
            seed: DilutionResponse::from(&result.seed),
            split: ConfluencyResponse::from(&result.split),
            seed_portion_cells: combined.seed_portion_cells,
            seed_portion_cells_formatted: format_cells(Some(combined.seed_portion_cells)),
            measured_total_cells: combined.measured_total_cells,
            measured_total_cells_formatted: combined
                .measured_total_cells
                .map(|c| format_cells(Some(c))),
            remainder_cells: combined.remainder_cells,
            remainder_cells_formatted: format_cells(Some(combined.remainder_cells)),
            remainder_source: remainder_source.to_string(),
            split_shortfall_cells: combined.split_shortfall_cells,
            split_shortfall_cells_formatted: combined
                .split_shortfall_cells
                .map(|c| format_cells(Some(c))),
            total_cells_committed: combined.total_cells_committed,
            total_cells_committed_formatted: format_cells(Some(combined.total_cells_committed)),
            note_suggestion: result.note.clone(),
        }
    }
}
