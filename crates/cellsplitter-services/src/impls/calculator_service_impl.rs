// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Calculator service implementation.
*/

use crate::traits::{CalculatorService, CatalogService};
use crate::types::*;
use async_trait::async_trait;
use cellsplitter_calc::{
    combine_seed_split, dilution_label, dilution_note, measured_total_cells, plan_dilution,
    plan_seeding, seed_split_note, seeding_label, seeding_note, CalcError, DilutionTarget,
    SeedingInput,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Tunables for the calculator service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorSettings {
    /// Vessel count when a request leaves it out
    pub default_vessels_used: i64,
    /// Significant figures in label text
    pub significant_digits: u32,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            default_vessels_used: 1,
            significant_digits: 2,
        }
    }
}

/// Default implementation of CalculatorService
pub struct CalculatorServiceImpl {
    catalog: Arc<dyn CatalogService + Send + Sync>,
    settings: CalculatorSettings,
}

impl CalculatorServiceImpl {
    pub fn new(catalog: Arc<dyn CatalogService + Send + Sync>, settings: CalculatorSettings) -> Self {
        Self { catalog, settings }
    }

    fn log_rejection(mode: &str, err: &ServiceError) {
        warn!(target: "cellsplitter-services", "⚠️ {} calculation rejected: {}", mode, err);
    }
}

/// A missing value becomes 0 so the core rejects it in its usual order
fn missing_as_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

#[async_trait]
impl CalculatorService for CalculatorServiceImpl {
    async fn calculate_confluency(
        &self,
        params: ConfluencyParams,
    ) -> ServiceResult<ConfluencyResult> {
        debug!(target: "cellsplitter-services", "Confluency calculation: {:?}", params);

        let vessel_id = params.vessel_id.ok_or(CalcError::InvalidVessel)?;
        let vessel = self.catalog.get_vessel(vessel_id).await?;

        // The cell line only matters when no override is given
        let (doubling_time_hours, doubling_time_source, cell_line) =
            match (params.doubling_time_override, params.cell_line_id) {
                (Some(hours), _) => (hours, DoublingTimeSource::Override, None),
                (None, Some(id)) => {
                    let cell_line = self.catalog.get_cell_line(id).await?;
                    (
                        missing_as_zero(cell_line.average_doubling_time()),
                        DoublingTimeSource::CellLine,
                        Some(cell_line),
                    )
                }
                (None, None) => (0.0, DoublingTimeSource::CellLine, None),
            };

        let input = SeedingInput {
            vessel: vessel.spec(),
            target_confluency_percent: params.target_confluency_percent,
            target_hours: params.target_hours,
            doubling_time_hours,
            vessels_used: params
                .vessels_used
                .unwrap_or(self.settings.default_vessels_used),
            cell_concentration: params.cell_concentration,
        };
        let plan = plan_seeding(&input).map_err(|e| {
            let err = ServiceError::from(e);
            Self::log_rejection("Confluency", &err);
            err
        })?;

        Ok(ConfluencyResult {
            note: seeding_note(&plan),
            label: seeding_label(&plan, self.settings.significant_digits),
            vessel,
            cell_line,
            doubling_time_source,
            plan,
        })
    }

    async fn calculate_dilution(&self, params: DilutionParams) -> ServiceResult<DilutionResult> {
        debug!(target: "cellsplitter-services", "Dilution calculation: {:?}", params);

        // Shared inputs are checked before the mode-specific target
        let start_concentration = params
            .cell_concentration
            .filter(|c| *c > 0.0)
            .ok_or(CalcError::StartConcentrationNotPositive)?;
        let total_volume_ml = params
            .total_volume_ml
            .filter(|v| *v > 0.0)
            .ok_or(CalcError::TotalVolumeNotPositive)?;

        let target = match params.input_mode {
            DilutionInputMode::Cells => DilutionTarget::CellsPerPortion {
                cells_to_seed: missing_as_zero(params.cells_to_seed),
                volume_per_seed_ml: missing_as_zero(params.volume_per_seed_ml),
            },
            DilutionInputMode::Concentration => DilutionTarget::Concentration {
                final_concentration: missing_as_zero(params.final_concentration),
            },
        };

        let plan = plan_dilution(start_concentration, target, total_volume_ml).map_err(|e| {
            let err = ServiceError::from(e);
            Self::log_rejection("Dilution", &err);
            err
        })?;

        Ok(DilutionResult {
            note: dilution_note(&plan),
            label: dilution_label(&plan, self.settings.significant_digits),
            plan,
        })
    }

    async fn calculate_seed_split(&self, params: SeedSplitParams) -> ServiceResult<SeedSplitResult> {
        debug!(target: "cellsplitter-services", "Seed-and-split calculation");

        let (seed, split) = tokio::join!(
            self.calculate_dilution(params.seed),
            self.calculate_confluency(params.split)
        );
        let (seed, split) = (seed?, split?);

        let measured = params.measured_total_cells.or_else(|| {
            measured_total_cells(params.measured_concentration, params.measured_slurry_volume_ml)
        });
        let combined = combine_seed_split(seed.plan, split.plan.clone(), measured)?;

        Ok(SeedSplitResult {
            note: seed_split_note(&combined),
            seed,
            split,
            combined,
        })
    }
}
