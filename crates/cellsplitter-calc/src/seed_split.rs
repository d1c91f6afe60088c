// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Seed-and-split: one harvest, two destinations
//!
//! Part of the harvest is diluted into a seed portion (plates, an assay), the
//! rest is split into fresh vessels. The two plans are computed independently
//! and then reconciled against the measured harvest, if there is one.

use crate::dilution::DilutionPlan;
use crate::error::{is_positive, CalcError, CalcResult};
use crate::seeding::SeedingPlan;

/// Where the remainder figure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RemainderSource {
    /// Measured harvest minus the seed portion
    Measured,
    /// No measurement; the split plan's own requirement is used
    SplitRequirement,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedSplitPlan {
    pub seed: DilutionPlan,
    pub split: SeedingPlan,
    pub seed_portion_cells: f64,
    pub measured_total_cells: Option<f64>,
    /// Cells left for splitting, never negative
    pub remainder_cells: f64,
    pub remainder_source: RemainderSource,
    /// How far the measured remainder falls short of the split requirement
    pub split_shortfall_cells: Option<f64>,
    /// Seed portion plus split requirement
    pub total_cells_committed: f64,
}

/// Measured harvest total from a counted concentration and slurry volume.
///
/// `None` unless both are positive.
pub fn measured_total_cells(concentration: Option<f64>, slurry_volume_ml: Option<f64>) -> Option<f64> {
    match (concentration, slurry_volume_ml) {
        (Some(c), Some(v)) if is_positive(c) && is_positive(v) => Some(c * v),
        _ => None,
    }
}

/// Combine an already computed seed dilution and split seeding plan.
///
/// When `measured_total_cells` is `None` the remainder falls back to the
/// split plan's `required_cells_total`; there is no error for a missing
/// measurement.
pub fn combine_seed_split(
    seed: DilutionPlan,
    split: SeedingPlan,
    measured_total_cells: Option<f64>,
) -> CalcResult<SeedSplitPlan> {
    if let Some(measured) = measured_total_cells {
        if !is_positive(measured) {
            return Err(CalcError::MeasuredTotalNotPositive);
        }
    }

    let seed_portion_cells = seed.cells_needed_total;
    let (remainder_cells, remainder_source, split_shortfall_cells) = match measured_total_cells {
        Some(measured) => {
            let remainder = (measured - seed_portion_cells).max(0.0);
            let shortfall = (split.required_cells_total - remainder).max(0.0);
            (remainder, RemainderSource::Measured, Some(shortfall))
        }
        None => (
            split.required_cells_total,
            RemainderSource::SplitRequirement,
            None,
        ),
    };

    Ok(SeedSplitPlan {
        total_cells_committed: seed_portion_cells + split.required_cells_total,
        seed,
        split,
        seed_portion_cells,
        measured_total_cells,
        remainder_cells,
        remainder_source,
        split_shortfall_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dilution::{plan_dilution, DilutionTarget};
    use crate::seeding::{plan_seeding, SeedingInput, VesselSpec};

    fn seed() -> DilutionPlan {
        plan_dilution(
            5_000_000.0,
            DilutionTarget::Concentration {
                final_concentration: 500_000.0,
            },
            20.0,
        )
        .unwrap()
    }

    fn split() -> SeedingPlan {
        plan_seeding(&SeedingInput {
            vessel: VesselSpec {
                name: "T75".to_string(),
                area_cm2: 75.0,
                cells_at_100_confluency: 5_000_000.0,
            },
            target_confluency_percent: 80.0,
            target_hours: 72.0,
            doubling_time_hours: 24.0,
            vessels_used: 2,
            cell_concentration: Some(5_000_000.0),
        })
        .unwrap()
    }

    fn combine(measured: Option<f64>) -> CalcResult<SeedSplitPlan> {
        combine_seed_split(seed(), split(), measured)
    }

    #[test]
    fn test_measured_remainder() {
        let plan = combine(Some(25_000_000.0)).unwrap();
        assert_eq!(plan.seed_portion_cells, 10_000_000.0);
        assert_eq!(plan.remainder_cells, 15_000_000.0);
        assert_eq!(plan.remainder_source, RemainderSource::Measured);
        assert_eq!(plan.split.required_cells_total, 1_000_000.0);
        assert_eq!(plan.split_shortfall_cells, Some(0.0));
        assert_eq!(plan.total_cells_committed, 11_000_000.0);
    }

    #[test]
    fn test_remainder_floored_at_zero() {
        let plan = combine(Some(4_000_000.0)).unwrap();
        assert_eq!(plan.remainder_cells, 0.0);
        assert_eq!(plan.split_shortfall_cells, Some(1_000_000.0));
    }

    #[test]
    fn test_missing_measurement_falls_back_to_split_requirement() {
        let plan = combine(None).unwrap();
        assert_eq!(plan.remainder_source, RemainderSource::SplitRequirement);
        assert_eq!(plan.remainder_cells, plan.split.required_cells_total);
        assert_eq!(plan.split_shortfall_cells, None);
    }

    #[test]
    fn test_non_positive_measurement_rejected() {
        assert_eq!(
            combine(Some(0.0)),
            Err(CalcError::MeasuredTotalNotPositive)
        );
    }

    #[test]
    fn test_negative_measurement_rejected() {
        assert_eq!(combine(Some(-5.0)), Err(CalcError::MeasuredTotalNotPositive));
        assert_eq!(
            combine(Some(f64::NAN)),
            Err(CalcError::MeasuredTotalNotPositive)
        );
    }

    #[test]
    fn test_measured_total_from_counts() {
        assert_eq!(measured_total_cells(Some(2e6), Some(10.0)), Some(2e7));
        assert_eq!(measured_total_cells(Some(2e6), None), None);
        assert_eq!(measured_total_cells(Some(2e6), Some(0.0)), None);
    }
}
