// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Confluency-mode seeding
//!
//! Works backwards from a target: how many cells go into each vessel now so
//! that, after `target_hours` of exponential growth, the vessel sits at
//! `target_confluency_percent` of its 100 % capacity.
//!
//! ```text
//! required_per_vessel = (pct / 100 × capacity) / 2^(hours / doubling_time)
//! ```

use crate::error::{is_positive, CalcError, CalcResult};
use crate::growth::growth_factor;

/// The parts of a vessel the arithmetic needs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselSpec {
    pub name: String,
    pub area_cm2: f64,
    /// Cells per vessel at 100 % confluency
    pub cells_at_100_confluency: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedingInput {
    pub vessel: VesselSpec,
    /// Not capped at 100; over-confluent targets are allowed
    pub target_confluency_percent: f64,
    pub target_hours: f64,
    pub doubling_time_hours: f64,
    /// Signed so a zero or negative count can be reported rather than rejected by the type
    pub vessels_used: i64,
    /// Source suspension (cells/mL). Volumes are only produced when this is present.
    pub cell_concentration: Option<f64>,
}

/// Seeding plan for one or more identical vessels
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedingPlan {
    pub vessel: VesselSpec,
    pub vessels_used: u32,
    pub target_confluency_percent: f64,
    pub target_hours: f64,
    pub doubling_time_hours: f64,
    pub growth_cycles: f64,
    pub growth_factor: f64,
    pub final_cells_per_vessel: f64,
    pub final_cells_total: f64,
    pub required_cells_per_vessel: f64,
    pub required_cells_total: f64,
    pub cell_concentration: Option<f64>,
    pub volume_per_vessel_ml: Option<f64>,
    pub volume_total_ml: Option<f64>,
}

/// Solve for the seeding density that reaches the target confluency on time.
///
/// Validation runs in a fixed order and stops at the first failure:
/// vessel, confluency, time horizon, vessel count, doubling time.
///
/// # Example
/// ```
/// use cellsplitter_calc::{plan_seeding, SeedingInput, VesselSpec};
///
/// let plan = plan_seeding(&SeedingInput {
///     vessel: VesselSpec {
///         name: "T75".into(),
///         area_cm2: 75.0,
///         cells_at_100_confluency: 5_000_000.0,
///     },
///     target_confluency_percent: 80.0,
///     target_hours: 72.0,
///     doubling_time_hours: 24.0,
///     vessels_used: 1,
///     cell_concentration: None,
/// })
/// .unwrap();
/// assert_eq!(plan.growth_cycles, 3.0);
/// assert_eq!(plan.required_cells_per_vessel, 500_000.0);
/// assert!(plan.volume_per_vessel_ml.is_none());
/// ```
pub fn plan_seeding(input: &SeedingInput) -> CalcResult<SeedingPlan> {
    if !is_positive(input.vessel.cells_at_100_confluency) {
        return Err(CalcError::InvalidVessel);
    }
    if !is_positive(input.target_confluency_percent) {
        return Err(CalcError::TargetConfluencyNotPositive);
    }
    if !is_positive(input.target_hours) {
        return Err(CalcError::TimeHorizonNotPositive);
    }
    if input.vessels_used < 1 {
        return Err(CalcError::VesselCountNotPositive);
    }
    let vessels_used = u32::try_from(input.vessels_used)
        .map_err(|_| CalcError::VesselCountTooLarge { max: u32::MAX })?;

    let (growth_cycles, growth_factor) =
        growth_factor(input.doubling_time_hours, input.target_hours)?;

    let vessel_count = f64::from(vessels_used);
    let final_cells_per_vessel =
        input.vessel.cells_at_100_confluency * input.target_confluency_percent / 100.0;
    let required_cells_per_vessel = final_cells_per_vessel / growth_factor;
    let required_cells_total = required_cells_per_vessel * vessel_count;

    let cell_concentration = input.cell_concentration.filter(|c| is_positive(*c));
    let volume_per_vessel_ml = cell_concentration.map(|c| required_cells_per_vessel / c);

    Ok(SeedingPlan {
        vessel: input.vessel.clone(),
        vessels_used,
        target_confluency_percent: input.target_confluency_percent,
        target_hours: input.target_hours,
        doubling_time_hours: input.doubling_time_hours,
        growth_cycles,
        growth_factor,
        final_cells_per_vessel,
        final_cells_total: required_cells_total * growth_factor,
        required_cells_per_vessel,
        required_cells_total,
        cell_concentration,
        volume_per_vessel_ml,
        volume_total_ml: volume_per_vessel_ml.map(|v| v * vessel_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t75() -> VesselSpec {
        VesselSpec {
            name: "T75".to_string(),
            area_cm2: 75.0,
            cells_at_100_confluency: 5_000_000.0,
        }
    }

    fn base_input() -> SeedingInput {
        SeedingInput {
            vessel: t75(),
            target_confluency_percent: 80.0,
            target_hours: 72.0,
            doubling_time_hours: 24.0,
            vessels_used: 1,
            cell_concentration: None,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let plan = plan_seeding(&base_input()).unwrap();
        assert_eq!(plan.growth_cycles, 3.0);
        assert_eq!(plan.growth_factor, 8.0);
        assert_eq!(plan.final_cells_per_vessel, 4_000_000.0);
        assert_eq!(plan.required_cells_per_vessel, 500_000.0);
        assert_eq!(plan.required_cells_total, 500_000.0);
        assert_eq!(plan.final_cells_total, 4_000_000.0);
    }

    #[test]
    fn test_multiple_vessels_and_volume() {
        let mut input = base_input();
        input.vessels_used = 3;
        input.cell_concentration = Some(1_000_000.0);
        let plan = plan_seeding(&input).unwrap();

        assert_eq!(plan.required_cells_total, 1_500_000.0);
        assert_eq!(plan.final_cells_total, 12_000_000.0);
        assert_eq!(plan.volume_per_vessel_ml, Some(0.5));
        assert_eq!(plan.volume_total_ml, Some(1.5));
    }

    #[test]
    fn test_invalid_concentration_only_omits_volume() {
        let mut input = base_input();
        input.cell_concentration = Some(0.0);
        let plan = plan_seeding(&input).unwrap();
        assert_eq!(plan.cell_concentration, None);
        assert_eq!(plan.volume_per_vessel_ml, None);
        assert_eq!(plan.volume_total_ml, None);
    }

    #[test]
    fn test_confluency_not_capped() {
        let mut input = base_input();
        input.target_confluency_percent = 120.0;
        let plan = plan_seeding(&input).unwrap();
        assert_eq!(plan.final_cells_per_vessel, 6_000_000.0);
    }

    #[test]
    fn test_distinct_validation_errors() {
        let mut input = base_input();
        input.target_confluency_percent = 0.0;
        assert_eq!(plan_seeding(&input), Err(CalcError::TargetConfluencyNotPositive));

        let mut input = base_input();
        input.target_hours = -4.0;
        assert_eq!(plan_seeding(&input), Err(CalcError::TimeHorizonNotPositive));

        let mut input = base_input();
        input.vessels_used = 0;
        assert_eq!(plan_seeding(&input), Err(CalcError::VesselCountNotPositive));

        let mut input = base_input();
        input.vessel.cells_at_100_confluency = 0.0;
        assert_eq!(plan_seeding(&input), Err(CalcError::InvalidVessel));

        let mut input = base_input();
        input.doubling_time_hours = 0.0;
        assert_eq!(plan_seeding(&input), Err(CalcError::InvalidDoublingTime));
    }

    #[test]
    fn test_vessel_count_above_u32_range() {
        let mut input = base_input();
        input.vessels_used = 5_000_000_000;
        let err = plan_seeding(&input).unwrap_err();
        assert_eq!(err, CalcError::VesselCountTooLarge { max: u32::MAX });
        assert_eq!(err.to_string(), "Number of vessels cannot exceed 4294967295.");

        input.vessels_used = i64::from(u32::MAX);
        assert_eq!(plan_seeding(&input).unwrap().vessels_used, u32::MAX);
    }

    #[test]
    fn test_first_failure_wins() {
        let mut input = base_input();
        input.target_confluency_percent = -1.0;
        input.target_hours = 0.0;
        input.vessels_used = -2;
        assert_eq!(plan_seeding(&input), Err(CalcError::TargetConfluencyNotPositive));
    }
}
