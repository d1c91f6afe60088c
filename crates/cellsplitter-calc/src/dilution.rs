// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Dilution planning
//!
//! Given a measured slurry and a target, how much slurry and how much media
//! make up the final volume.

use crate::error::{is_positive, CalcError, CalcResult};

/// What the user asked the dilution to deliver
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "dilution_input_mode", rename_all = "snake_case"))]
pub enum DilutionTarget {
    /// A final concentration in cells/mL
    Concentration { final_concentration: f64 },
    /// A cell count per portion of a given volume (e.g. per well)
    #[cfg_attr(feature = "serde", serde(rename = "cells"))]
    CellsPerPortion {
        cells_to_seed: f64,
        volume_per_seed_ml: f64,
    },
}

impl DilutionTarget {
    /// Wire name of the input mode
    pub fn mode_name(&self) -> &'static str {
        match self {
            DilutionTarget::Concentration { .. } => "concentration",
            DilutionTarget::CellsPerPortion { .. } => "cells",
        }
    }

    fn final_concentration(&self) -> CalcResult<f64> {
        match *self {
            DilutionTarget::Concentration {
                final_concentration,
            } => {
                if !is_positive(final_concentration) {
                    return Err(CalcError::FinalConcentrationNotPositive);
                }
                Ok(final_concentration)
            }
            DilutionTarget::CellsPerPortion {
                cells_to_seed,
                volume_per_seed_ml,
            } => {
                if !is_positive(cells_to_seed) {
                    return Err(CalcError::CellsToSeedNotPositive);
                }
                if !is_positive(volume_per_seed_ml) {
                    return Err(CalcError::SeedVolumeNotPositive);
                }
                Ok(cells_to_seed / volume_per_seed_ml)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DilutionPlan {
    pub target: DilutionTarget,
    /// Source suspension, cells/mL
    pub start_concentration: f64,
    pub final_concentration: f64,
    pub total_volume_ml: f64,
    pub cells_needed_total: f64,
    pub slurry_volume_ml: f64,
    pub media_volume_ml: f64,
    /// Only for `CellsPerPortion`: `total_volume / volume_per_seed`
    pub portions_prepared: Option<f64>,
}

/// Plan a dilution of `start_concentration` slurry into `total_volume_ml`.
///
/// # Errors
/// * `StartConcentrationNotPositive`, `TotalVolumeNotPositive` - bad shared inputs
/// * `FinalConcentrationNotPositive`, `CellsToSeedNotPositive`, `SeedVolumeNotPositive` - bad target
/// * `InsufficientDilutionVolume` - the slurry alone would exceed the total volume
///
/// # Example
/// ```
/// use cellsplitter_calc::{plan_dilution, DilutionTarget};
///
/// let plan = plan_dilution(
///     5_000_000.0,
///     DilutionTarget::Concentration { final_concentration: 500_000.0 },
///     20.0,
/// )
/// .unwrap();
/// assert_eq!(plan.cells_needed_total, 10_000_000.0);
/// assert_eq!(plan.slurry_volume_ml, 2.0);
/// assert_eq!(plan.media_volume_ml, 18.0);
/// ```
pub fn plan_dilution(
    start_concentration: f64,
    target: DilutionTarget,
    total_volume_ml: f64,
) -> CalcResult<DilutionPlan> {
    if !is_positive(start_concentration) {
        return Err(CalcError::StartConcentrationNotPositive);
    }
    if !is_positive(total_volume_ml) {
        return Err(CalcError::TotalVolumeNotPositive);
    }
    let final_concentration = target.final_concentration()?;

    let cells_needed_total = final_concentration * total_volume_ml;
    let slurry_volume_ml = cells_needed_total / start_concentration;
    if slurry_volume_ml > total_volume_ml {
        return Err(CalcError::InsufficientDilutionVolume {
            slurry_volume_ml,
            total_volume_ml,
        });
    }

    let portions_prepared = match target {
        DilutionTarget::CellsPerPortion {
            volume_per_seed_ml, ..
        } => Some(total_volume_ml / volume_per_seed_ml),
        DilutionTarget::Concentration { .. } => None,
    };

    Ok(DilutionPlan {
        target,
        start_concentration,
        final_concentration,
        total_volume_ml,
        cells_needed_total,
        slurry_volume_ml,
        media_volume_ml: total_volume_ml - slurry_volume_ml,
        portions_prepared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_scenario() {
        let plan = plan_dilution(
            5_000_000.0,
            DilutionTarget::Concentration {
                final_concentration: 500_000.0,
            },
            20.0,
        )
        .unwrap();
        assert_eq!(plan.cells_needed_total, 10_000_000.0);
        assert_eq!(plan.slurry_volume_ml, 2.0);
        assert_eq!(plan.media_volume_ml, 18.0);
        assert_eq!(plan.portions_prepared, None);
    }

    #[test]
    fn test_insufficient_volume_is_rejected() {
        let result = plan_dilution(
            1_000_000.0,
            DilutionTarget::Concentration {
                final_concentration: 2_000_000.0,
            },
            10.0,
        );
        assert_eq!(
            result,
            Err(CalcError::InsufficientDilutionVolume {
                slurry_volume_ml: 20.0,
                total_volume_ml: 10.0,
            })
        );
    }

    #[test]
    fn test_undiluted_is_allowed() {
        let plan = plan_dilution(
            1_000_000.0,
            DilutionTarget::Concentration {
                final_concentration: 1_000_000.0,
            },
            10.0,
        )
        .unwrap();
        assert_eq!(plan.slurry_volume_ml, 10.0);
        assert_eq!(plan.media_volume_ml, 0.0);
    }

    #[test]
    fn test_cells_per_portion() {
        // 200K cells in 2 mL per well, 12 mL total -> 6 wells at 100K/mL
        let plan = plan_dilution(
            1_000_000.0,
            DilutionTarget::CellsPerPortion {
                cells_to_seed: 200_000.0,
                volume_per_seed_ml: 2.0,
            },
            12.0,
        )
        .unwrap();
        assert_eq!(plan.final_concentration, 100_000.0);
        assert_eq!(plan.cells_needed_total, 1_200_000.0);
        assert_eq!(plan.slurry_volume_ml, 1.2);
        assert_eq!(plan.portions_prepared, Some(6.0));
    }

    #[test]
    fn test_validation_errors() {
        let conc = DilutionTarget::Concentration {
            final_concentration: 1.0,
        };
        assert_eq!(
            plan_dilution(0.0, conc, 1.0),
            Err(CalcError::StartConcentrationNotPositive)
        );
        assert_eq!(
            plan_dilution(1.0, conc, 0.0),
            Err(CalcError::TotalVolumeNotPositive)
        );
        assert_eq!(
            plan_dilution(
                1.0,
                DilutionTarget::Concentration {
                    final_concentration: -1.0
                },
                1.0
            ),
            Err(CalcError::FinalConcentrationNotPositive)
        );
        assert_eq!(
            plan_dilution(
                1.0,
                DilutionTarget::CellsPerPortion {
                    cells_to_seed: 0.0,
                    volume_per_seed_ml: 1.0
                },
                1.0
            ),
            Err(CalcError::CellsToSeedNotPositive)
        );
        assert_eq!(
            plan_dilution(
                1.0,
                DilutionTarget::CellsPerPortion {
                    cells_to_seed: 1.0,
                    volume_per_seed_ml: 0.0
                },
                1.0
            ),
            Err(CalcError::SeedVolumeNotPositive)
        );
    }

    #[test]
    fn test_target_serde_shape() {
        let target: DilutionTarget = serde_json::from_str(
            r#"{"dilution_input_mode":"cells","cells_to_seed":5.0,"volume_per_seed_ml":1.0}"#,
        )
        .unwrap();
        assert_eq!(target.mode_name(), "cells");
    }

    proptest! {
        #[test]
        fn prop_mass_balance(
            start in 1e5f64..1e8,
            ratio in 0.001f64..0.999,
            total in 0.1f64..500.0,
        ) {
            let final_concentration = start * ratio;
            let plan = plan_dilution(
                start,
                DilutionTarget::Concentration { final_concentration },
                total,
            ).unwrap();

            let delivered = plan.slurry_volume_ml * start;
            let expected = final_concentration * total;
            prop_assert!((delivered - expected).abs() <= expected * 1e-12);
            prop_assert!((plan.slurry_volume_ml + plan.media_volume_ml - total).abs() <= total * 1e-12);
        }
    }
}
