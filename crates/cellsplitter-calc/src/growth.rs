// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Exponential growth projection
//!
//! `final = start × 2^(elapsed / doubling_time)`

use crate::error::{is_positive, CalcError, CalcResult};

/// Inputs for a single growth projection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthInput {
    /// Starting population (cells or cells/mL, the unit carries through)
    pub start_cells: f64,
    pub doubling_time_hours: f64,
    pub elapsed_hours: f64,
}

/// Result of projecting a population forward in time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthProjection {
    /// Number of doublings, `elapsed / doubling_time`
    pub growth_cycles: f64,
    /// `2^growth_cycles`
    pub growth_factor: f64,
    pub final_cells: f64,
}

/// Number of doublings and the matching multiplication factor.
///
/// # Errors
/// * `CalcError::InvalidDoublingTime` - doubling time is zero, negative or not finite
/// * `CalcError::NegativeElapsedTime` - elapsed time below zero
pub fn growth_factor(doubling_time_hours: f64, elapsed_hours: f64) -> CalcResult<(f64, f64)> {
    if !is_positive(doubling_time_hours) {
        return Err(CalcError::InvalidDoublingTime);
    }
    if !elapsed_hours.is_finite() || elapsed_hours < 0.0 {
        return Err(CalcError::NegativeElapsedTime);
    }
    let cycles = elapsed_hours / doubling_time_hours;
    Ok((cycles, cycles.exp2()))
}

/// Project a population forward by `elapsed_hours`.
///
/// # Example
/// ```
/// use cellsplitter_calc::{project_growth, GrowthInput};
///
/// let projection = project_growth(GrowthInput {
///     start_cells: 1_000.0,
///     doubling_time_hours: 24.0,
///     elapsed_hours: 72.0,
/// })
/// .unwrap();
/// assert_eq!(projection.growth_cycles, 3.0);
/// assert_eq!(projection.final_cells, 8_000.0);
/// ```
pub fn project_growth(input: GrowthInput) -> CalcResult<GrowthProjection> {
    if !is_positive(input.start_cells) {
        return Err(CalcError::NonPositive {
            field: "start_cells",
        });
    }
    let (growth_cycles, growth_factor) =
        growth_factor(input.doubling_time_hours, input.elapsed_hours)?;
    Ok(GrowthProjection {
        growth_cycles,
        growth_factor,
        final_cells: input.start_cells * growth_factor,
    })
}

/// Mean of whichever doubling-time bounds are present and positive.
///
/// Cell-line references usually quote a range ("18–24 h"); the calculator uses
/// its midpoint. `None` when neither bound is usable.
pub fn average_doubling_time(min_hours: Option<f64>, max_hours: Option<f64>) -> Option<f64> {
    let values: Vec<f64> = [min_hours, max_hours]
        .into_iter()
        .flatten()
        .filter(|value| is_positive(*value))
        .collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_elapsed_is_identity() {
        let projection = project_growth(GrowthInput {
            start_cells: 12_345.0,
            doubling_time_hours: 30.0,
            elapsed_hours: 0.0,
        })
        .unwrap();
        assert_eq!(projection.growth_cycles, 0.0);
        assert_eq!(projection.final_cells, 12_345.0);
    }

    #[test]
    fn test_invalid_doubling_time() {
        for doubling in [0.0, -5.0, f64::NAN] {
            let result = project_growth(GrowthInput {
                start_cells: 1.0,
                doubling_time_hours: doubling,
                elapsed_hours: 10.0,
            });
            assert_eq!(result, Err(CalcError::InvalidDoublingTime));
        }
    }

    #[test]
    fn test_negative_elapsed() {
        let result = growth_factor(24.0, -1.0);
        assert_eq!(result, Err(CalcError::NegativeElapsedTime));
    }

    #[test]
    fn test_non_positive_start() {
        let result = project_growth(GrowthInput {
            start_cells: 0.0,
            doubling_time_hours: 24.0,
            elapsed_hours: 24.0,
        });
        assert_eq!(
            result,
            Err(CalcError::NonPositive {
                field: "start_cells"
            })
        );
    }

    #[test]
    fn test_average_doubling_time() {
        assert_eq!(average_doubling_time(Some(18.0), Some(24.0)), Some(21.0));
        assert_eq!(average_doubling_time(Some(20.0), None), Some(20.0));
        assert_eq!(average_doubling_time(None, Some(0.0)), None);
        assert_eq!(average_doubling_time(None, None), None);
    }

    proptest! {
        #[test]
        fn prop_growth_never_shrinks(
            start in 1.0f64..1e9,
            doubling in 0.5f64..200.0,
            elapsed in 0.0f64..500.0,
        ) {
            let projection = project_growth(GrowthInput {
                start_cells: start,
                doubling_time_hours: doubling,
                elapsed_hours: elapsed,
            }).unwrap();
            prop_assert!(projection.final_cells >= start);
            if elapsed > 1e-6 {
                prop_assert!(projection.final_cells > start);
            }
        }

        #[test]
        fn prop_one_doubling_time_doubles(start in 1.0f64..1e9, doubling in 0.5f64..200.0) {
            let projection = project_growth(GrowthInput {
                start_cells: start,
                doubling_time_hours: doubling,
                elapsed_hours: doubling,
            }).unwrap();
            prop_assert_eq!(projection.final_cells, start * 2.0);
        }
    }
}
