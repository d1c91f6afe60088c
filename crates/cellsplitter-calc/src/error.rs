// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Validation errors for passage calculations
//!
//! The `Display` text of each variant is shown to the user verbatim.

use thiserror::Error;

/// Every way a calculation can refuse its inputs.
///
/// Each rule has its own variant so callers can tell them apart without
/// matching on message text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A free-form field could not be parsed as a finite number
    #[error("Could not read a number from '{field}'.")]
    Parse { field: String },

    #[error("Provide a valid starting cell concentration (e.g. 1e6 cells/mL).")]
    StartConcentrationNotPositive,

    #[error("A valid doubling time is required.")]
    InvalidDoublingTime,

    #[error("Elapsed time cannot be negative.")]
    NegativeElapsedTime,

    #[error("{field} must be greater than zero.")]
    NonPositive { field: &'static str },

    #[error("Target confluency must be greater than zero.")]
    TargetConfluencyNotPositive,

    #[error("Time horizon must be greater than zero.")]
    TimeHorizonNotPositive,

    #[error("Invalid vessel selection.")]
    InvalidVessel,

    #[error("Number of vessels must be greater than zero.")]
    VesselCountNotPositive,

    #[error("Number of vessels cannot exceed {max}.")]
    VesselCountTooLarge { max: u32 },

    #[error("Total volume must be greater than zero.")]
    TotalVolumeNotPositive,

    #[error("Final concentration must be greater than zero.")]
    FinalConcentrationNotPositive,

    #[error("Number of cells to seed must be greater than zero.")]
    CellsToSeedNotPositive,

    #[error("Volume for seeding must be greater than zero.")]
    SeedVolumeNotPositive,

    /// Needed slurry exceeds the final volume (source too dilute)
    #[error(
        "Target concentration is higher than the starting suspension. \
         Use a more concentrated source or reduce the final volume."
    )]
    InsufficientDilutionVolume { slurry_volume_ml: f64, total_volume_ml: f64 },

    #[error("Measured harvest total must be greater than zero.")]
    MeasuredTotalNotPositive,
}

impl CalcError {
    pub fn parse(field: impl Into<String>) -> Self {
        CalcError::Parse {
            field: field.into(),
        }
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// `true` when `value` is a finite number strictly above zero
#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
