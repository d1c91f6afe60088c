// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Calculator service trait.

Resolves catalog references, runs the passage arithmetic and attaches the
note and label text.
*/

use crate::types::*;
use async_trait::async_trait;

/// Calculator service (transport-agnostic)
#[async_trait]
pub trait CalculatorService: Send + Sync {
    /// Seeding density needed to reach a confluency target
    ///
    /// # Arguments
    /// * `params` - Vessel, target and growth parameters
    ///
    /// # Returns
    /// * `ConfluencyResult` - Plan, resolved vessel and doubling-time source
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - unknown vessel or cell line
    /// * `ServiceError::InvalidInput` - any validation failure
    ///
    async fn calculate_confluency(&self, params: ConfluencyParams)
        -> ServiceResult<ConfluencyResult>;

    /// Slurry and media volumes for a dilution
    ///
    /// # Errors
    /// * `ServiceError::InvalidInput` - any validation failure
    ///
    async fn calculate_dilution(&self, params: DilutionParams) -> ServiceResult<DilutionResult>;

    /// Dispatch on mode
    async fn calculate(&self, params: CalcParams) -> ServiceResult<CalcOutcome> {
        match params {
            CalcParams::Confluency(p) => self.calculate_confluency(p).await.map(CalcOutcome::Confluency),
            CalcParams::Dilution(p) => self.calculate_dilution(p).await.map(CalcOutcome::Dilution),
        }
    }

    /// Seed portion and split from one harvest
    ///
    /// Both halves are computed independently; either failing fails the whole call.
    ///
    async fn calculate_seed_split(&self, params: SeedSplitParams)
        -> ServiceResult<SeedSplitResult>;
}
