// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Catalog service trait.

Read access to the vessel and cell-line catalog.
*/

use crate::types::*;
use async_trait::async_trait;

/// Catalog service (transport-agnostic)
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List all vessels, smallest growth area first
    async fn list_vessels(&self) -> ServiceResult<Vec<Vessel>>;

    /// Get a vessel by id
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - no vessel with this id
    ///
    async fn get_vessel(&self, id: u32) -> ServiceResult<Vessel>;

    /// List all cell lines, sorted by name
    async fn list_cell_lines(&self) -> ServiceResult<Vec<CellLine>>;

    /// Get a cell line by id
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - no cell line with this id
    ///
    async fn get_cell_line(&self, id: u32) -> ServiceResult<CellLine>;
}
