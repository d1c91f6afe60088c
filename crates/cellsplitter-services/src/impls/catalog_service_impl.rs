// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Catalog service implementation.
*/

use crate::catalog::Catalog;
use crate::traits::CatalogService;
use crate::types::*;
use async_trait::async_trait;
use tracing::debug;

/// Default implementation of CatalogService. The catalog is fixed once loaded.
pub struct CatalogServiceImpl {
    catalog: Catalog,
}

impl CatalogServiceImpl {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl Default for CatalogServiceImpl {
    fn default() -> Self {
        Self::new(Catalog::with_defaults())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_vessels(&self) -> ServiceResult<Vec<Vessel>> {
        debug!(target: "cellsplitter-services", "Listing vessels");
        let mut vessels = self.catalog.vessels().to_vec();
        vessels.sort_by(|a, b| a.area_cm2.total_cmp(&b.area_cm2));
        Ok(vessels)
    }

    async fn get_vessel(&self, id: u32) -> ServiceResult<Vessel> {
        debug!(target: "cellsplitter-services", "Getting vessel {}", id);
        self.catalog
            .vessel(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Vessel", id))
    }

    async fn list_cell_lines(&self) -> ServiceResult<Vec<CellLine>> {
        debug!(target: "cellsplitter-services", "Listing cell lines");
        let mut cell_lines = self.catalog.cell_lines().to_vec();
        cell_lines.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cell_lines)
    }

    async fn get_cell_line(&self, id: u32) -> ServiceResult<CellLine> {
        debug!(target: "cellsplitter-services", "Getting cell line {}", id);
        self.catalog
            .cell_line(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Cell line", id))
    }
}
