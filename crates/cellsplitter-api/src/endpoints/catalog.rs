// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Catalog endpoints

use crate::common::{ApiResult, ApiState, Json, State};
use crate::v1::{CellLineResponse, VesselResponse};

/// Cell lines with their doubling-time ranges, sorted by name.
#[utoipa::path(
    get,
    path = "/api/doubling-times",
    responses(
        (status = 200, description = "Cell lines", body = Vec<CellLineResponse>)
    ),
    tag = "Catalog"
)]
pub async fn get_doubling_times(
    State(state): State<ApiState>,
) -> ApiResult<Json<Vec<CellLineResponse>>> {
    let lines = state.catalog_service.list_cell_lines().await?;
    Ok(Json(lines.into_iter().map(CellLineResponse::from).collect()))
}

/// Vessels, smallest growth area first.
#[utoipa::path(
    get,
    path = "/api/vessels",
    responses(
        (status = 200, description = "Vessels", body = Vec<VesselResponse>)
    ),
    tag = "Catalog"
)]
pub async fn get_vessels(State(state): State<ApiState>) -> ApiResult<Json<Vec<VesselResponse>>> {
    let vessels = state.catalog_service.list_vessels().await?;
    Ok(Json(vessels.into_iter().map(VesselResponse::from).collect()))
}
