// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Health check endpoint

use crate::common::{ApiResult, ApiState, Json, State};
use crate::v1::HealthCheckResponseV1;

/// Liveness plus catalog counts
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthCheckResponseV1),
        (status = 500, description = "Catalog unavailable", body = ApiError)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<ApiState>) -> ApiResult<Json<HealthCheckResponseV1>> {
    let vessel_count = state.catalog_service.list_vessels().await?.len();
    let cell_line_count = state.catalog_service.list_cell_lines().await?.len();
    let now = chrono::Utc::now();

    Ok(Json(HealthCheckResponseV1 {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        vessel_count,
        cell_line_count,
        uptime_seconds: (now - state.started_at).num_seconds(),
        timestamp: now.to_rfc3339(),
    }))
}
