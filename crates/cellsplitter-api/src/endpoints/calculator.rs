// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Calculator endpoints: `/api/calc-seeding` and `/api/calc-seed-split`

use crate::common::{ApiResult, ApiState, Json, JsonBody, State};
use crate::v1::{
    CalcSeedingRequest, CalcSeedingResponse, ConfluencyResponse, DilutionResponse,
    SeedSplitRequest, SeedSplitResponse,
};
use cellsplitter_services::CalcOutcome;

/// Confluency or dilution calculation, chosen by `mode`.
#[utoipa::path(
    post,
    path = "/api/calc-seeding",
    request_body = CalcSeedingRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalcSeedingResponse),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 404, description = "Unknown vessel or cell line", body = ApiError)
    ),
    tag = "Calculator"
)]
pub async fn post_calc_seeding(
    State(state): State<ApiState>,
    JsonBody(request): JsonBody<CalcSeedingRequest>,
) -> ApiResult<Json<CalcSeedingResponse>> {
    let params = request.into_params()?;
    let outcome = state.calculator_service.calculate(params).await?;

    let response = match outcome {
        CalcOutcome::Confluency(result) => {
            CalcSeedingResponse::Confluency(ConfluencyResponse::from(&result))
        }
        CalcOutcome::Dilution(result) => {
            CalcSeedingResponse::Dilution(DilutionResponse::from(&result))
        }
    };
    Ok(Json(response))
}

/// Seed a portion of one harvest and split the rest.
#[utoipa::path(
    post,
    path = "/api/calc-seed-split",
    request_body = SeedSplitRequest,
    responses(
        (status = 200, description = "Combined plan", body = SeedSplitResponse),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 404, description = "Unknown vessel or cell line", body = ApiError)
    ),
    tag = "Calculator"
)]
pub async fn post_calc_seed_split(
    State(state): State<ApiState>,
    JsonBody(request): JsonBody<SeedSplitRequest>,
) -> ApiResult<Json<SeedSplitResponse>> {
    let params = request.into_params()?;
    let result = state.calculator_service.calculate_seed_split(params).await?;
    Ok(Json(SeedSplitResponse::from(&result)))
}
