// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// OpenAPI documentation generation
//
// The OpenAPI 3.0 document is generated at compile time with utoipa so it
// stays in sync with the handlers.

use utoipa::OpenApi;

use crate::common::{ApiError, ApiErrorCode};
use crate::v1::{
    CalcSeedingRequest, CalcSeedingResponse, CellLineResponse, ConfluencyResponse,
    DilutionResponse, HealthCheckResponseV1, SeedSplitRequest, SeedSplitResponse, VesselResponse,
};

/// OpenAPI documentation for the cellsplitter REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cellsplitter REST API",
        description = "Seeding, dilution and seed-and-split calculators for tissue-culture passages",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::endpoints::health::health_check,
        crate::endpoints::calculator::post_calc_seeding,
        crate::endpoints::calculator::post_calc_seed_split,
        crate::endpoints::catalog::get_doubling_times,
        crate::endpoints::catalog::get_vessels,
    ),
    components(
        schemas(
            CalcSeedingRequest,
            CalcSeedingResponse,
            ConfluencyResponse,
            DilutionResponse,
            SeedSplitRequest,
            SeedSplitResponse,
            VesselResponse,
            CellLineResponse,
            HealthCheckResponseV1,
            ApiError,
            ApiErrorCode,
        )
    ),
    tags(
        (name = "Health", description = "Server health"),
        (name = "Calculator", description = "Seeding and dilution calculators"),
        (name = "Catalog", description = "Vessels and cell lines"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/calc-seeding",
            "/api/calc-seed-split",
            "/api/doubling-times",
            "/api/vessels",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
