// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// Sets up routing, middleware and shared state for the calculator API.

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::common::{ApiError, ApiErrorCode};
use crate::endpoints::{calculator, catalog, health};
use crate::middleware::{create_cors_layer, log_request_response_bodies};
use crate::openapi::ApiDoc;
use cellsplitter_services::{
    CalculatorService, CalculatorServiceImpl, CalculatorSettings, Catalog, CatalogService,
    CatalogServiceImpl,
};

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog_service: Arc<dyn CatalogService + Send + Sync>,
    pub calculator_service: Arc<dyn CalculatorService + Send + Sync>,
    /// When this server instance started
    pub started_at: DateTime<Utc>,
}

impl ApiState {
    pub fn new(
        catalog_service: Arc<dyn CatalogService + Send + Sync>,
        calculator_service: Arc<dyn CalculatorService + Send + Sync>,
    ) -> Self {
        Self {
            catalog_service,
            calculator_service,
            started_at: Utc::now(),
        }
    }

    /// Wire the default service implementations around `catalog`
    pub fn from_catalog(catalog: Catalog, settings: CalculatorSettings) -> Self {
        let catalog_service: Arc<dyn CatalogService + Send + Sync> =
            Arc::new(CatalogServiceImpl::new(catalog));
        let calculator_service = Arc::new(CalculatorServiceImpl::new(
            Arc::clone(&catalog_service),
            settings,
        ));
        Self::new(catalog_service, calculator_service)
    }
}

/// Create the main HTTP server application
pub fn create_http_server(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // OpenAPI document
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api", create_api_router())
        // Catch-all route for unmatched requests
        .fallback(|| async {
            tracing::warn!(target: "cellsplitter-api", "⚠️ Unmatched request - 404 Not Found");
            ApiError::new("Not found.").with_code(ApiErrorCode::NotFound)
        })
        .with_state(state)
        .layer(middleware::from_fn(log_request_response_bodies))
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "cellsplitter-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "cellsplitter-api", "📥 Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::debug!(
                        target: "cellsplitter-api",
                        "📤 Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                })
                .on_failure(|_error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(target: "cellsplitter-api", "❌ Request failed, latency={:?}", latency);
                }),
        )
}

/// Routes under `/api`
fn create_api_router() -> Router<ApiState> {
    Router::new()
        .route("/calc-seeding", post(calculator::post_calc_seeding))
        .route("/calc-seed-split", post(calculator::post_calc_seed_split))
        .route("/doubling-times", get(catalog::get_doubling_times))
        .route("/vessels", get(catalog::get_vessels))
}
