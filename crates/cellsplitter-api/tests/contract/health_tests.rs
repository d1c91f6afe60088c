// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_json_diff::assert_json_include;
use axum::http::StatusCode;
use serde_json::json;

use super::test_utils::request_json;

#[tokio::test]
async fn test_health_endpoint() {
    let (status, response) = request_json("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: response.clone(),
        expected: json!({
            "status": "healthy",
            "version": cellsplitter_api::VERSION,
            "vessel_count": 2,
            "cell_line_count": 1
        })
    );
    assert!(response["timestamp"].is_string());
    assert!(response["uptime_seconds"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, response) = request_json("GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["info"]["title"], "Cellsplitter REST API");
    assert!(response["paths"]["/api/calc-seeding"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, response) = request_json("GET", "/api/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response, json!({"error": "Not found.", "code": "NOT_FOUND"}));
}
