// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Contract testing utilities

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cellsplitter_api::{create_http_server, ApiState};
use cellsplitter_services::{CalculatorSettings, Catalog, CellLine, Vessel};
use serde_json::{json, Value};
use tower::ServiceExt;

/// One T75 (5M cells at confluence) plus a 6-well, and one cell line
pub fn test_catalog() -> Catalog {
    Catalog::from_records(
        vec![
            Vessel {
                id: 0,
                name: "T75".to_string(),
                area_cm2: 75.0,
                cells_at_100_confluency: 5_000_000.0,
                notes: None,
            },
            Vessel {
                id: 0,
                name: "6-well plate (per well)".to_string(),
                area_cm2: 9.6,
                cells_at_100_confluency: 1_200_000.0,
                notes: Some("per well".to_string()),
            },
        ],
        vec![CellLine {
            id: 0,
            name: "HeLa".to_string(),
            doubling_time_min_hours: Some(20.0),
            doubling_time_max_hours: Some(28.0),
            reference_url: None,
            notes: None,
        }],
    )
}

pub fn create_test_server() -> axum::Router {
    create_http_server(ApiState::from_catalog(
        test_catalog(),
        CalculatorSettings::default(),
    ))
}

/// Send a request with an optional raw body and decode the JSON reply
pub async fn request_raw(
    method: &str,
    path: &str,
    content_type: Option<&str>,
    body: Option<Vec<u8>>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(path).method(method);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = create_test_server().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        json!(null)
    } else {
        serde_json::from_slice(&bytes).unwrap_or(json!(null))
    };
    (status, json)
}

pub async fn request_json(method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    request_raw(
        method,
        path,
        Some("application/json"),
        body.map(|b| serde_json::to_vec(&b).unwrap()),
    )
    .await
}

pub async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    request_json("POST", path, Some(body)).await
}
