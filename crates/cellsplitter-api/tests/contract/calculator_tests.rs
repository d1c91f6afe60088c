// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_json_diff::assert_json_include;
use axum::http::StatusCode;
use serde_json::{json, Value};

use super::test_utils::{post_json, request_raw};

fn confluency_request() -> Value {
    json!({
        "vessel_id": 1,
        "target_confluency": 80,
        "target_hours": 72,
        "doubling_time_override": "24",
        "vessels_used": 2
    })
}

fn dilution_request() -> Value {
    json!({
        "mode": "dilution",
        "cell_concentration": "5e6",
        "final_concentration": "500K",
        "total_volume_ml": 20
    })
}

// ============================================================================
// CONFLUENCY MODE
// ============================================================================

#[tokio::test]
async fn test_confluency_reference_scenario() {
    let (status, response) = post_json("/api/calc-seeding", confluency_request()).await;

    assert_eq!(status, StatusCode::OK, "response: {}", response);
    assert_json_include!(
        actual: response.clone(),
        expected: json!({
            "mode": "confluency",
            "vessel": "T75",
            "vessel_id": 1,
            "growth_cycles": 3.0,
            "final_cells": 4000000.0,
            "required_cells": 500000.0,
            "required_cells_formatted": "500.00 K",
            "required_cells_total": 1000000.0,
            "required_cells_total_formatted": "1.00 M",
            "doubling_time_used": 24.0,
            "doubling_time_source": "override",
            "vessels_used": 2,
            "label_text": "T75 ×2 | 500K/vessel | 80% @ 72h"
        })
    );
    // No concentration given, so no volumes
    assert!(response.get("volume_needed_ml").is_none());
}

#[tokio::test]
async fn test_confluency_with_concentration_reports_volumes() {
    let mut body = confluency_request();
    body["cell_concentration"] = json!("1e6");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: response,
        expected: json!({
            "volume_needed_ml": 0.5,
            "volume_needed_formatted": "0.50 mL",
            "volume_needed_total_ml": 1.0,
            "cell_concentration": 1000000.0
        })
    );
}

#[tokio::test]
async fn test_doubling_time_from_cell_line() {
    let mut body = confluency_request();
    body["doubling_time_override"] = json!("");
    body["cell_line_id"] = json!("1");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["doubling_time_used"], json!(24.0));
    assert_eq!(response["doubling_time_source"], "cell_line");
    assert_eq!(response["cell_line"], "HeLa");
}

#[tokio::test]
async fn test_unknown_vessel_is_404() {
    let mut body = confluency_request();
    body["vessel_id"] = json!(99);
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "Vessel not found.");
}

#[tokio::test]
async fn test_missing_vessel_is_rejected() {
    let mut body = confluency_request();
    body.as_object_mut().unwrap().remove("vessel_id");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid vessel selection.");
}

#[tokio::test]
async fn test_missing_doubling_time_is_rejected() {
    let mut body = confluency_request();
    body.as_object_mut().unwrap().remove("doubling_time_override");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "A valid doubling time is required.");
}

#[tokio::test]
async fn test_fractional_vessel_count_is_rejected() {
    let mut body = confluency_request();
    body["vessels_used"] = json!("1.5");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Could not read a number from 'vessels_used'.");
}

#[tokio::test]
async fn test_vessel_count_too_large_is_rejected() {
    let mut body = confluency_request();
    body["vessels_used"] = json!(5_000_000_000_i64);
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Number of vessels cannot exceed 4294967295.");
}

#[tokio::test]
async fn test_unreadable_override_is_rejected() {
    let mut body = confluency_request();
    body["doubling_time_override"] = json!("twelve");
    body["cell_line_id"] = json!(1);
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["error"],
        "Could not read a number from 'doubling_time_override'."
    );
}

#[tokio::test]
async fn test_override_ignores_unknown_cell_line() {
    let mut body = confluency_request();
    body["cell_line_id"] = json!(99);
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::OK, "response: {}", response);
    assert_eq!(response["doubling_time_source"], "override");
    assert!(response.get("cell_line").is_none());
}

#[tokio::test]
async fn test_unknown_mode_is_rejected() {
    let mut body = confluency_request();
    body["mode"] = json!("seed");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["error"],
        "Unknown mode 'seed'. Use 'confluency' or 'dilution'."
    );
    assert_eq!(response["code"], "INVALID_INPUT");
}

// ============================================================================
// DILUTION MODE
// ============================================================================

#[tokio::test]
async fn test_dilution_reference_scenario() {
    let (status, response) = post_json("/api/calc-seeding", dilution_request()).await;

    assert_eq!(status, StatusCode::OK, "response: {}", response);
    assert_json_include!(
        actual: response,
        expected: json!({
            "mode": "dilution",
            "dilution_input_mode": "concentration",
            "cells_needed": 10000000.0,
            "cells_needed_formatted": "10.00 M",
            "slurry_volume_ml": 2.0,
            "slurry_volume_formatted": "2.00 mL",
            "media_volume_ml": 18.0,
            "media_volume_formatted": "18.00 mL",
            "label_text": "2.00 mL + 18.00 mL media | 500K/mL"
        })
    );
}

#[tokio::test]
async fn test_dilution_cells_mode() {
    let body = json!({
        "mode": "dilution",
        "dilution_input_mode": "cells",
        "cell_concentration": "5e6",
        "cells_to_seed": "250K",
        "volume_per_seed_ml": 0.5,
        "total_volume_ml": 10
    });
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::OK, "response: {}", response);
    assert_json_include!(
        actual: response,
        expected: json!({
            "dilution_input_mode": "cells",
            "final_concentration": 500000.0,
            "slurry_volume_ml": 1.0,
            "media_volume_ml": 9.0,
            "cells_to_seed": 250000.0,
            "portions_prepared": 20.0
        })
    );
}

#[tokio::test]
async fn test_dilution_zero_volume_error() {
    let mut body = dilution_request();
    body["total_volume_ml"] = json!(0);
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_include!(
        actual: response,
        expected: json!({"error": "Total volume must be greater than zero."})
    );
}

#[tokio::test]
async fn test_dilution_source_too_dilute() {
    let mut body = dilution_request();
    body["final_concentration"] = json!("1e7");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .starts_with("Target concentration is higher than the starting suspension."));
}

#[tokio::test]
async fn test_dilution_unreadable_value_names_field() {
    let mut body = dilution_request();
    body["final_concentration"] = json!("lots");
    let (status, response) = post_json("/api/calc-seeding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["error"],
        "Could not read a number from 'final_concentration'."
    );
}

// ============================================================================
// BODY HANDLING
// ============================================================================

#[tokio::test]
async fn test_invalid_json_body() {
    let (status, response) = request_raw(
        "POST",
        "/api/calc-seeding",
        Some("application/json"),
        Some(b"{not json".to_vec()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Request body must be a JSON object.");
    assert_eq!(response["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_body_parsed_without_content_type() {
    let body = serde_json::to_vec(&dilution_request()).unwrap();
    let (status, response) =
        request_raw("POST", "/api/calc-seeding", Some("text/plain"), Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["slurry_volume_ml"], json!(2.0));
}

// ============================================================================
// SEED AND SPLIT
// ============================================================================

#[tokio::test]
async fn test_seed_split_with_measured_harvest() {
    let mut body = confluency_request();
    let dilution = dilution_request();
    for key in ["cell_concentration", "final_concentration", "total_volume_ml"] {
        body[key] = dilution[key].clone();
    }
    body["measured_total_cells"] = json!("25");

    let (status, response) = post_json("/api/calc-seed-split", body).await;

    assert_eq!(status, StatusCode::OK, "response: {}", response);
    assert_json_include!(
        actual: response.clone(),
        expected: json!({
            "mode": "seed_split",
            "seed_portion_cells": 10000000.0,
            "measured_total_cells": 25000000.0,
            "remainder_cells": 15000000.0,
            "remainder_cells_formatted": "15.00 M",
            "remainder_source": "measured",
            "total_cells_committed": 11000000.0,
            "seed": {"mode": "dilution", "slurry_volume_ml": 2.0},
            "split": {"mode": "confluency", "required_cells_total": 1000000.0}
        })
    );
    assert_eq!(response["split_shortfall_cells"], json!(0.0));
}

#[tokio::test]
async fn test_seed_split_without_measurement() {
    let mut body = confluency_request();
    let dilution = dilution_request();
    for key in ["cell_concentration", "final_concentration", "total_volume_ml"] {
        body[key] = dilution[key].clone();
    }

    let (status, response) = post_json("/api/calc-seed-split", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["remainder_source"], "split_requirement");
    assert_eq!(response["remainder_cells"], json!(1000000.0));
    assert!(response["note_suggestion"]
        .as_str()
        .unwrap()
        .contains("no harvest count recorded"));
}

#[tokio::test]
async fn test_seed_split_fails_when_either_half_fails() {
    let mut body = confluency_request();
    body["cell_concentration"] = json!("5e6");
    body["final_concentration"] = json!("500K");
    // total_volume_ml missing: the seed half cannot be planned

    let (status, response) = post_json("/api/calc-seed-split", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Total volume must be greater than zero.");
}

#[tokio::test]
async fn test_seed_split_unreadable_measurement_is_rejected() {
    let mut body = confluency_request();
    let dilution = dilution_request();
    for key in ["cell_concentration", "final_concentration", "total_volume_ml"] {
        body[key] = dilution[key].clone();
    }
    body["measured_concentration"] = json!("oops");
    body["measured_slurry_volume_ml"] = json!(10);

    let (status, response) = post_json("/api/calc-seed-split", body.clone()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["error"],
        "Could not read a number from 'measured_concentration'."
    );

    body["measured_concentration"] = json!("2.5e6");
    body["measured_slurry_volume_ml"] = json!("ten");
    let (status, response) = post_json("/api/calc-seed-split", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response["error"],
        "Could not read a number from 'measured_slurry_volume_ml'."
    );
}
