// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_json_diff::assert_json_include;
use axum::http::StatusCode;
use serde_json::json;

use super::test_utils::request_json;

#[tokio::test]
async fn test_vessels_sorted_by_area_with_slurry_hint() {
    let (status, response) = request_json("GET", "/api/vessels", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: response,
        expected: json!([
            {
                "id": 2,
                "name": "6-well plate (per well)",
                "area_cm2": 9.6,
                "notes": "per well",
                "suggested_slurry_volume_ml": 1.5
            },
            {
                "id": 1,
                "name": "T75",
                "area_cm2": 75.0,
                "cells_at_100_confluency": 5000000.0,
                "suggested_slurry_volume_ml": 7.0
            }
        ])
    );
}

#[tokio::test]
async fn test_doubling_times() {
    let (status, response) = request_json("GET", "/api/doubling-times", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: response,
        expected: json!([{
            "id": 1,
            "name": "HeLa",
            "doubling_time_min_hours": 20.0,
            "doubling_time_max_hours": 28.0,
            "average_doubling_time_hours": 24.0,
            "doubling_time_display": "20–28 h"
        }])
    );
}
