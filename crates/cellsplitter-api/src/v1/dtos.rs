// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// API Version 1 - Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponseV1 {
    /// Overall status
    #[schema(example = "healthy")]
    pub status: String,

    /// Server version
    pub version: String,

    /// Vessels in the catalog
    pub vessel_count: usize,

    /// Cell lines in the catalog
    pub cell_line_count: usize,

    /// Seconds since the server started
    pub uptime_seconds: i64,

    /// Current time (ISO 8601)
    pub timestamp: String,
}
