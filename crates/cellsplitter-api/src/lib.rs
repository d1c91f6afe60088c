// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Cellsplitter REST API Layer
//
// Axum adapter over the cellsplitter service layer: request parsing,
// response shaping with display strings, error mapping and OpenAPI.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod middleware;
pub mod openapi;
pub mod transports;
pub mod v1;

// Re-export commonly used types
pub use common::{ApiError, ApiErrorCode, ApiResult};
pub use transports::http::{create_http_server, ApiState};
