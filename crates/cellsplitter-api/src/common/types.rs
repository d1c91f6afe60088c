// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Type aliases for endpoints, so handlers import extractors from one place

pub use crate::transports::http::server::ApiState;
pub use axum::extract::State;
pub use axum::response::Json;
