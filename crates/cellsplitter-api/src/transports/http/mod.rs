// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP transport (Axum)

pub mod server;

pub use server::{create_http_server, ApiState};
