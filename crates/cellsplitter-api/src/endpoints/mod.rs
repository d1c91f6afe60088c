// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Endpoint handlers, shared by the router and the OpenAPI document

pub mod calculator;
pub mod catalog;
pub mod health;
