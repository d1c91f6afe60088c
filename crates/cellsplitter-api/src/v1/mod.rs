// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// API Version 1 - DTOs and mappings

pub mod calculator_dtos;
pub mod catalog_dtos;
pub mod dtos;

// Re-export for convenience
pub use calculator_dtos::*;
pub use catalog_dtos::*;
pub use dtos::*;
