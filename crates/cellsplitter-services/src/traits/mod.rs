// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service trait definitions.

These traits define the stable application boundary between
transport adapters and the calculator core.
*/

pub mod calculator_service;
pub mod catalog_service;

// Re-export for convenience
pub use calculator_service::CalculatorService;
pub use catalog_service::CatalogService;
