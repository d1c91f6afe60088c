// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service implementations.

Default implementations of the service traits backed by the in-memory catalog
and `cellsplitter-calc`.
*/

pub mod calculator_service_impl;
pub mod catalog_service_impl;

// Re-export for convenience
pub use calculator_service_impl::{CalculatorServiceImpl, CalculatorSettings};
pub use catalog_service_impl::CatalogServiceImpl;
