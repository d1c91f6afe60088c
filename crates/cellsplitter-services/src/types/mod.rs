// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Transport-agnostic types for the service layer.
*/

pub mod catalog;
pub mod dtos;
pub mod errors;

// Re-export for convenience
pub use catalog::{CellLine, Vessel};
pub use dtos::*;
pub use errors::{ServiceError, ServiceResult};
