// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer error types.

Transport-agnostic errors that adapters map to their own status codes.
*/

use cellsplitter_calc::CalcError;
use thiserror::Error;

/// Service layer errors (transport-agnostic)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Resource not found (404 in HTTP)
    #[error("Not found: {resource} with id '{id}'")]
    NotFound { resource: String, id: String },

    /// Invalid input parameters (400 in HTTP). The message is user-facing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog data could not be loaded or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Internal service error (500 in HTTP)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        ServiceError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Message meant for an end user, without the variant prefix
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::NotFound { resource, .. } => format!("{} not found.", resource),
            ServiceError::InvalidInput(msg) => msg.clone(),
            ServiceError::Catalog(msg) | ServiceError::Internal(msg) => msg.clone(),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

// ============================================================================
// ERROR CONVERSIONS FROM THE CALCULATOR CORE
// ============================================================================

impl From<CalcError> for ServiceError {
    fn from(err: CalcError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}
