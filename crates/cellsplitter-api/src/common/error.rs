// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cellsplitter_calc::CalcError;
use cellsplitter_services::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    NotFound,
    InvalidInput,
    Internal,
}

impl ApiErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error type. Clients display `error` verbatim.
#[derive(Debug, Error, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// User-facing message
    #[schema(example = "Total volume must be greater than zero.")]
    pub error: String,

    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ApiErrorCode>,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            details: None,
        }
    }

    pub fn with_code(mut self, code: ApiErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        let resource = resource.into();
        let id = id.into();
        Self::new(format!("{} not found.", resource))
            .with_code(ApiErrorCode::NotFound)
            .with_details(serde_json::json!({
                "resource": resource,
                "id": id
            }))
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::InvalidInput)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message).with_code(ApiErrorCode::Internal)
    }

    pub fn status(&self) -> StatusCode {
        self.code
            .map(ApiErrorCode::status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Convert service layer errors to API errors
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { resource, id } => ApiError::not_found(resource, id),
            ServiceError::InvalidInput(msg) => ApiError::invalid_input(msg),
            ServiceError::Catalog(msg) | ServiceError::Internal(msg) => {
                tracing::error!(target: "cellsplitter-api", "❌ Internal error: {}", msg);
                ApiError::internal(msg)
            }
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_mapping() {
        let err = ApiError::from(ServiceError::not_found("Vessel", 7));
        assert_eq!(err.error, "Vessel not found.");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(ServiceError::InvalidInput("bad".to_string()));
        assert_eq!(err.error, "bad");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(ServiceError::Internal("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(ApiError::invalid_input("nope")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": "nope", "code": "INVALID_INPUT"})
        );
    }

    #[test]
    fn test_uncoded_error_is_internal() {
        assert_eq!(
            ApiError::new("?").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
