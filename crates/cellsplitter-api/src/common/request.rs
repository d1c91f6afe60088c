// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! JSON body extraction that ignores the Content-Type header.
//!
//! Bench clients post with whatever header their form library picks, so the
//! body is read as bytes and parsed regardless. Failures come back as an
//! `ApiError` rather than axum's plain-text rejection.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult};

/// Deserialized JSON request body
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_input(format!("Could not read request body: {}", e)))?;
        parse_json_body(&bytes).map(JsonBody)
    }
}

/// Parse a request body, rejecting empty or malformed JSON.
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::invalid_input("Request body must be a JSON object."));
    }
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(target: "cellsplitter-api", "Rejected request body: {}", e);
        ApiError::invalid_input("Request body must be a JSON object.")
            .with_details(serde_json::json!({ "reason": e.to_string() }))
    })
}
