// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Request/response body logging at debug level

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

/// Largest response body that gets logged
const MAX_LOGGED_BODY_BYTES: usize = 10_000;

/// Middleware to log request and response bodies for debugging
pub async fn log_request_response_bodies(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    // Only POST carries a body in this API
    let body_bytes = if parts.method == axum::http::Method::POST {
        let bytes = body
            .collect()
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?
            .to_bytes();
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if !body_str.is_empty() {
                tracing::debug!(target: "cellsplitter-api", "📥 Request body: {}", body_str);
            }
        }
        bytes
    } else {
        Bytes::new()
    };

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .to_bytes();

    if bytes.len() < MAX_LOGGED_BODY_BYTES {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if body_str.starts_with('{') || body_str.starts_with('[') {
                tracing::debug!(target: "cellsplitter-api", "📤 Response body: {}", body_str);
            }
        }
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
