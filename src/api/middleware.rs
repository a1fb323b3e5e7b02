//! Middleware implementations for the API

use crate::api::error_response::{attach_request_id, extract_request_id};
use crate::api::headers::X_REQUEST_ID;
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Request ID middleware - ensures every request has a unique ID for tracing
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    // Reuse a well-formed incoming ID, otherwise mint a time-ordered one
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::now_v7)
        .to_string();

    // UUID strings are always valid ASCII header values
    let header_value =
        HeaderValue::from_str(&request_id).expect("UUID should always produce valid header value");
    request.headers_mut().insert(X_REQUEST_ID, header_value);

    let mut response = next.run(request).await;
    attach_request_id(&mut response, &request_id);
    response
}

/// Logging middleware - logs request/response details with timing
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    // Extract request details before passing ownership
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = extract_request_id(request.headers()).unwrap_or_else(|| "unknown".to_string());

    info!(
        request_id = request_id,
        method = %method,
        path = %uri.path(),
        "Incoming request"
    );

    let response = next.run(request).await;
    let duration = start.elapsed();

    info!(
        request_id = request_id,
        method = %method,
        path = %uri.path(),
        status = response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Error logging middleware - records failed requests with their request ID
pub async fn error_handling_middleware(request: Request, next: Next) -> Response {
    let request_id = extract_request_id(request.headers()).unwrap_or_else(|| "unknown".to_string());
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = request_id,
            path = path,
            status = status.as_u16(),
            "Request failed"
        );
    } else if status.is_client_error() {
        warn!(
            request_id = request_id,
            path = path,
            status = status.as_u16(),
            "Request rejected"
        );
    }

    response
}
