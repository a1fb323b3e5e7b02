//! Error bodies returned by the API
//!
//! The front-end expects three shapes: the developer route wraps failures in
//! `{success: false, error}`, the by-id route returns a bare `{error}`, and
//! client mistakes additionally carry a usage hint and the list of endpoints.

use crate::api::headers::{paths, APPS_BY_IDS_USAGE, X_REQUEST_ID};
use crate::api::types::ApiError;
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Endpoints advertised alongside a usage hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub get_all_apps: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            get_all_apps: paths::DEVELOPER_APPS.to_string(),
        }
    }
}

/// Standard error response format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable error message
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Endpoints>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: None,
            error: error.into(),
            usage: None,
            endpoints: None,
        }
    }

    /// Mark the body as a failed `{success, data}` envelope
    pub fn unsuccessful(mut self) -> Self {
        self.success = Some(false);
        self
    }

    /// Add a usage hint and the endpoint list
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self.endpoints = Some(Endpoints::default());
        self
    }

    /// Convert to HTTP response
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    /// Convert to standardized error response
    fn to_error_response(&self) -> ErrorResponse;

    /// Get the appropriate HTTP status code
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        use ApiError::*;

        match self {
            MissingAppIds | InvalidAppIds(_) | InvalidQuery(_) => {
                ErrorResponse::new(self.to_string()).with_usage(APPS_BY_IDS_USAGE)
            }
            DeveloperListing(e) => ErrorResponse::new(e.to_string()).unsuccessful(),
            AppDetails(e) => ErrorResponse::new(e.to_string()),
        }
    }

    fn status_code(&self) -> StatusCode {
        use ApiError::*;

        match self {
            MissingAppIds | InvalidAppIds(_) | InvalidQuery(_) => StatusCode::BAD_REQUEST,
            DeveloperListing(_) | AppDetails(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error conversion for Axum responses using standardized format
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.to_error_response().into_response_with_status(status)
    }
}

/// Helper to extract request ID from headers
pub fn extract_request_id(headers: &http::HeaderMap) -> Option<String> {
    headers
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}

/// Copy a request ID onto a response if it is a valid header value
pub fn attach_request_id(response: &mut Response, request_id: &str) {
    if let Ok(header_value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }
}
