//! HTTP header constants and route paths for the API
//!
//! Centralizes header names and paths so handlers, middleware and tests agree
//! on them.

use ::http::header;

/// Header name for request ID used for tracing and correlation
pub const X_REQUEST_ID: &str = "x-request-id";

/// Query parameter carrying the comma-separated app ids
pub const APP_IDS_PARAM: &str = "appIds";

/// Standard header re-exports for convenience
pub use header::ORIGIN;

/// Well-known paths
pub mod paths {
    /// Explicit app ids via `?appIds=`
    pub const APPS_BY_IDS: &str = "/";

    /// Every app of the configured developer
    pub const DEVELOPER_APPS: &str = "/api/apps";

    /// Health check endpoint path
    pub const HEALTH: &str = "/health";
}

/// Usage hint returned when `appIds` is missing or malformed
pub const APPS_BY_IDS_USAGE: &str = "GET /?appIds=com.example.app1,com.example.app2";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_constants() {
        assert!(X_REQUEST_ID.starts_with("x-"));

        assert!(paths::APPS_BY_IDS.starts_with('/'));
        assert!(paths::DEVELOPER_APPS.starts_with('/'));
        assert!(paths::HEALTH.starts_with('/'));
    }

    #[test]
    fn test_usage_hint_names_the_parameter() {
        assert!(APPS_BY_IDS_USAGE.contains(APP_IDS_PARAM));
        assert!(APPS_BY_IDS_USAGE.starts_with("GET /?"));
    }
}
