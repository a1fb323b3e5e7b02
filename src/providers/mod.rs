//! Upstream app-store abstraction
//!
//! The aggregator only knows two upstream operations: list the apps of a
//! developer account and fetch the full detail record of one app. Concrete
//! stores implement [`AppStore`]; the Google Play adapter is the only one
//! shipped.

pub mod constants;
pub mod google_play;

use crate::domain::{AppId, DeveloperQuery, Locale, RawAppRecord};
use async_trait::async_trait;

/// Remote source of app metadata
#[async_trait]
pub trait AppStore: Send + Sync {
    /// Partial records for the developer's apps, in store order
    async fn list_developer_apps(
        &self,
        query: &DeveloperQuery,
    ) -> Result<Vec<RawAppRecord>, StoreError>;

    /// Full detail record for one app
    async fn app_details(&self, app_id: &AppId, locale: &Locale)
        -> Result<RawAppRecord, StoreError>;
}

/// Upstream failure
///
/// The `Display` text is what callers see in error bodies, so variants carry
/// plain messages rather than nested sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("Upstream responded with status {status}")]
    Status { status: u16 },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unable to parse upstream response: {0}")]
    Parse(String),

    #[error("Malformed upstream record: {0}")]
    MalformedRecord(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages_are_caller_friendly() {
        let errors = vec![
            StoreError::NotFound(constants::error_messages::APP_NOT_FOUND.to_string()),
            StoreError::Status { status: 503 },
            StoreError::Transport("connection refused".to_string()),
            StoreError::Parse("missing ds:5".to_string()),
            StoreError::MalformedRecord("listing entry without appId".to_string()),
        ];

        for error in errors {
            let message = error.to_string();
            assert!(!message.is_empty());
            assert!(!message.contains("StoreError"));
        }

        assert_eq!(
            StoreError::NotFound(constants::error_messages::APP_NOT_FOUND.to_string())
                .to_string(),
            "App not found (404)"
        );
    }
}
