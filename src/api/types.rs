//! Type definitions for the API module

use crate::domain::AppIdListError;
use crate::providers::StoreError;
use axum::extract::rejection::QueryRejection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Successful `/api/apps` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Query string of the by-id route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppIdsQuery {
    #[serde(rename = "appIds")]
    pub app_ids: Option<String>,
}

/// Errors surfaced by the API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter: appIds")]
    MissingAppIds,

    #[error("{0}")]
    InvalidAppIds(AppIdListError),

    #[error("{0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("{0}")]
    DeveloperListing(StoreError),

    #[error("{0}")]
    AppDetails(StoreError),
}

impl From<AppIdListError> for ApiError {
    fn from(err: AppIdListError) -> Self {
        match err {
            AppIdListError::Empty => ApiError::MissingAppIds,
            invalid @ AppIdListError::InvalidId { .. } => ApiError::InvalidAppIds(invalid),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
