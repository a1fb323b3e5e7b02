//! HTTP service exposing the aggregator
//!
//! ```rust,ignore
//! use app_showcase::api::ShowcaseService;
//!
//! let service = ShowcaseService::new(aggregator);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, service.into_router()).await?;
//! ```

use crate::api::headers::paths;
use crate::api::middleware_stack::ApiMiddlewareStack;
use crate::api::types::{ApiEnvelope, ApiError, ApiResult, AppIdsQuery};
use crate::application::Aggregator;
use crate::domain::{AppIdList, AppInstallInfo, AppSummary};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};

/// Routes the public endpoints to the aggregator
#[derive(Clone)]
pub struct ShowcaseService {
    aggregator: Aggregator,
}

impl ShowcaseService {
    pub fn new(aggregator: Aggregator) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Create an Axum router for the service with middleware
    pub fn into_router(self) -> Router {
        let router = Router::new()
            .route(paths::DEVELOPER_APPS, get(developer_apps_handler))
            .route(paths::APPS_BY_IDS, get(apps_by_ids_handler))
            .route(paths::HEALTH, get(health_handler))
            .with_state(Arc::new(self));

        ApiMiddlewareStack::new().apply_to_router(router)
    }
}

/// Every app of the configured developer, wrapped in `{success, data}`
async fn developer_apps_handler(
    State(service): State<Arc<ShowcaseService>>,
) -> ApiResult<Json<ApiEnvelope<Vec<AppSummary>>>> {
    let apps = service
        .aggregator
        .fetch_developer_apps()
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching developer apps");
            ApiError::DeveloperListing(e)
        })?;

    info!(count = apps.len(), "Serving developer apps");
    Ok(Json(ApiEnvelope::success(apps)))
}

/// Install figures for `?appIds=a,b,c`, as a bare array in request order
async fn apps_by_ids_handler(
    State(service): State<Arc<ShowcaseService>>,
    query: Result<Query<AppIdsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<AppInstallInfo>>> {
    let Query(query) = query?;
    let raw = query.app_ids.ok_or(ApiError::MissingAppIds)?;
    let ids = AppIdList::parse(&raw)?;

    let apps = service
        .aggregator
        .fetch_apps_by_ids(&ids)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching apps by id");
            ApiError::AppDetails(e)
        })?;

    Ok(Json(apps))
}

/// Health check handler
async fn health_handler() -> &'static str {
    "OK"
}
