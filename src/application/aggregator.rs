//! Fan-out over the upstream store
//!
//! A developer listing yields partial records; each one is completed with a
//! concurrent detail call. The two request paths settle their detail calls
//! differently:
//!
//! - developer listing: tolerant. A failed detail call falls back to the
//!   partial record and the batch carries on.
//! - explicit ids: strict. Any failed detail call fails the whole request.
//!
//! Either way every call runs to completion before a result is returned, and
//! results keep the order of their inputs.

use crate::config::CatalogConfig;
use crate::domain::record::fields;
use crate::domain::{AppId, AppIdList, AppInstallInfo, AppSummary, MergedApp, RawAppRecord};
use crate::providers::{AppStore, StoreError};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Orchestrates listing and detail calls for one configured developer
#[derive(Clone)]
pub struct Aggregator {
    store: Arc<dyn AppStore>,
    catalog: CatalogConfig,
}

impl Aggregator {
    pub fn new(store: Arc<dyn AppStore>, catalog: CatalogConfig) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    /// Card data for every app of the configured developer
    pub async fn fetch_developer_apps(&self) -> Result<Vec<AppSummary>, StoreError> {
        let merged = self.fetch_developer_records().await?;
        Ok(merged.into_iter().map(AppSummary::from).collect())
    }

    /// Listing records merged with their detail records, in listing order
    ///
    /// Fails only when the listing call itself fails or returns an entry
    /// without a usable `appId`.
    #[instrument(skip(self), fields(developer_id = %self.catalog.developer_id))]
    pub async fn fetch_developer_records(&self) -> Result<Vec<MergedApp>, StoreError> {
        info!("Fetching apps for developer");

        let partials = self
            .store
            .list_developer_apps(&self.catalog.developer_query())
            .await
            .inspect_err(|e| error!(error = %e, "Developer listing failed"))?;

        let keyed = partials
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                record.app_id().map(|id| (id, record)).ok_or_else(|| {
                    StoreError::MalformedRecord(format!(
                        "listing entry {position} has no valid appId"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| error!(error = %e, "Developer listing failed"))?;

        let merged = join_all(
            keyed
                .into_iter()
                .map(|(app_id, partial)| self.complete_with_detail(app_id, partial)),
        )
        .await;

        let fallbacks = merged.iter().filter(|app| !app.detail_merged).count();
        info!(
            count = merged.len(),
            fallbacks = fallbacks,
            "Successfully fetched developer apps"
        );

        Ok(merged)
    }

    /// Detail call that never fails: errors fall back to the partial record
    async fn complete_with_detail(&self, app_id: AppId, partial: RawAppRecord) -> MergedApp {
        match self.store.app_details(&app_id, &self.catalog.locale).await {
            Ok(detail) => {
                let mut record = partial.merge(detail);
                record.insert(fields::APP_ID, app_id.as_ref());
                MergedApp {
                    app_id,
                    record,
                    detail_merged: true,
                }
            }
            Err(e) => {
                warn!(
                    app_id = %app_id,
                    error = %e,
                    "Detail fetch failed, using listing record"
                );
                MergedApp {
                    app_id,
                    record: partial,
                    detail_merged: false,
                }
            }
        }
    }

    /// Install figures for explicitly requested apps, in request order
    ///
    /// Every detail call is awaited; the first failure in request order is
    /// returned if any call failed.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn fetch_apps_by_ids(
        &self,
        ids: &AppIdList,
    ) -> Result<Vec<AppInstallInfo>, StoreError> {
        let locale = &self.catalog.locale;

        let settled = join_all(ids.iter().map(|id| self.store.app_details(id, locale))).await;

        let records = settled
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| error!(error = %e, "App detail lookup failed"))?;

        Ok(records.iter().map(AppInstallInfo::from).collect())
    }
}
