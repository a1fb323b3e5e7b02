//! Google Play store adapter

use crate::config::UpstreamSettings;
use crate::domain::{AppId, DeveloperQuery, Locale, RawAppRecord};
use crate::providers::constants::{error_messages, paths};
use crate::providers::google_play::parser::{
    parse_app_details, parse_developer_listing, ListingLayout,
};
use crate::providers::{AppStore, StoreError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Scrapes listing and details pages from Google Play
#[derive(Debug, Clone)]
pub struct GooglePlayStore {
    client: reqwest::Client,
    base_url: String,
}

impl GooglePlayStore {
    /// Create a store from upstream settings
    pub fn new(settings: &UpstreamSettings) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a store against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn listing_url(&self, query: &DeveloperQuery) -> (String, ListingLayout) {
        let (path, layout) = if query.developer_id.is_numeric() {
            (paths::DEVELOPER_BY_NUMBER, ListingLayout::ByNumber)
        } else {
            (paths::DEVELOPER_BY_NAME, ListingLayout::ByName)
        };

        let url = format!(
            "{}{}?{}",
            self.base_url,
            path,
            query_string(query.developer_id.as_ref(), &query.locale)
        );
        (url, layout)
    }

    fn detail_url(&self, app_id: &AppId, locale: &Locale) -> String {
        format!(
            "{}{}?{}",
            self.base_url,
            paths::APP_DETAILS,
            query_string(app_id.as_ref(), locale)
        )
    }

    /// GET a page, mapping 404 to `not_found`
    async fn fetch_page(&self, url: &str, not_found: &str) -> Result<String, StoreError> {
        debug!(url = url, "Fetching store page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(not_found.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

fn query_string(id: &str, locale: &Locale) -> String {
    format!(
        "{}={}&{}={}&{}={}",
        paths::query::ID,
        urlencoding::encode(id),
        paths::query::LANGUAGE,
        locale.language,
        paths::query::COUNTRY,
        locale.country
    )
}

#[async_trait]
impl AppStore for GooglePlayStore {
    async fn list_developer_apps(
        &self,
        query: &DeveloperQuery,
    ) -> Result<Vec<RawAppRecord>, StoreError> {
        let (url, layout) = self.listing_url(query);
        let html = self
            .fetch_page(&url, error_messages::DEVELOPER_NOT_FOUND)
            .await?;

        parse_developer_listing(
            &html,
            layout,
            &self.base_url,
            *query.page_size.as_ref(),
        )
    }

    async fn app_details(
        &self,
        app_id: &AppId,
        locale: &Locale,
    ) -> Result<RawAppRecord, StoreError> {
        let url = self.detail_url(app_id, locale);
        let html = self.fetch_page(&url, error_messages::APP_NOT_FOUND).await?;

        parse_app_details(&html, app_id, &self.base_url)
    }
}
