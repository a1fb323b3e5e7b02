//! Shared fixtures for integration tests

#![allow(dead_code)]

use app_showcase::config::CatalogConfig;
use app_showcase::domain::record::fields;
use app_showcase::domain::{
    AppId, Country, DeveloperId, DeveloperQuery, Language, Locale, PageSize, RawAppRecord,
};
use app_showcase::providers::{AppStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

pub fn catalog() -> CatalogConfig {
    CatalogConfig {
        developer_id: DeveloperId::try_new("6256207236238699098".to_string()).unwrap(),
        page_size: PageSize::try_new(50).unwrap(),
        locale: Locale::new(
            Language::try_new("en".to_string()).unwrap(),
            Country::try_new("us".to_string()).unwrap(),
        ),
    }
}

pub fn listing_record(app_id: &str) -> RawAppRecord {
    RawAppRecord::new()
        .with(fields::APP_ID, app_id)
        .with(fields::TITLE, format!("{app_id} listing"))
        .with(fields::SUMMARY, "Listed. More text follows")
}

pub fn detail_record(app_id: &str) -> RawAppRecord {
    RawAppRecord::new()
        .with(fields::APP_ID, app_id)
        .with(fields::TITLE, format!("{app_id} detail"))
        .with(fields::INSTALLS, "5,000+")
        .with(fields::GENRE, "Productivity")
        .with(fields::CONTENT_RATING, "Everyone")
        .with(fields::SCORE, 4.2)
        .with(fields::SCORE_TEXT, "4.2")
}

struct ScriptedDetail {
    delay: Duration,
    outcome: Result<RawAppRecord, StoreError>,
}

/// Store whose responses and latencies are fixed up front
#[derive(Default)]
pub struct ScriptedStore {
    listing: Vec<RawAppRecord>,
    listing_error: Option<StoreError>,
    details: HashMap<String, ScriptedDetail>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(mut self, records: Vec<RawAppRecord>) -> Self {
        self.listing = records;
        self
    }

    pub fn listing_fails(mut self, error: StoreError) -> Self {
        self.listing_error = Some(error);
        self
    }

    pub fn detail(mut self, app_id: &str, delay: Duration) -> Self {
        self.details.insert(
            app_id.to_string(),
            ScriptedDetail {
                delay,
                outcome: Ok(detail_record(app_id)),
            },
        );
        self
    }

    pub fn detail_fails(mut self, app_id: &str, delay: Duration, error: StoreError) -> Self {
        self.details.insert(
            app_id.to_string(),
            ScriptedDetail {
                delay,
                outcome: Err(error),
            },
        );
        self
    }
}

#[async_trait]
impl AppStore for ScriptedStore {
    async fn list_developer_apps(
        &self,
        _query: &DeveloperQuery,
    ) -> Result<Vec<RawAppRecord>, StoreError> {
        match &self.listing_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.listing.clone()),
        }
    }

    async fn app_details(
        &self,
        app_id: &AppId,
        _locale: &Locale,
    ) -> Result<RawAppRecord, StoreError> {
        let scripted = self
            .details
            .get(app_id.as_ref())
            .ok_or_else(|| StoreError::NotFound("App not found (404)".to_string()))?;

        tokio::time::sleep(scripted.delay).await;
        scripted.outcome.clone()
    }
}
