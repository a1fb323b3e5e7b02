use crate::domain::{Country, DeveloperId, DeveloperQuery, Language, Locale, PageSize};
use crate::providers::constants::paths::DEFAULT_BASE_URL;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Developer account showcased by default
pub const DEFAULT_DEVELOPER_ID: &str = "6256207236238699098";

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub catalog: CatalogSettings,
    pub upstream: UpstreamSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    pub developer_id: String,
    pub page_size: usize,
    pub language: String,
    pub country: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

/// Validated listing parameters handed to the aggregator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub developer_id: DeveloperId,
    pub page_size: PageSize,
    pub locale: Locale,
}

impl CatalogConfig {
    pub fn developer_query(&self) -> DeveloperQuery {
        DeveloperQuery {
            developer_id: self.developer_id.clone(),
            page_size: self.page_size,
            locale: self.locale.clone(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(env::var("PORT").ok())
    }

    /// Build settings with `port` as the raw value of the `PORT` variable
    fn load(port: Option<String>) -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", i64::from(DEFAULT_PORT))?
            .set_default("application.environment", environment.clone())?
            .set_default("catalog.developer_id", DEFAULT_DEVELOPER_ID)?
            .set_default("catalog.page_size", 50)?
            .set_default("catalog.language", "en")?
            .set_default("catalog.country", "us")?
            .set_default("upstream.base_url", DEFAULT_BASE_URL)?
            .set_default("upstream.timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("APP_SHOWCASE").separator("__"))
            // The hosting platform hands out the listening port as plain PORT
            .set_override_option("application.port", port_override(port))?
            .build()?;

        config.try_deserialize()
    }

    /// Validate the catalog section into typed listing parameters
    pub fn catalog_config(&self) -> Result<CatalogConfig, ConfigError> {
        let catalog = &self.catalog;

        let developer_id = DeveloperId::try_new(catalog.developer_id.clone())
            .map_err(|e| invalid("catalog.developer_id", e))?;
        let page_size =
            PageSize::try_new(catalog.page_size).map_err(|e| invalid("catalog.page_size", e))?;
        let language = Language::try_new(catalog.language.clone())
            .map_err(|e| invalid("catalog.language", e))?;
        let country = Country::try_new(catalog.country.clone())
            .map_err(|e| invalid("catalog.country", e))?;

        Ok(CatalogConfig {
            developer_id,
            page_size,
            locale: Locale::new(language, country),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}

/// A blank `PORT` counts as unset
fn port_override(raw: Option<String>) -> Option<String> {
    raw.map(|port| port.trim().to_string())
        .filter(|port| !port.is_empty())
}

fn invalid(key: &str, error: impl std::fmt::Display) -> ConfigError {
    ConfigError::Message(format!("invalid {key}: {error}"))
}
