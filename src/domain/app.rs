//! Response shapes handed to the front-end
//!
//! Defaults for absent upstream fields are applied here and only here, when a
//! merged record becomes an [`AppSummary`].

use crate::domain::record::{fields, RawAppRecord};
use crate::domain::summary::extract_short_summary;
use crate::domain::types::AppId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Unknown";
pub const DEFAULT_DEVELOPER: &str = "Unknown";
pub const DEFAULT_SCORE_TEXT: &str = "0.0";
pub const DEFAULT_INSTALLS: &str = "N/A";

/// A developer-listing entry after its detail call settled
///
/// `record` is the partial record merged with the detail record, or the
/// partial record alone when the detail call failed.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedApp {
    pub app_id: AppId,
    pub record: RawAppRecord,
    pub detail_merged: bool,
}

/// Card data for one app of the configured developer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSummary {
    pub title: String,
    pub summary: String,
    pub app_id: AppId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub score: f64,
    pub score_text: String,
    pub installs: String,
    pub price: f64,
    pub free: bool,
    pub developer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub screenshots: Vec<String>,
}

impl From<MergedApp> for AppSummary {
    fn from(app: MergedApp) -> Self {
        let record = &app.record;

        Self {
            title: text_or(record, fields::TITLE, DEFAULT_TITLE),
            summary: record
                .str_field(fields::SUMMARY)
                .map(extract_short_summary)
                .unwrap_or_default(),
            app_id: app.app_id.clone(),
            icon: non_empty_text(record, fields::ICON),
            score: record.f64_field(fields::SCORE).unwrap_or(0.0),
            score_text: text_or(record, fields::SCORE_TEXT, DEFAULT_SCORE_TEXT),
            installs: text_or(record, fields::INSTALLS, DEFAULT_INSTALLS),
            price: record.f64_field(fields::PRICE).unwrap_or(0.0),
            free: record.bool_field(fields::FREE).unwrap_or(true),
            developer: text_or(record, fields::DEVELOPER, DEFAULT_DEVELOPER),
            url: non_empty_text(record, fields::URL),
            screenshots: record.string_list(fields::SCREENSHOTS).unwrap_or_default(),
        }
    }
}

/// Install figures for one explicitly requested app
///
/// Fields pass through exactly as the detail record carries them; an absent
/// upstream field stays absent in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInstallInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<Value>,
}

impl From<&RawAppRecord> for AppInstallInfo {
    fn from(record: &RawAppRecord) -> Self {
        Self {
            app_id: record.get(fields::APP_ID).cloned(),
            installs: record.get(fields::INSTALLS).cloned(),
            genre: record.get(fields::GENRE).cloned(),
            content_rating: record.get(fields::CONTENT_RATING).cloned(),
        }
    }
}

fn non_empty_text(record: &RawAppRecord, key: &str) -> Option<String> {
    record
        .str_field(key)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn text_or(record: &RawAppRecord, key: &str, default: &str) -> String {
    non_empty_text(record, key).unwrap_or_else(|| default.to_string())
}
