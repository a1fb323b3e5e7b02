//! Raw upstream records
//!
//! The store returns loosely shaped JSON objects: the developer listing yields
//! partial records and the detail call yields full ones. Neither is validated
//! beyond the few fields this service reads, so both are kept as a JSON object
//! keyed by field name behind [`RawAppRecord`]. Key order is not preserved.

use crate::domain::types::AppId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names shared by partial and full records
pub mod fields {
    pub const APP_ID: &str = "appId";
    pub const TITLE: &str = "title";
    pub const SUMMARY: &str = "summary";
    pub const DESCRIPTION: &str = "description";
    pub const ICON: &str = "icon";
    pub const HEADER_IMAGE: &str = "headerImage";
    pub const SCORE: &str = "score";
    pub const SCORE_TEXT: &str = "scoreText";
    pub const RATINGS: &str = "ratings";
    pub const INSTALLS: &str = "installs";
    pub const MIN_INSTALLS: &str = "minInstalls";
    pub const MAX_INSTALLS: &str = "maxInstalls";
    pub const PRICE: &str = "price";
    pub const FREE: &str = "free";
    pub const CURRENCY: &str = "currency";
    pub const DEVELOPER: &str = "developer";
    pub const DEVELOPER_ID: &str = "developerId";
    pub const URL: &str = "url";
    pub const SCREENSHOTS: &str = "screenshots";
    pub const GENRE: &str = "genre";
    pub const GENRE_ID: &str = "genreId";
    pub const CONTENT_RATING: &str = "contentRating";
    pub const VERSION: &str = "version";
}

/// An upstream record, partial or full
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAppRecord(Map<String, Value>);

impl RawAppRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly used by the store adapters and tests
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String value of a field, `None` when absent or not a string
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn f64_field(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// String items of an array field; non-string items are skipped
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }

    /// The record's `appId`, if present and well formed
    pub fn app_id(&self) -> Option<AppId> {
        self.str_field(fields::APP_ID)
            .and_then(|raw| AppId::try_new(raw.to_string()).ok())
    }

    /// Overlay `detail` on top of this record
    ///
    /// Keys from `detail` win on collision; keys only present here survive.
    pub fn merge(mut self, detail: RawAppRecord) -> Self {
        self.0.extend(detail.0);
        self
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawAppRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
