//! Extraction of app records from Google Play pages
//!
//! Store pages embed their data as positional JSON arrays passed to
//! `AF_initDataCallback`. The functions here locate a dataset by key and map
//! known positions onto named record fields.

use crate::domain::record::fields;
use crate::domain::{AppId, RawAppRecord};
use crate::providers::constants::{datasets, error_messages, paths, positions};
use crate::providers::StoreError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static DATA_CALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)AF_initDataCallback\(\{key:\s*'(?P<key>ds:\d+)',\s*hash:\s*'[^']*',\s*data:\s*(?P<data>.*?),\s*sideChannel:\s*\{\}\}\);",
    )
    .expect("valid data callback regex")
});

/// Which listing page layout to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingLayout {
    ByNumber,
    ByName,
}

impl ListingLayout {
    fn apps_path(self) -> &'static [usize] {
        match self {
            Self::ByNumber => positions::listing::APPS_BY_NUMBER,
            Self::ByName => positions::listing::APPS_BY_NAME,
        }
    }

    fn entry_prefix(self) -> &'static [usize] {
        match self {
            Self::ByNumber => positions::listing::ENTRY_BY_NUMBER,
            Self::ByName => positions::listing::ENTRY_BY_NAME,
        }
    }
}

/// Find the dataset registered under `key` and parse it as JSON
pub fn extract_dataset(html: &str, key: &str) -> Result<Value, StoreError> {
    let captures = DATA_CALLBACK
        .captures_iter(html)
        .find(|captures| &captures["key"] == key)
        .ok_or_else(|| {
            StoreError::Parse(format!("{} ({key})", error_messages::MISSING_DATASET))
        })?;

    serde_json::from_str(&captures["data"])
        .map_err(|e| StoreError::Parse(format!("invalid {key} payload: {e}")))
}

/// Walk a positional path through nested arrays
pub fn value_at<'a>(value: &'a Value, path: &[usize]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, &index| current.get(index))
        .filter(|found| !found.is_null())
}

/// Partial records from a developer listing page
///
/// At most `limit` entries are returned. Entries without an app id are
/// skipped since they are not app cards.
pub fn parse_developer_listing(
    html: &str,
    layout: ListingLayout,
    base_url: &str,
    limit: usize,
) -> Result<Vec<RawAppRecord>, StoreError> {
    let dataset = extract_dataset(html, datasets::DEVELOPER_LISTING)?;

    let entries = value_at(&dataset, layout.apps_path())
        .and_then(Value::as_array)
        .ok_or_else(|| StoreError::Parse(error_messages::MISSING_LISTING.to_string()))?;

    let records = entries
        .iter()
        .filter_map(|entry| value_at(entry, layout.entry_prefix()))
        .filter_map(|entry| parse_listing_entry(entry, base_url))
        .take(limit)
        .collect();

    Ok(records)
}

fn parse_listing_entry(entry: &Value, base_url: &str) -> Option<RawAppRecord> {
    use positions::listing::*;

    let app_id = value_at(entry, APP_ID).and_then(Value::as_str)?;

    let mut record = RawAppRecord::new().with(fields::APP_ID, app_id);

    copy_field(&mut record, entry, fields::TITLE, TITLE);
    copy_field(&mut record, entry, fields::ICON, ICON);
    copy_field(&mut record, entry, fields::DEVELOPER, DEVELOPER);
    copy_field(&mut record, entry, fields::CURRENCY, CURRENCY);
    copy_field(&mut record, entry, fields::SUMMARY, SUMMARY);
    copy_field(&mut record, entry, fields::SCORE_TEXT, SCORE_TEXT);
    copy_field(&mut record, entry, fields::SCORE, SCORE);

    let url = value_at(entry, URL)
        .and_then(Value::as_str)
        .map(|path| absolute_url(base_url, path))
        .unwrap_or_else(|| details_url(base_url, app_id));
    record.insert(fields::URL, url);

    insert_price(&mut record, value_at(entry, PRICE));

    Some(record)
}

/// Full record from an app details page
pub fn parse_app_details(
    html: &str,
    app_id: &AppId,
    base_url: &str,
) -> Result<RawAppRecord, StoreError> {
    use positions::detail::*;

    let dataset = extract_dataset(html, datasets::APP_DETAILS)?;
    let root = value_at(&dataset, ROOT)
        .ok_or_else(|| StoreError::Parse(format!("no app data for {app_id}")))?;

    let mut record = RawAppRecord::new()
        .with(fields::APP_ID, app_id.as_ref())
        .with(fields::URL, details_url(base_url, app_id.as_ref()));

    let direct: [(&str, &[usize]); 17] = [
        (fields::TITLE, TITLE),
        (fields::DESCRIPTION, DESCRIPTION),
        (fields::SUMMARY, SUMMARY),
        (fields::INSTALLS, INSTALLS),
        (fields::MIN_INSTALLS, MIN_INSTALLS),
        (fields::MAX_INSTALLS, MAX_INSTALLS),
        (fields::SCORE, SCORE),
        (fields::SCORE_TEXT, SCORE_TEXT),
        (fields::RATINGS, RATINGS),
        (fields::CURRENCY, CURRENCY),
        (fields::ICON, ICON),
        (fields::HEADER_IMAGE, HEADER_IMAGE),
        (fields::DEVELOPER, DEVELOPER),
        (fields::GENRE, GENRE),
        (fields::GENRE_ID, GENRE_ID),
        (fields::CONTENT_RATING, CONTENT_RATING),
        (fields::VERSION, VERSION),
    ];
    for (name, path) in direct {
        copy_field(&mut record, root, name, path);
    }

    insert_price(&mut record, value_at(root, PRICE));

    if let Some(screenshots) = value_at(root, SCREENSHOTS).and_then(Value::as_array) {
        let urls: Vec<Value> = screenshots
            .iter()
            .filter_map(|shot| value_at(shot, SCREENSHOT_URL).cloned())
            .collect();
        record.insert(fields::SCREENSHOTS, urls);
    }

    if let Some(developer_id) = value_at(root, DEVELOPER_LINK)
        .and_then(Value::as_str)
        .and_then(|link| link.split("id=").nth(1))
    {
        record.insert(fields::DEVELOPER_ID, developer_id);
    }

    Ok(record)
}

fn copy_field(record: &mut RawAppRecord, source: &Value, name: &str, path: &[usize]) {
    if let Some(value) = value_at(source, path) {
        record.insert(name, value.clone());
    }
}

fn insert_price(record: &mut RawAppRecord, micros: Option<&Value>) {
    let price = micros
        .and_then(Value::as_f64)
        .map(|micros| micros / positions::PRICE_MICROS)
        .unwrap_or(0.0);
    record.insert(fields::PRICE, price);
    record.insert(fields::FREE, price == 0.0);
}

fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

/// Public details page of an app
pub fn details_url(base_url: &str, app_id: &str) -> String {
    format!(
        "{}{}?{}={}",
        base_url.trim_end_matches('/'),
        paths::APP_DETAILS,
        paths::query::ID,
        urlencoding::encode(app_id)
    )
}
