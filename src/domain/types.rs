//! Validated newtypes for store identifiers and listing parameters
//!
//! Everything that arrives from configuration or from a query string passes
//! through one of these types before it reaches the aggregator.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Upper bound accepted for a developer listing page
pub const MAX_PAGE_SIZE: usize = 250;

/// Store-assigned application identifier (an Android package name)
///
/// Limited to 256 characters, which comfortably exceeds the longest package
/// names published on the store.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256, regex = r"^[A-Za-z0-9_][A-Za-z0-9_.]*$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct AppId(String);

/// Developer account identifier, either numeric or a vanity name
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct DeveloperId(String);

impl DeveloperId {
    /// Numeric ids and vanity names are served from different listing pages
    pub fn is_numeric(&self) -> bool {
        self.as_ref().chars().all(|c| c.is_ascii_digit())
    }
}

/// Maximum number of apps requested from a developer listing
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = MAX_PAGE_SIZE),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct PageSize(usize);

/// Two-letter language code sent as `hl`
#[nutype(
    sanitize(trim, lowercase),
    validate(predicate = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_lowercase())),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Language(String);

/// Two-letter country code sent as `gl`
#[nutype(
    sanitize(trim, lowercase),
    validate(predicate = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_lowercase())),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Country(String);

/// Language and country pair used for every upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: Language,
    pub country: Country,
}

impl Locale {
    pub fn new(language: Language, country: Country) -> Self {
        Self { language, country }
    }
}

/// Parameters for the "list apps for a developer" upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperQuery {
    pub developer_id: DeveloperId,
    pub page_size: PageSize,
    pub locale: Locale,
}

/// Separator between ids in the `appIds` query parameter
pub const APP_ID_SEPARATOR: char = ',';

/// Why an `appIds` value was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppIdListError {
    #[error("Missing required parameter: appIds")]
    Empty,

    #[error("Invalid app id '{raw}'")]
    InvalidId { raw: String },
}

/// A non-empty, ordered list of app ids
///
/// Duplicates are kept: each requested position gets its own entry in the
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdList(Vec<AppId>);

impl AppIdList {
    /// Parse a comma-separated id list, keeping the given order
    pub fn parse(raw: &str) -> Result<Self, AppIdListError> {
        if raw.trim().is_empty() {
            return Err(AppIdListError::Empty);
        }

        raw.split(APP_ID_SEPARATOR)
            .map(|piece| {
                AppId::try_new(piece.to_string()).map_err(|_| AppIdListError::InvalidId {
                    raw: piece.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::try_from_vec)
    }

    pub fn try_from_vec(ids: Vec<AppId>) -> Result<Self, AppIdListError> {
        if ids.is_empty() {
            Err(AppIdListError::Empty)
        } else {
            Ok(Self(ids))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppId> {
        self.0.iter()
    }
}
