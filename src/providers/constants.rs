//! Constants for store interactions
//!
//! Page paths, query parameter names and the positions of fields inside the
//! JSON payloads embedded in store pages.

/// Store page paths and query parameters
pub mod paths {
    pub const DEFAULT_BASE_URL: &str = "https://play.google.com";

    pub const APP_DETAILS: &str = "/store/apps/details";

    /// Listing page for numeric developer ids
    pub const DEVELOPER_BY_NUMBER: &str = "/store/apps/dev";

    /// Listing page for vanity developer names
    pub const DEVELOPER_BY_NAME: &str = "/store/apps/developer";

    pub mod query {
        pub const ID: &str = "id";
        pub const LANGUAGE: &str = "hl";
        pub const COUNTRY: &str = "gl";
    }
}

/// Embedded dataset keys passed to `AF_initDataCallback`
pub mod datasets {
    pub const DEVELOPER_LISTING: &str = "ds:3";
    pub const APP_DETAILS: &str = "ds:5";
}

/// Index paths into the embedded datasets
pub mod positions {
    /// Price values are published in micro-units
    pub const PRICE_MICROS: f64 = 1_000_000.0;

    pub mod listing {
        pub const APPS_BY_NUMBER: &[usize] = &[0, 1, 0, 21, 0];
        pub const APPS_BY_NAME: &[usize] = &[0, 1, 0, 22, 0];

        /// Numeric-id entries wrap each app in one more array
        pub const ENTRY_BY_NUMBER: &[usize] = &[0];
        pub const ENTRY_BY_NAME: &[usize] = &[];

        pub const APP_ID: &[usize] = &[0, 0];
        pub const TITLE: &[usize] = &[3];
        pub const URL: &[usize] = &[10, 4, 2];
        pub const ICON: &[usize] = &[1, 3, 2];
        pub const DEVELOPER: &[usize] = &[14];
        pub const PRICE: &[usize] = &[8, 1, 0, 0];
        pub const CURRENCY: &[usize] = &[8, 1, 0, 1];
        pub const SUMMARY: &[usize] = &[13, 1];
        pub const SCORE_TEXT: &[usize] = &[4, 0];
        pub const SCORE: &[usize] = &[4, 1];
    }

    pub mod detail {
        pub const ROOT: &[usize] = &[1, 2];

        pub const TITLE: &[usize] = &[0, 0];
        pub const DESCRIPTION: &[usize] = &[72, 0, 1];
        pub const SUMMARY: &[usize] = &[73, 0, 1];
        pub const INSTALLS: &[usize] = &[13, 0];
        pub const MIN_INSTALLS: &[usize] = &[13, 1];
        pub const MAX_INSTALLS: &[usize] = &[13, 2];
        pub const SCORE: &[usize] = &[51, 0, 1];
        pub const SCORE_TEXT: &[usize] = &[51, 0, 0];
        pub const RATINGS: &[usize] = &[51, 2, 1];
        pub const PRICE: &[usize] = &[57, 0, 0, 0, 0, 1, 0, 0];
        pub const CURRENCY: &[usize] = &[57, 0, 0, 0, 0, 1, 0, 1];
        pub const ICON: &[usize] = &[95, 0, 3, 2];
        pub const HEADER_IMAGE: &[usize] = &[96, 0, 3, 2];
        pub const SCREENSHOTS: &[usize] = &[78, 0];
        pub const SCREENSHOT_URL: &[usize] = &[3, 2];
        pub const DEVELOPER: &[usize] = &[68, 0];
        pub const DEVELOPER_LINK: &[usize] = &[68, 1, 4, 2];
        pub const GENRE: &[usize] = &[79, 0, 0, 0];
        pub const GENRE_ID: &[usize] = &[79, 0, 0, 2];
        pub const CONTENT_RATING: &[usize] = &[9, 0];
        pub const VERSION: &[usize] = &[140, 0, 0, 0];
    }
}

/// Error message constants
pub mod error_messages {
    pub const APP_NOT_FOUND: &str = "App not found (404)";
    pub const DEVELOPER_NOT_FOUND: &str = "Developer not found (404)";
    pub const MISSING_DATASET: &str = "embedded dataset not found";
    pub const MISSING_LISTING: &str = "developer listing has no app entries";
}
