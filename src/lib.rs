//! App Showcase - a JSON façade over Google Play app metadata
//!
//! Serves card data for every app of one configured developer, and install
//! figures for explicitly requested app ids, to a portfolio front-end.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod providers;

pub use application::{Aggregator, Application};
pub use domain::extract_short_summary;
pub use error::{Error, Result};
