//! Domain types and pure logic for the app showcase
//!
//! Nothing in here talks to the network: identifiers, upstream records, the
//! response projections and the description summarizer.

pub mod app;
pub mod record;
pub mod summary;
pub mod types;

pub use app::{AppInstallInfo, AppSummary, MergedApp};
pub use record::RawAppRecord;
pub use summary::extract_short_summary;
pub use types::*;
