//! HTTP surface of the showcase
//!
//! Two data routes sit on top of the aggregator:
//! - `/api/apps`: every app of the configured developer, tolerant of detail failures
//! - `/?appIds=`: install figures for explicit ids, failing as a whole

pub mod error_response;
pub mod headers;
pub mod middleware;
pub mod middleware_stack;
pub mod service;
pub mod test_utils;
pub mod types;


pub use service::ShowcaseService;
pub use types::{ApiEnvelope, ApiError, ApiResult};
