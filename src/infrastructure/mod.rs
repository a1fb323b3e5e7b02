//! Infrastructure layer for the app showcase
//!
//! Process-wide concerns that sit outside the request path.

pub mod telemetry;

pub use telemetry::{init_tracing, LogFormat};
