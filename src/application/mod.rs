//! Application services and business logic orchestration
//!
//! This module contains application services that coordinate
//! domain logic and infrastructure components.

pub mod aggregator;
pub mod app;

pub use aggregator::Aggregator;
pub use app::Application;
