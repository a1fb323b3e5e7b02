//! Test utilities for the API and aggregator
//!
//! `MockAppStore` stands in for the upstream store: records are served from
//! memory and individual calls can be made to fail or to take a while.
