//! Google Play implementation of [`AppStore`](crate::providers::AppStore)

pub mod parser;
pub mod store;


pub use store::GooglePlayStore;
