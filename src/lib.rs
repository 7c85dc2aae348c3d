//! Order tracking backend for a pizza shop.
//!
//! Orders and their pizza line items are validated against fixed
//! vocabularies, then persisted to and read back from SQLite.

pub mod config;
pub mod db;
pub mod domain;
pub mod metrics;
pub mod store;
pub mod utils;
pub mod validation;
