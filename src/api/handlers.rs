//! HTTP API handlers, one module per route group.
//!
//! Handlers hold no state. Each builds its response from the extracted path,
//! query and body alone; malformed input is rejected by the extractors
//! before a handler runs.

pub mod auth;
pub mod products;
pub mod users;
