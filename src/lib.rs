//! Stub REST API scaffold.
//!
//! Serves a fixed route table of authentication, product catalog and user
//! management endpoints. Handlers hold no state and run no business logic:
//! each returns a constant payload or echoes its path, query or body input.
//!
//! ```text
//! GET  /search?q=shoes&page=3   ->  {"query": "shoes", "page": 3}
//! PUT  /settings/42  {}         ->  {"userId": "42", "theme": ""}
//! POST /users        {...}      ->  {"id": 1}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Route table, handlers and OpenAPI document
//! - [`metrics`]: Request metrics and Prometheus recorder
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ScaffoldError};
