//! HTTP API: route table, handlers, payloads and OpenAPI document.

pub mod docs;
pub mod handlers;
pub mod routes;
pub mod types;

pub use docs::ApiDoc;
pub use routes::{api_router, create_router, RouteEntry, RouterOptions, ROUTE_TABLE};
