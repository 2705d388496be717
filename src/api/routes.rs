//! HTTP API route definitions.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use super::handlers::{auth, products, users};
use crate::metrics::track_metrics;

/// HTTP verbs used by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Route group a handler belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RouteGroup {
    Auth,
    Products,
    Users,
}

/// One row of the route table. `path` uses `{param}` placeholders.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteEntry {
    pub method: HttpMethod,
    pub path: &'static str,
    pub handler: &'static str,
    pub group: RouteGroup,
}

const fn entry(
    method: HttpMethod,
    path: &'static str,
    handler: &'static str,
    group: RouteGroup,
) -> RouteEntry {
    RouteEntry {
        method,
        path,
        handler,
        group,
    }
}

/// Every route served by [`api_router`], in declaration order.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    // Root / auth
    entry(HttpMethod::Get, "/", "index", RouteGroup::Auth),
    entry(HttpMethod::Get, "/health", "health", RouteGroup::Auth),
    entry(HttpMethod::Get, "/search", "search", RouteGroup::Auth),
    entry(HttpMethod::Post, "/auth/login", "login", RouteGroup::Auth),
    entry(HttpMethod::Put, "/settings/{userId}", "update_settings", RouteGroup::Auth),
    entry(HttpMethod::Delete, "/sessions/{sessionId}", "delete_session", RouteGroup::Auth),
    // Products
    entry(HttpMethod::Get, "/products", "list_products", RouteGroup::Products),
    entry(HttpMethod::Get, "/products/{id}", "get_product", RouteGroup::Products),
    entry(HttpMethod::Post, "/products", "create_product", RouteGroup::Products),
    entry(HttpMethod::Put, "/products/{id}", "update_product", RouteGroup::Products),
    entry(HttpMethod::Delete, "/products/{id}", "delete_product", RouteGroup::Products),
    entry(HttpMethod::Get, "/products/{productId}/reviews", "list_product_reviews", RouteGroup::Products),
    // Users
    entry(HttpMethod::Get, "/users", "list_users", RouteGroup::Users),
    entry(HttpMethod::Get, "/users/{id}", "get_user", RouteGroup::Users),
    entry(HttpMethod::Post, "/users", "create_user", RouteGroup::Users),
    entry(HttpMethod::Put, "/users/{id}", "update_user", RouteGroup::Users),
    entry(HttpMethod::Delete, "/users/{id}", "delete_user", RouteGroup::Users),
    entry(HttpMethod::Get, "/users/{userId}/posts", "list_user_posts", RouteGroup::Users),
];

/// Optional surfaces layered around the route table.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Serve the OpenAPI JSON and Swagger UI.
    pub swagger: bool,
    /// Attach `CorsLayer::permissive()`.
    pub cors_permissive: bool,
    /// Serve `/metrics` from this handle.
    pub metrics: Option<PrometheusHandle>,
}

/// Route table only: no docs, metrics or middleware.
///
/// axum 0.7 requires sibling parameters to share a name, so nested routes
/// reuse `:id` where the table says `{productId}` / `{userId}`.
pub fn api_router() -> Router {
    Router::new()
        // Root / auth
        .route("/", get(auth::index))
        .route("/health", get(auth::health))
        .route("/search", get(auth::search))
        .route("/auth/login", post(auth::login))
        .route("/settings/:user_id", put(auth::update_settings))
        .route("/sessions/:session_id", delete(auth::delete_session))
        // Products
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/products/:id/reviews", get(products::list_product_reviews))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:id/posts", get(users::list_user_posts))
}

/// Create the API router with the configured operational surfaces.
pub fn create_router(options: RouterOptions) -> Router {
    let mut router = api_router().route_layer(middleware::from_fn(track_metrics));

    if options.swagger {
        router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    }

    if let Some(handle) = options.metrics {
        router = router.route(
            "/metrics",
            get(move || {
                let handle = handle.clone();
                async move { handle.render() }
            }),
        );
    }

    if options.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}
