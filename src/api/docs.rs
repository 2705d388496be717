//! OpenAPI document generated from the handler annotations.

use utoipa::OpenApi;

use super::handlers::{auth, products, users};
use super::types::{
    CreatedResponse, HealthResponse, IdResponse, JsonObject, MessageResponse, PostListResponse,
    ProductListResponse, ReviewListResponse, SearchResponse, SessionDeletedResponse,
    SettingsResponse, StringObject, UserListResponse,
};

/// Path the OpenAPI JSON is served under.
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Path the Swagger UI is mounted under.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(title = "api-scaffold", description = "Stub auth, product and user endpoints"),
    paths(
        auth::index,
        auth::health,
        auth::search,
        auth::login,
        auth::update_settings,
        auth::delete_session,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::list_product_reviews,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::list_user_posts,
    ),
    components(schemas(
        JsonObject,
        StringObject,
        MessageResponse,
        HealthResponse,
        SearchResponse,
        SettingsResponse,
        SessionDeletedResponse,
        IdResponse,
        CreatedResponse,
        ProductListResponse,
        ReviewListResponse,
        UserListResponse,
        PostListResponse,
    )),
    tags(
        (name = "auth", description = "Root, health, search, login, settings and sessions"),
        (name = "products", description = "Product catalog"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::{HttpMethod, ROUTE_TABLE};

    #[test]
    fn document_covers_route_table() {
        let doc = ApiDoc::openapi();

        for entry in ROUTE_TABLE {
            let item = doc
                .paths
                .paths
                .get(entry.path)
                .unwrap_or_else(|| panic!("missing path {}", entry.path));

            let op = match entry.method {
                HttpMethod::Get => &item.get,
                HttpMethod::Post => &item.post,
                HttpMethod::Put => &item.put,
                HttpMethod::Delete => &item.delete,
            };
            assert!(op.is_some(), "missing {} {}", entry.method, entry.path);
        }
    }
}
