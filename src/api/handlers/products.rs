//! Product catalog handlers.

use axum::{
    extract::{Path, Query},
    Json,
};
use tracing::debug;

use crate::api::types::{
    CreatedResponse, IdResponse, JsonObject, MessageResponse, ProductListParams,
    ProductListResponse, ReviewListResponse,
};

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(ProductListParams),
    responses((status = 200, description = "Empty product list", body = ProductListResponse))
)]
pub async fn list_products(Query(params): Query<ProductListParams>) -> Json<ProductListResponse> {
    debug!(category = ?params.category, "listing products");
    Json(ProductListResponse::default())
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses((status = 200, description = "Id echo", body = IdResponse))
)]
pub async fn get_product(Path(id): Path<String>) -> Json<IdResponse> {
    Json(IdResponse { id })
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = JsonObject,
    responses((status = 200, description = "Created", body = CreatedResponse))
)]
pub async fn create_product(Json(_body): Json<JsonObject>) -> Json<CreatedResponse> {
    Json(CreatedResponse::stub())
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    request_body = JsonObject,
    responses((status = 200, description = "Id echo", body = IdResponse))
)]
pub async fn update_product(
    Path(id): Path<String>,
    Json(_body): Json<JsonObject>,
) -> Json<IdResponse> {
    Json(IdResponse { id })
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses((status = 200, description = "Deleted", body = MessageResponse))
)]
pub async fn delete_product(Path(id): Path<String>) -> Json<MessageResponse> {
    debug!(%id, "deleting product");
    Json(MessageResponse::new("Product deleted"))
}

#[utoipa::path(
    get,
    path = "/products/{productId}/reviews",
    tag = "products",
    params(("productId" = String, Path, description = "Product id")),
    responses((status = 200, description = "Empty review list", body = ReviewListResponse))
)]
pub async fn list_product_reviews(Path(product_id): Path<String>) -> Json<ReviewListResponse> {
    debug!(%product_id, "listing reviews");
    Json(ReviewListResponse::default())
}
