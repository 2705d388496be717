//! User management handlers.

use axum::{
    extract::{Path, Query},
    Json,
};
use tracing::debug;

use crate::api::types::{
    CreatedResponse, IdResponse, MessageResponse, PostListResponse, StringObject, UserListParams,
    UserListResponse,
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(UserListParams),
    responses(
        (status = 200, description = "Empty user list", body = UserListResponse),
        (status = 400, description = "Non-integer page or limit")
    )
)]
pub async fn list_users(Query(params): Query<UserListParams>) -> Json<UserListResponse> {
    debug!(page = ?params.page, limit = ?params.limit, "listing users");
    Json(UserListResponse::default())
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses((status = 200, description = "Id echo", body = IdResponse))
)]
pub async fn get_user(Path(id): Path<String>) -> Json<IdResponse> {
    Json(IdResponse { id })
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = StringObject,
    responses((status = 200, description = "Created", body = CreatedResponse))
)]
pub async fn create_user(Json(_body): Json<StringObject>) -> Json<CreatedResponse> {
    Json(CreatedResponse::stub())
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    request_body = StringObject,
    responses((status = 200, description = "Id echo", body = IdResponse))
)]
pub async fn update_user(
    Path(id): Path<String>,
    Json(_body): Json<StringObject>,
) -> Json<IdResponse> {
    Json(IdResponse { id })
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses((status = 200, description = "Deleted", body = MessageResponse))
)]
pub async fn delete_user(Path(id): Path<String>) -> Json<MessageResponse> {
    debug!(%id, "deleting user");
    Json(MessageResponse::new("User deleted"))
}

#[utoipa::path(
    get,
    path = "/users/{userId}/posts",
    tag = "users",
    params(("userId" = String, Path, description = "User id")),
    responses((status = 200, description = "Empty post list", body = PostListResponse))
)]
pub async fn list_user_posts(Path(user_id): Path<String>) -> Json<PostListResponse> {
    debug!(%user_id, "listing posts");
    Json(PostListResponse::default())
}
