//! Root, health, search, login, settings and session handlers.

use axum::{
    extract::{Path, Query},
    Json,
};
use tracing::debug;

use crate::api::types::{
    HealthResponse, MessageResponse, SearchParams, SearchResponse, SessionDeletedResponse,
    SettingsResponse, StringObject,
};

/// Page reported by `/search` when none is given.
pub const DEFAULT_SEARCH_PAGE: i32 = 1;

/// Welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = "auth",
    responses((status = 200, description = "Welcome message", body = MessageResponse))
)]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the API"))
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "auth",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Echo the search text and page.
#[utoipa::path(
    get,
    path = "/search",
    tag = "auth",
    params(SearchParams),
    responses(
        (status = 200, description = "Search echo", body = SearchResponse),
        (status = 400, description = "Non-integer page")
    )
)]
pub async fn search(Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    Json(SearchResponse {
        query: params.q.unwrap_or_default(),
        page: params.page.unwrap_or(DEFAULT_SEARCH_PAGE),
    })
}

/// Accept any credentials.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = StringObject,
    responses(
        (status = 200, description = "Login acknowledged", body = MessageResponse),
        (status = 422, description = "Nested object or array value")
    )
)]
pub async fn login(Json(body): Json<StringObject>) -> Json<MessageResponse> {
    debug!(fields = body.0.len(), "login request");
    Json(MessageResponse::new("Login successful"))
}

/// Echo the user id and requested theme.
#[utoipa::path(
    put,
    path = "/settings/{userId}",
    tag = "auth",
    params(("userId" = String, Path, description = "User id")),
    request_body = StringObject,
    responses(
        (status = 200, description = "Settings echo", body = SettingsResponse),
        (status = 422, description = "Nested object or array value")
    )
)]
pub async fn update_settings(
    Path(user_id): Path<String>,
    Json(body): Json<StringObject>,
) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        theme: body.text_or_empty("theme"),
        user_id,
    })
}

#[utoipa::path(
    delete,
    path = "/sessions/{sessionId}",
    tag = "auth",
    params(("sessionId" = String, Path, description = "Session id")),
    responses((status = 200, description = "Session deleted", body = SessionDeletedResponse))
)]
pub async fn delete_session(Path(session_id): Path<String>) -> Json<SessionDeletedResponse> {
    Json(SessionDeletedResponse {
        message: "Session deleted".to_string(),
        session_id,
    })
}
