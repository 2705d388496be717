//! Integration tests for the API scaffold.
//!
//! Each test binds a real listener on an ephemeral port and talks to it over
//! HTTP, so the full layer stack (CORS, tracing, metrics) is in the path.

use std::net::SocketAddr;

use api_scaffold::api::{create_router, RouterOptions};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Spawn the server and return its base URL.
async fn spawn_server(options: RouterOptions) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, create_router(options)).await.ok();
    });

    format!("http://{}", addr)
}

fn full_options() -> RouterOptions {
    RouterOptions {
        swagger: true,
        cors_permissive: true,
        metrics: None,
    }
}

#[tokio::test]
async fn root_and_health() {
    let base = spawn_server(full_options()).await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"message": "Welcome to the API"}));

    let body: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn search_over_http() {
    let base = spawn_server(full_options()).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{}/search", base))
        .query(&[("q", "shoes"), ("page", "3")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"query": "shoes", "page": 3}));

    let res = client
        .get(format!("{}/search?page=three", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn settings_and_users_over_http() {
    let base = spawn_server(full_options()).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .put(format!("{}/settings/42", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"userId": "42", "theme": ""}));

    let body: Value = client
        .post(format!("{}/users", base))
        .json(&json!({"name": "Ada", "email": "ada@example.com"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"id": 1}));
}

#[tokio::test]
async fn login_without_json_content_type_is_rejected() {
    let base = spawn_server(full_options()).await;

    let res = reqwest::Client::new()
        .post(format!("{}/auth/login", base))
        .body("email=a")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn permissive_cors_allows_any_origin() {
    let base = spawn_server(full_options()).await;

    let res = reqwest::Client::new()
        .get(format!("{}/products", base))
        .header("Origin", "https://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"products": []}));
}

#[tokio::test]
async fn openapi_document_lists_all_groups() {
    let base = spawn_server(full_options()).await;

    let doc: Value = reqwest::get(format!("{}/openapi.json", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let paths = doc["paths"].as_object().expect("paths object");
    assert_eq!(paths.len(), 12);
    for path in ["/", "/search", "/settings/{userId}", "/users/{userId}/posts"] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}
