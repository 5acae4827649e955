//! Helpers shared by tests that need a real HTTP peer.

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

/// Serves `router` on an ephemeral localhost port and returns its base URL.
///
/// The server task lives until the test runtime shuts down.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Returns a localhost URL on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

pub const ADMIN_ID: &str = "7b0c1f0e-3d2a-4c55-9a51-2f1f3c1e8a01";
pub const OTHER_ADMIN_ID: &str = "5d9e2b7c-1a4f-4e8b-9c3d-7f6a5b4c3d2e";

/// Serves a stand-in for the identity service and returns its base URL.
///
/// On `GET /admin/me`, `admin-token` and `other-token` resolve to two regular admins and
/// `garbled-token` to a body without a valid id. Anything else is 401.
pub async fn serve_identity_service() -> String {
    serve(Router::new().route("/admin/me", get(admin_me))).await
}

async fn admin_me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let admin = |id: &str, username: &str, role: i32| {
        json!({ "admin": { "id": id, "name": username, "username": username, "role": role } })
    };

    match token {
        "Bearer admin-token" => (StatusCode::OK, Json(admin(ADMIN_ID, "ada", 1))),
        "Bearer other-token" => (StatusCode::OK, Json(admin(OTHER_ADMIN_ID, "grace", 1))),
        "Bearer garbled-token" => (
            StatusCode::OK,
            Json(json!({ "admin": { "id": 42, "name": "Bad" } })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        ),
    }
}
