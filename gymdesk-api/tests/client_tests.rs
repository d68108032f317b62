//! HTTP client behavior against an in-process mock backend

mod helpers;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};

use gymdesk_api::ApiError;
use helpers::client_for;

async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({"data": {"query": query.unwrap_or_default()}}))
}

async fn echo_auth(headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    Json(json!({"data": {"authorization": auth}}))
}

#[tokio::test]
async fn test_none_query_params_are_omitted() {
    let app = Router::new().route("/echo", get(echo_query));
    let client = client_for(app).await;

    let payload = client
        .get(
            "/echo",
            &[
                ("search".to_string(), Some("ada".to_string())),
                ("email".to_string(), None),
            ],
        )
        .await
        .unwrap();

    let query = payload["data"]["query"].as_str().unwrap();
    assert!(query.contains("search=ada"));
    assert!(!query.contains("email"));
    assert!(!query.contains("undefined"));
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let app = Router::new().route("/whoami", get(echo_auth));
    let client = client_for(app).await;

    let payload = client.get("/whoami", &[]).await.unwrap();
    assert_eq!(
        payload["data"]["authorization"].as_str().unwrap(),
        "Bearer test-token"
    );
}

#[tokio::test]
async fn test_401_maps_to_unauthorized() {
    let app = Router::new().route("/secure", get(|| async { StatusCode::UNAUTHORIZED }));
    let client = client_for(app).await;

    let err = client.get("/secure", &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_500_is_a_hard_status_error() {
    let app = Router::new().route(
        "/broken",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = client_for(app).await;

    let err = client.get("/broken", &[]).await.unwrap_err();
    match err {
        ApiError::Status(500, body) => assert_eq!(body, "boom"),
        other => panic!("expected Status(500), got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_body_yields_null() {
    let app = Router::new().route("/gone", delete(|| async { StatusCode::NO_CONTENT }));
    let client = client_for(app).await;

    let payload = client.delete("/gone").await.unwrap();
    assert_eq!(payload, Value::Null);
}

#[tokio::test]
async fn test_post_action_hits_sub_resource() {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route(
            "/memberships/ms-1/freeze",
            axum::routing::post(
                |State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .with_state(hits.clone());
    let client = client_for(app).await;

    client.post_action("/memberships/ms-1/freeze").await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_network_failure_surfaces_as_network_error() {
    // Nothing is listening on this port
    let client = gymdesk_api::ApiClient::with_base_url(
        "http://127.0.0.1:9",
        Arc::new(helpers::TestToken(None)),
    )
    .unwrap();

    let err = client.get("/anything", &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
