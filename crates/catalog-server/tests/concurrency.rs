//! Concurrent request handling against a shared store.

use std::collections::BTreeSet;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use catalog_server::router::build_router;
use catalog_server::state::AppState;

fn test_app() -> Router {
    let state = AppState::in_memory().expect("failed to create in-memory AppState");
    build_router(state)
}

async fn create(app: Router, i: usize) -> i64 {
    let body = json!({ "name": format!("item-{i}"), "seller": "Acme", "price": i as f64 });
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    json["id"].as_i64().unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() {
    let app = test_app();
    const N: usize = 32;

    let handles: Vec<_> = (0..N)
        .map(|i| tokio::spawn(create(app.clone(), i)))
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        let id = handle.await.unwrap();
        assert!(ids.insert(id), "duplicate id {id}");
    }

    let expected: BTreeSet<i64> = (1..=N as i64).collect();
    assert_eq!(ids, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_to_same_id_leave_one_winner() {
    let app = test_app();
    create(app.clone(), 0).await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = json!({ "name": format!("v{i}"), "seller": "Acme", "price": 1.0 });
                let response = app
                    .oneshot(
                        Request::builder()
                            .method(Method::PUT)
                            .uri("/api/products/1")
                            .header("content-type", "application/json")
                            .body(Body::from(serde_json::to_vec(&body).unwrap()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let list: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert!(list[0]["name"].as_str().unwrap().starts_with('v'));
}
