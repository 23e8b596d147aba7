#![cfg(feature = "server")]

use adboard::AdRecord;
use adboard::server::{AdStore, BoardHttpState, router};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;

async fn app(dir: &tempfile::TempDir) -> axum::Router {
    let store = AdStore::new(dir.path().join("ads.sqlite"));
    store.init().await.expect("init store");
    router(BoardHttpState::new(store))
}

fn post_ad(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ads")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get_ads() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/ads")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
        json!({"status": "ok"})
    );
}

#[tokio::test]
async fn create_assigns_an_id_and_echoes_the_stored_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir).await;

    let payload = json!({
        "date": "2024-01-02",
        "cost": "20",
        "leadCount": 5,
        "messageCount": 2
    });
    let response = app.oneshot(post_ad(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let stored: AdRecord = serde_json::from_slice(&body).expect("stored record");
    assert_eq!(stored.id, 1);
    assert_eq!(stored.date, "2024-01-02");
    assert_eq!(stored.cost, "20");
    assert_eq!(stored.lead_count, 5);
    assert_eq!(stored.message_count, 2);
}

#[tokio::test]
async fn create_then_list_round_trips_with_unique_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir).await;

    let before = app.clone().oneshot(get_ads()).await.unwrap();
    let before_body = to_bytes(before.into_body(), usize::MAX).await.unwrap();
    let before_records: Vec<AdRecord> = serde_json::from_slice(&before_body).unwrap();

    let first = json!({"date": "2024-01-01", "cost": "10.50", "leadCount": 3, "messageCount": 1});
    let second = json!({"date": "2024-01-02", "cost": "20", "leadCount": 5, "messageCount": 2});
    app.clone()
        .oneshot(post_ad(first.to_string()))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_ad(second.to_string()))
        .await
        .unwrap();

    let after = app.oneshot(get_ads()).await.unwrap();
    assert_eq!(after.status(), StatusCode::OK);
    let after_body = to_bytes(after.into_body(), usize::MAX).await.unwrap();
    let records: Vec<AdRecord> = serde_json::from_slice(&after_body).unwrap();

    assert_eq!(records.len(), before_records.len() + 2);
    assert_eq!(records[0].cost, "10.50");
    assert_eq!(records[1].cost, "20");
    assert_ne!(records[0].id, records[1].id);
}

#[tokio::test]
async fn list_is_idempotent_between_submits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir).await;

    let payload = json!({"date": "2024-01-01", "cost": "10.50", "leadCount": 3, "messageCount": 1});
    app.clone()
        .oneshot(post_ad(payload.to_string()))
        .await
        .unwrap();

    let first = app.clone().oneshot(get_ads()).await.unwrap();
    let first_body = to_bytes(first.into_body(), usize::MAX).await.unwrap();
    let second = app.oneshot(get_ads()).await.unwrap();
    let second_body = to_bytes(second.into_body(), usize::MAX).await.unwrap();

    let first_records: Vec<AdRecord> = serde_json::from_slice(&first_body).unwrap();
    let second_records: Vec<AdRecord> = serde_json::from_slice(&second_body).unwrap();
    assert_eq!(first_records, second_records);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir).await;

    let response = app.oneshot(post_ad("not json".to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submitted_ids_are_never_taken_from_the_payload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir).await;

    // An id in the create payload is ignored; the store assigns its own.
    let payload = json!({
        "id": 999,
        "date": "2024-01-01",
        "cost": "10.50",
        "leadCount": 3,
        "messageCount": 1
    });
    let response = app
        .clone()
        .oneshot(post_ad(payload.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let stored: AdRecord = serde_json::from_slice(&body).unwrap();
    assert_eq!(stored.id, 1);
}
