use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::{AdStore, StoreError};
use crate::record::{AdRecord, NewAdRecord};

#[derive(Clone)]
pub struct BoardHttpState {
    store: AdStore,
}

impl BoardHttpState {
    pub fn new(store: AdStore) -> Self {
        Self { store }
    }
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn router(state: BoardHttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ads", get(list_ads).post(create_ad))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn list_ads(
    State(state): State<BoardHttpState>,
) -> Result<Json<Vec<AdRecord>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.list().await {
        Ok(records) => {
            tracing::debug!(count = records.len(), "listed ad records");
            Ok(Json(records))
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to list ad records");
            Err(store_error(err))
        }
    }
}

async fn create_ad(
    State(state): State<BoardHttpState>,
    Json(payload): Json<NewAdRecord>,
) -> Result<(StatusCode, Json<AdRecord>), (StatusCode, Json<ErrorResponse>)> {
    match state.store.insert(&payload).await {
        Ok(stored) => {
            tracing::info!(id = stored.id, date = %stored.date, "stored ad record");
            Ok((StatusCode::CREATED, Json(stored)))
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to store ad record");
            Err(store_error(err))
        }
    }
}

fn store_error(err: StoreError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: ErrorDetail {
                code: "store_error",
                message: err.to_string(),
            },
        }),
    )
}
