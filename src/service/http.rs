//! Accounting endpoints — maps HTTP verbs to record-store operations.
//!
//! ## Routes
//!
//! - `POST /accounting` — append the JSON body as one record; a
//!   `{"action":"clear"}` body clears the store instead.
//! - `GET /accounting` — return every record; with `?action=status`,
//!   return a `{status, timestamp, recordCount}` summary instead.
//! - `DELETE /accounting` — clear the store.
//! - `GET /accounting/health` — ensure the backing file exists and report ok.
//!
//! The first `GET /accounting` lazily registers the shutdown cleanup, so
//! short-lived processes that never read the store install no signal
//! handlers.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tripkit::{service, FileRecordStore};
//!
//! let store = Arc::new(FileRecordStore::new("data/accounting_records.json"));
//!
//! // Get the router to compose with other axum routes
//! let app = service::router(store.clone());
//!
//! // Or serve directly
//! service::serve(store, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use super::lifecycle;
use crate::store::{is_clear_action, RecordStore, StoreError};

type SharedStore = Arc<dyn RecordStore>;

/// Build an axum `Router` serving the accounting endpoints on the given store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/accounting",
            post(append_handler).get(read_handler).delete(clear_handler),
        )
        .route("/accounting/health", get(health_handler))
        .with_state(store)
}

/// Serve the accounting endpoints over HTTP at the given address
/// (e.g. `"0.0.0.0:3000"`).
pub async fn serve(store: SharedStore, addr: &str) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "accounting service listening");
    axum::serve(listener, app).await
}

#[derive(Deserialize)]
struct ReadParams {
    action: Option<String>,
}

/// `POST /accounting` — save one record, or clear on the special payload.
async fn append_handler(
    State(store): State<SharedStore>,
    Json(record): Json<Value>,
) -> impl IntoResponse {
    if let Err(e) = store.ensure() {
        return store_failure("ensure", e);
    }

    let cleared = is_clear_action(&record);
    match store.append(record) {
        Ok(()) if cleared => Json(json!({ "success": true, "action": "cleared" })).into_response(),
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(e) => store_failure("append", e),
    }
}

/// `GET /accounting` — list records, or summarize with `?action=status`.
async fn read_handler(
    State(store): State<SharedStore>,
    Query(params): Query<ReadParams>,
) -> impl IntoResponse {
    // Only installed once, on the first read of the store's lifetime.
    lifecycle::register(store.clone());

    if params.action.as_deref() == Some("status") {
        let status = store.status();
        let code = if status.is_running() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        return (code, Json(status)).into_response();
    }

    match store.read_all() {
        Ok(records) => Json(records).into_response(),
        Err(e) => store_failure("read", e),
    }
}

/// `DELETE /accounting` — clear every record.
async fn clear_handler(State(store): State<SharedStore>) -> impl IntoResponse {
    match store.clear() {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(e) => store_failure("clear", e),
    }
}

/// `GET /accounting/health` — existence probe for the backing storage.
async fn health_handler(State(store): State<SharedStore>) -> impl IntoResponse {
    match store.ensure() {
        Ok(()) => Json(json!({ "ok": true })).into_response(),
        Err(e) => store_failure("ensure", e),
    }
}

fn store_failure(operation: &str, e: StoreError) -> axum::response::Response {
    tracing::error!(operation, error = %e, "record store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
        .into_response()
}
