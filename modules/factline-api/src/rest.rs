//! REST handlers for the entity CRUD surface.
//!
//! Thin glue: build a command descriptor, hand it to the processor, map the
//! outcome to a status code. Every accepted mutation answers `202` — the
//! API confirms durable recording, never projection outcome.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};
use tracing::warn;

use factline_common::CommandError;
use factline_journal::{Command, EventKind, Payload};

use crate::AppState;

// --- Helpers ---

/// Coerce a request body into a payload mapping. Non-object bodies become
/// an empty payload; shape validation is out of scope.
fn body_to_payload(body: Value) -> Payload {
    match body {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

/// The path id always wins over whatever the body claims.
fn payload_with_id(body: Value, id: &str) -> Payload {
    let mut payload = body_to_payload(body);
    payload.insert("id".to_string(), Value::String(id.to_string()));
    payload
}

async fn run_command(state: &AppState, command: Command) -> axum::response::Response {
    let mut guard = state.core.write().await;
    let core = &mut *guard;
    match core.processor.execute(&mut core.aggregates, command) {
        Ok(_) => StatusCode::ACCEPTED.into_response(),
        Err(CommandError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            warn!(error = %e, "command rejected: journal append failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// --- Handlers ---

pub async fn api_root() -> impl IntoResponse {
    Json(json!({ "message": "factline is up" }))
}

pub async fn api_list(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<String>,
    Query(filters): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let core = state.core.read().await;
    match core.aggregates.query(&entity, &filters) {
        Some(records) => Json(records).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn api_get(
    State(state): State<Arc<AppState>>,
    Path((entity, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let core = state.core.read().await;
    match core.aggregates.get(&entity, &id) {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn api_create(
    State(state): State<Arc<AppState>>,
    Path(entity): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let command = Command::new(entity, EventKind::Create, body_to_payload(body));
    run_command(&state, command).await
}

pub async fn api_update(
    State(state): State<Arc<AppState>>,
    Path((entity, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let command = Command::new(entity, EventKind::Update, payload_with_id(body, &id));
    run_command(&state, command).await
}

pub async fn api_patch(
    State(state): State<Arc<AppState>>,
    Path((entity, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let command = Command::new(entity, EventKind::Patch, payload_with_id(body, &id));
    run_command(&state, command).await
}

pub async fn api_delete(
    State(state): State<Arc<AppState>>,
    Path((entity, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut payload = Payload::new();
    payload.insert("id".to_string(), Value::String(id));
    let command = Command::new(entity, EventKind::Delete, payload);
    run_command(&state, command).await
}
