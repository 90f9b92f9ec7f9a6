//! HTTP front for the endpoints
//!
//! Converts plain HTTP requests into the `GatewayEvent`s the handlers expect
//! and their `ApiResponse` envelopes back into HTTP responses, so the
//! service can run outside a serverless gateway.

use crate::adapters::storage::{LocalFileStore, SqliteRecordStore};
use crate::domain::{ApiResponse, GatewayEvent, CORS_HEADERS};
use crate::error::AppError;
use crate::handlers::{FileHandler, TextHandler};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::HashMap;
use std::sync::Arc;

/// Handlers and stores shared by every request
#[derive(Clone)]
pub struct AppState {
    pub text_handler: Arc<TextHandler>,
    pub file_handler: Arc<FileHandler>,
    pub files: Arc<LocalFileStore>,
    pub records: Arc<SqliteRecordStore>,
}

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/translate", post(translate_text))
        .route(
            "/translate-file",
            post(translate_file)
                .options(preflight)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/files/:key", get(download_file))
        .route("/records/:id", get(lookup_record))
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn translate_text(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = match String::from_utf8(body.to_vec()) {
        Ok(text) => GatewayEvent {
            headers: gateway_headers(&headers),
            body: Some(text),
            is_base64_encoded: false,
        },
        Err(_) => GatewayEvent {
            headers: gateway_headers(&headers),
            body: Some(STANDARD.encode(&body)),
            is_base64_encoded: true,
        },
    };

    into_http(state.text_handler.handle(&event).await)
}

async fn translate_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = GatewayEvent {
        headers: gateway_headers(&headers),
        body: Some(STANDARD.encode(&body)),
        is_base64_encoded: true,
    };

    into_http(state.file_handler.handle(&event).await)
}

async fn preflight() -> Response {
    let mut response = StatusCode::OK.into_response();
    for (name, value) in CORS_HEADERS {
        insert_header(&mut response, name, value);
    }
    response
}

async fn download_file(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    match state.files.read(&key).await {
        Ok(content) => (
            [(header::CONTENT_TYPE, "application/octet-stream")],
            content,
        )
            .into_response(),
        Err(AppError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            log::error!("Failed to read stored file {}: {}", key, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn lookup_record(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.records.get_record(&id).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            log::error!("Failed to look up record {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn gateway_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

fn into_http(envelope: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        envelope.body,
    )
        .into_response();

    for (name, value) in envelope.headers.unwrap_or_default() {
        insert_header(&mut response, &name, &value);
    }
    response
}

fn insert_header(response: &mut Response, name: &str, value: &str) {
    match (
        HeaderName::from_bytes(name.as_bytes()),
        HeaderValue::from_str(value),
    ) {
        (Ok(name), Ok(value)) => {
            response.headers_mut().insert(name, value);
        }
        _ => log::warn!("Skipping unrepresentable response header {}", name),
    }
}
