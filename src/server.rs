//! HTTP service for the admin panel's DM importer.
//!
//! Routes:
//! - `GET /health`
//! - `POST /api/dm/parse`: JSON `{ text, member1_name?, member2_name? }`
//! - `POST /api/dm/recognize?lang=..`: raw image bytes
//!
//! Both DM routes answer with a [`DmDraft`] that pre-fills the message editor.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::config::MmemoryConfig;
use crate::dm::{parse_messages_with, DmDraft};
use crate::ocr::{self, RecognizeError, TextRecognizer};

/// Application context shared by all handlers.
pub struct AppState {
    pub config: MmemoryConfig,
    pub recognizer: Arc<dyn TextRecognizer>,
}

impl AppState {
    pub fn new(config: MmemoryConfig, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { config, recognizer }
    }

    /// Build state with the recognizer named in the config.
    pub fn from_config(config: MmemoryConfig) -> Result<Self> {
        let recognizer: Arc<dyn TextRecognizer> =
            Arc::from(ocr::create_recognizer(&config.ocr)?);
        Ok(Self::new(config, recognizer))
    }
}

/// JSON error body: `{"error": {"code": .., "message": ..}}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "bad_request",
            message: msg.into(),
        }
    }
    pub fn recognition_failed(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            code: "recognition_failed",
            message: msg.into(),
        }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal_error",
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<RecognizeError> for ApiError {
    fn from(err: RecognizeError) -> Self {
        ApiError::recognition_failed(format!("recognition failed: {err}"))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
    pub member1_name: Option<String>,
    pub member2_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecognizeQuery {
    pub lang: Option<String>,
    pub member1_name: Option<String>,
    pub member2_name: Option<String>,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/dm/parse", post(parse_dm))
        .route("/api/dm/recognize", post(recognize_dm))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn parse_dm(
    State(state): State<Arc<AppState>>,
    req: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<DmDraft>, ApiError> {
    let Json(req) = req?;
    let options = state
        .config
        .parse_options_for(req.member1_name.as_deref(), req.member2_name.as_deref());
    let messages = parse_messages_with(&req.text, &options);
    tracing::info!(
        text_len = req.text.len(),
        messages = messages.len(),
        "parsed DM text"
    );
    Ok(Json(DmDraft::new(messages, None)))
}

async fn recognize_dm(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecognizeQuery>,
    body: Bytes,
) -> Result<Json<DmDraft>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("request body must contain an image"));
    }

    let language = query
        .lang
        .clone()
        .unwrap_or_else(|| state.config.ocr.language.clone());
    tracing::info!(
        image_bytes = body.len(),
        engine = state.recognizer.name(),
        language = %language,
        "recognizing DM screenshot"
    );

    let recognizer = Arc::clone(&state.recognizer);
    let text = tokio::task::spawn_blocking(move || recognizer.recognize(&body, &language))
        .await
        .map_err(|e| ApiError::internal(format!("recognition task failed: {e}")))?
        .inspect_err(|e| tracing::warn!(error = %e, "recognition failed"))?;

    let options = state
        .config
        .parse_options_for(query.member1_name.as_deref(), query.member2_name.as_deref());
    let messages = parse_messages_with(&text, &options);
    if messages.is_empty() {
        tracing::info!("no messages found in recognized text");
    }
    Ok(Json(DmDraft::new(messages, None)))
}

/// Start the HTTP service on the configured address.
pub async fn serve(config: MmemoryConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::from_config(config)?);
    tracing::info!(engine = state.recognizer.name(), "OCR recognizer ready");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "mmemory DM service listening at http://{bind_addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
