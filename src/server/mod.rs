//! HTTP surface for note-ninja.
//!
//! One process, two surfaces sharing the same pipeline: the programmatic
//! `POST /transcribe` endpoint and the rendered upload page at `/`. Failures
//! come back as JSON naming the stage that failed, with a status code per
//! failure kind.

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use std::sync::Arc;

use crate::config::Settings;
use crate::pipeline::{PipelineCoordinator, PipelineResponse};
use crate::NoteNinjaError;

/// Shared per-process state: the coordinator owns both inference engines.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<PipelineCoordinator>,
}

/// Build the application router.
pub fn router(pipeline: Arc<PipelineCoordinator>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/transcribe", post(transcribe))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(AppState { pipeline })
}

/// Bind and serve until the process is stopped.
pub async fn serve(settings: &Settings, pipeline: Arc<PipelineCoordinator>) -> anyhow::Result<()> {
    let app = router(pipeline, settings.server.max_upload_bytes);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// GET / - Upload page
async fn index() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

/// GET /health - Health check endpoint
async fn health_check() -> impl IntoResponse {
    "ok"
}

/// POST /transcribe - Accept one audio file, return transcript and summary
async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PipelineResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| NoteNinjaError::Ingress(format!("Malformed multipart body: {e}")))?
    {
        if field.file_name().is_none() && field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| NoteNinjaError::Ingress(format!("Failed to read upload: {e}")))?;

        tracing::info!("Received upload '{}' ({} bytes)", file_name, bytes.len());

        let response = state.pipeline.process(&file_name, &bytes).await?;
        return Ok(Json(response));
    }

    Err(NoteNinjaError::Ingress("No file field in upload".to_string()).into())
}

/// Failure payload returned for any non-success response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    stage: &'static str,
}

/// Error wrapper mapping pipeline failures to HTTP responses.
#[derive(Debug)]
pub struct ApiError(NoteNinjaError);

impl From<NoteNinjaError> for ApiError {
    fn from(err: NoteNinjaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            NoteNinjaError::Ingress(_) => StatusCode::BAD_REQUEST,
            NoteNinjaError::Transcription(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NoteNinjaError::Summarization(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!("Request failed at {} stage: {}", self.0.stage(), self.0);

        let body = ErrorBody {
            error: self.0.to_string(),
            stage: self.0.stage(),
        };

        (status, Json(body)).into_response()
    }
}
