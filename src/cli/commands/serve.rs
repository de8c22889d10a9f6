//! HTTP API server.
//!
//! Exposes a health check, an MCP transport endpoint, and a direct
//! transcript-by-id endpoint for integration without an MCP client.

use crate::cli::Output;
use crate::config::Settings;
use crate::mcp::{JsonRpcRequest, McpServer};
use crate::subtitles::{self, check_ytdlp};
use crate::transcript::TranscriptService;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    mcp: McpServer,
    transcripts: TranscriptService,
    settings: Settings,
}

/// Run the HTTP API server.
pub async fn run_serve(host: Option<String>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);

    let state = Arc::new(AppState {
        mcp: McpServer::new(&settings)?,
        transcripts: TranscriptService::new(&settings),
        settings,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/mcp", post(mcp_transport))
        .route("/transcript/{video_id}", get(transcript))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Tubescout API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("MCP", "POST /mcp");
    Output::kv("Transcript", "GET  /transcript/:video_id");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct HealthQuery {
    /// Video id for the yt-dlp probe (defaults to a known-good video)
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    ytdlp: subtitles::YtDlpStatus,
}

#[derive(Serialize)]
struct TranscriptResponse {
    video_id: String,
    transcript: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    kind: &'static str,
}

// === Handlers ===

/// Overall and yt-dlp health. Runs a real yt-dlp subtitle listing, so
/// this is not a cheap endpoint.
async fn health(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HealthQuery>,
) -> impl IntoResponse {
    let ytdlp = check_ytdlp(
        query.video_id.as_deref(),
        state.settings.cookie_file().as_deref(),
    )
    .await;

    let status = if ytdlp.is_ok() { "ok" } else { "degraded" };
    Json(HealthResponse { status, ytdlp })
}

/// MCP over HTTP: one JSON-RPC request per POST.
async fn mcp_transport(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    Json(state.mcp.handle_request(request).await)
}

async fn transcript(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    match state.transcripts.get_transcript(&video_id).await {
        Ok(text) => Json(TranscriptResponse {
            video_id,
            transcript: text,
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
                kind: e.kind(),
            }),
        )
            .into_response(),
    }
}
