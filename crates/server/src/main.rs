use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use cube::CubeState;
use serde::Serialize;
use storage::Storage;
use tracing::{error, info, warn};

mod api;
mod config;

use api::ApiContext;
use config::{load_settings, normalize_database_url};

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let database_url = normalize_database_url(&settings.database_url);
    let storage = Storage::new(&database_url).await.map_err(|error| {
        error!(
            %database_url,
            %error,
            "failed to open SQLite database; verify parent directory exists and permissions are correct"
        );
        error
    })?;
    let cube = api::load_or_seed_state(&storage)
        .await
        .context("failed to initialize the cube state")?;

    let state = AppState {
        api: ApiContext::new(storage, cube),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "cube server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/state", get(http_get_state))
        .route("/rotate/:target/:direction", put(http_rotate))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_get_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CubeState>, (StatusCode, Json<ErrorResponse>)> {
    match api::current_state(&state.api).await {
        Ok(cube) => Ok(Json(cube)),
        Err(error) => {
            error!(%error, "failed to load the cube state");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to get the cube's state.".to_string(),
                }),
            ))
        }
    }
}

async fn http_rotate(
    State(state): State<Arc<AppState>>,
    Path((target, direction)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    match api::rotate(&state.api, &target, &direction).await {
        Ok(receipt) => Ok(Json(MessageResponse {
            message: format!(
                "Rotated {} face by 90 degrees {}.",
                receipt.target, receipt.direction
            ),
        })),
        Err(error) => {
            warn!(%target, %direction, %error, "rotation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to rotate the face.".to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
