use axum::{extract::State, response::Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::engine::RiskEngine;
use crate::error::AppError;
use crate::types::{HealthResponse, ScoreRequest, ScoreResponse};

pub type AppState = Arc<RiskEngine>;

/// POST /score
pub async fn score(
    State(engine): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let (features, result) = match engine.evaluate(&payload.url) {
        Ok(pair) => pair,
        Err(err) => {
            warn!("Rejected score request: {}", err);
            return Err(err);
        }
    };

    info!(
        "Scored {} as {} ({}/100)",
        features.url,
        result.label.as_str(),
        result.score
    );

    Ok(Json(ScoreResponse::new(features, result)))
}

/// GET /health
pub async fn health() -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: "shrike-engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    }))
}
