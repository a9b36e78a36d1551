//! HTTP handlers for the relay

use super::AppState;
use super::error::{RelayError, Result};
use super::report::{GameReport, WebhookPayload};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::info;

/// POST handler: validate the report and forward it
pub async fn receive_result(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>> {
    let report = GameReport::parse(&body)?;

    info!(
        result = %report.result,
        word = %report.word,
        attempts = %report.attempts,
        telegram_id = ?report.telegram_id,
        "game result received"
    );

    state
        .forwarder
        .forward(&WebhookPayload::from(report))
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Game result recorded"
    })))
}

/// Fallback for every method other than POST
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
