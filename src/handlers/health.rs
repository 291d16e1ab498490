use crate::{handlers::AppState, models::HealthStatus};
use axum::{extract::State, Json};
use chrono::Utc;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let latest_block = match state.connection.latest_block_number().await {
        Ok(block) => Some(block),
        Err(e) => {
            tracing::warn!("Health probe failed: {}", e);
            None
        }
    };

    let status = if latest_block.is_some() {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthStatus {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        network_rpc: latest_block.is_some(),
        latest_block,
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}
