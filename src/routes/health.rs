use axum::{Json, extract::State};
use serde::Serialize;

use crate::{AppState, error::Result};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub store: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready once the product store answers a round-trip.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadinessResponse>> {
    state.store.ping().await?;

    Ok(Json(ReadinessResponse {
        status: "ready",
        store: "reachable",
    }))
}
