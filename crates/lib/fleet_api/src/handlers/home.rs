//! Root endpoint: bootstrap health check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /`: reports the crate version and whether the store is reachable.
pub async fn home(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        greeting: fleet_core::greeting(),
        store_connected: state.store.ping().await,
    })
}
