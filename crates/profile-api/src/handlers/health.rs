use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: String,
    version: &'static str,
    users: usize,
}

/// Liveness plus the current store size
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, users) = match state.users.user_count().await {
        Ok(count) => ("healthy", count),
        Err(e) => {
            tracing::error!("User store unavailable: {}", e);
            ("degraded", 0)
        }
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: state.config.app.name.clone(),
            version: env!("CARGO_PKG_VERSION"),
            users,
        }),
    )
}
