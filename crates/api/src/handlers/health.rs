use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: Status,
    pub version: String,
    /// Absent when running on in-memory storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<Status>,
}

/// Liveness plus a database round trip when Postgres backs the service.
/// GET /actuator/health
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthReport>) {
    let database = match &state.database {
        Some(db) => Some(match db.ping().await {
            Ok(()) => Status::Up,
            Err(e) => {
                tracing::error!(error = %e, "Database health check failed");
                Status::Down
            }
        }),
        None => None,
    };

    let status = if database == Some(Status::Down) {
        Status::Down
    } else {
        Status::Up
    };
    let code = match status {
        Status::Up => StatusCode::OK,
        Status::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
        }),
    )
}
