//! Health check handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::UserAccountRepository;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    environment: String,
    database: &'static str,
}

/// Simple health check - also probes the database
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let repo = UserAccountRepository::new(state.get_db());
    let database = match repo.find_all().await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check database probe failed");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database,
    })
}
