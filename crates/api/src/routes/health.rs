//! Liveness and readiness probes, mounted at the root rather than under
//! `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// Answers as long as the process serves requests; does not touch the pool.
async fn liveness() -> Json<Liveness> {
    Json(Liveness {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health/ready
///
/// 503 while the database is unreachable so load balancers hold traffic.
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match lms_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                database: "up",
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "unavailable",
                    database: "down",
                }),
            )
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(liveness))
        .route("/health/ready", get(readiness))
}
