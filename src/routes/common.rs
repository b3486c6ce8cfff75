//! Liveness and readiness. Ready means the database answers and every table exists.

use crate::migration::table_names;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let present: Vec<String> =
        match sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(&state.pool)
            .await
        {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "readiness check failed");
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(Readiness {
                        status: "unavailable",
                        missing_tables: Vec::new(),
                        error: Some(e.to_string()),
                    }),
                );
            }
        };
    let missing: Vec<&'static str> = table_names()
        .filter(|t| !present.iter().any(|p| p == t))
        .collect();
    if missing.is_empty() {
        (
            StatusCode::OK,
            Json(Readiness {
                status: "ready",
                missing_tables: missing,
                error: None,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Readiness {
                status: "schema_missing",
                missing_tables: missing,
                error: None,
            }),
        )
    }
}

/// GET /health (204) and GET /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
